//! Console summary: pass and failure tables.

use crate::error::ReportError;
use crate::model::{DependencyResult, LicenseResults, ResultMap};
use comfy_table::{presets, Table};
use serde::{Deserialize, Serialize};
use std::io::Write;

pub const HEADER: [&str; 4] = ["Package", "License", "Reason", "Repository"];

/// Shown for absent values
const PLACEHOLDER: &str = "?";

/// Reason column value for passing dependencies
const PASS_REASON: &str = "pass";

/// Border preset for rendered tables
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStyle {
    #[default]
    Utf8,
    Ascii,
}

impl TableStyle {
    fn preset(&self) -> &'static str {
        match self {
            TableStyle::Utf8 => presets::UTF8_FULL,
            TableStyle::Ascii => presets::ASCII_FULL,
        }
    }
}

/// Header-plus-rows matrix for one summary table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SummaryTable {
    /// Rows for the `pass` result set, in insertion order.
    pub fn passes(pass: &ResultMap) -> Self {
        Self::from_map(pass, |_| PASS_REASON.to_string())
    }

    /// Rows for the `fail` result set, in insertion order.
    pub fn failures(fail: &ResultMap) -> Self {
        Self::from_map(fail, |result| {
            result
                .reason
                .map(|reason| reason.as_str().to_string())
                .unwrap_or_else(|| PLACEHOLDER.to_string())
        })
    }

    fn from_map(map: &ResultMap, reason: impl Fn(&DependencyResult) -> String) -> Self {
        let rows = map
            .iter()
            .map(|(name, result)| {
                vec![
                    name.to_string(),
                    or_placeholder(result.license.as_deref()),
                    reason(result),
                    or_placeholder(result.repository.as_deref()),
                ]
            })
            .collect();

        SummaryTable {
            headers: HEADER.iter().map(|h| h.to_string()).collect(),
            rows,
        }
    }

    pub fn render(&self, style: TableStyle) -> String {
        let mut table = Table::new();
        table.load_preset(style.preset());
        table.set_header(&self.headers);
        for row in &self.rows {
            table.add_row(row);
        }
        table.to_string()
    }
}

fn or_placeholder(value: Option<&str>) -> String {
    value.unwrap_or(PLACEHOLDER).to_string()
}

/// Render the passes table, a blank line, then the failures table.
pub fn render_summary(results: &LicenseResults, style: TableStyle) -> String {
    let mut out = SummaryTable::passes(&results.pass).render(style);
    out.push_str("\n\n");
    out.push_str(&SummaryTable::failures(&results.fail).render(style));
    out.push('\n');
    out
}

/// Write the console summary to `stdout`. Ignored dependencies are not shown.
pub fn print_summary<W: Write + ?Sized>(
    results: &LicenseResults,
    stdout: &mut W,
    style: TableStyle,
) -> Result<(), ReportError> {
    let summary = render_summary(results, style);
    stdout
        .write_all(summary.as_bytes())
        .and_then(|_| stdout.flush())
        .map_err(ReportError::SinkWrite)
}
