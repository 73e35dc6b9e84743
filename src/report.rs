//! Report Emitters
//!
//! Two independent transforms from an audit snapshot to an output sink: the JUnit XML
//! report for CI dashboards and the console summary tables. Both only borrow the
//! snapshot and issue at most one write per call.

pub mod destination;
pub mod junit;
pub mod summary;

pub use destination::ReportDestination;
pub use junit::{
    build_junit_report, render_junit_xml, write_junit_report, write_junit_report_with,
    JUnitOptions, SUITE_NAME,
};
pub use summary::{print_summary, render_summary, SummaryTable, TableStyle};

use crate::error::ReportError;
use crate::model::LicenseResults;
use tracing::warn;

/// Check that no dependency appears in more than one result set.
///
/// Overlaps are logged. With `strict` they are also returned as an error.
pub fn check_partition(results: &LicenseResults, strict: bool) -> Result<(), ReportError> {
    let overlaps = results.overlaps();
    if overlaps.is_empty() {
        return Ok(());
    }

    for overlap in &overlaps {
        let sets: Vec<&str> = overlap.sets.iter().map(|s| s.as_str()).collect();
        warn!(
            dependency = %overlap.name,
            sets = %sets.join(","),
            "Dependency reported in more than one result set"
        );
    }

    if strict {
        return Err(ReportError::Overlap(
            overlaps.into_iter().map(|o| o.name).collect(),
        ));
    }
    Ok(())
}
