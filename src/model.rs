//! Audit Result Model
//!
//! The immutable snapshot produced by the audit engine: every audited dependency
//! lands in exactly one of the `pass`, `fail` or `ignored` result sets.

use crate::error::ReportError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::io::Read;
use std::path::Path;

mod reason;
mod result_map;

pub use reason::FailureReason;
pub use result_map::ResultMap;

/// Audit outcome for a single dependency
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyResult {
    /// Detected license identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    /// Source repository URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,

    /// Failure reason, present only for failed dependencies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<FailureReason>,
}

impl DependencyResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn licensed(license: impl Into<String>) -> Self {
        Self::new().with_license(license)
    }

    pub fn with_license(mut self, license: impl Into<String>) -> Self {
        self.license = Some(license.into());
        self
    }

    pub fn with_repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = Some(repository.into());
        self
    }

    pub fn with_reason(mut self, reason: FailureReason) -> Self {
        self.reason = Some(reason);
        self
    }
}

/// One of the three result sets of a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ResultSet {
    Pass,
    Fail,
    Ignored,
}

impl ResultSet {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultSet::Pass => "pass",
            ResultSet::Fail => "fail",
            ResultSet::Ignored => "ignored",
        }
    }
}

impl fmt::Display for ResultSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dependency name found in more than one result set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlap {
    pub name: String,
    pub sets: Vec<ResultSet>,
}

/// Audit Result Snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseResults {
    /// Dependencies whose license was found and is compatible
    #[serde(default)]
    pub pass: ResultMap,

    /// Dependencies whose license was missing or incompatible
    #[serde(default)]
    pub fail: ResultMap,

    /// Dependencies excluded from judgment
    #[serde(default)]
    pub ignored: ResultMap,
}

impl LicenseResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self, ReportError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ReportError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ReportError> {
        let json = std::fs::read_to_string(path).map_err(|source| ReportError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn result_set(&self, set: ResultSet) -> &ResultMap {
        match set {
            ResultSet::Pass => &self.pass,
            ResultSet::Fail => &self.fail,
            ResultSet::Ignored => &self.ignored,
        }
    }

    /// Sizes of the `(pass, fail, ignored)` result sets.
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.pass.len(), self.fail.len(), self.ignored.len())
    }

    pub fn is_empty(&self) -> bool {
        self.pass.is_empty() && self.fail.is_empty() && self.ignored.is_empty()
    }

    /// Names present in more than one result set, sorted by name.
    pub fn overlaps(&self) -> Vec<Overlap> {
        let mut seen: BTreeMap<&str, Vec<ResultSet>> = BTreeMap::new();
        for set in [ResultSet::Pass, ResultSet::Fail, ResultSet::Ignored] {
            for name in self.result_set(set).names() {
                seen.entry(name).or_default().push(set);
            }
        }

        seen.into_iter()
            .filter(|(_, sets)| sets.len() > 1)
            .map(|(name, sets)| Overlap {
                name: name.to_string(),
                sets,
            })
            .collect()
    }
}
