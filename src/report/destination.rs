//! Where the JUnit report goes.

use std::fmt;
use std::path::PathBuf;

/// JUnit report destination
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ReportDestination {
    /// Write the document to a file, replacing any existing content
    File(PathBuf),
    /// Write the document followed by a newline to the output stream
    Stdout,
    /// No report configured
    #[default]
    Disabled,
}

impl ReportDestination {
    /// Path value that selects the output stream instead of a file.
    pub const STDOUT_SENTINEL: &'static str = "-";

    /// Resolve a configured output path. Absent or empty means disabled.
    pub fn from_arg(value: Option<&str>) -> Self {
        match value {
            None | Some("") => ReportDestination::Disabled,
            Some(Self::STDOUT_SENTINEL) => ReportDestination::Stdout,
            Some(path) => ReportDestination::File(PathBuf::from(path)),
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, ReportDestination::Disabled)
    }
}

impl fmt::Display for ReportDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportDestination::File(path) => write!(f, "{}", path.display()),
            ReportDestination::Stdout => f.write_str("stdout"),
            ReportDestination::Disabled => f.write_str("disabled"),
        }
    }
}
