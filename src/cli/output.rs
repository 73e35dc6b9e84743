//! CLI output: error mapping and exit status.

use crate::cli::RunOutcome;
use crate::error::ReportError;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_FAILURES: u8 = 2;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &ReportError) -> String {
    match e {
        ReportError::Overlap(_) => format!("{} (disable strict_partition to report anyway)", e),
        _ => e.to_string(),
    }
}

/// Exit status for a completed run.
pub fn exit_code(outcome: &RunOutcome, fail_on_failures: bool) -> u8 {
    if fail_on_failures && outcome.failed > 0 {
        EXIT_FAILURES
    } else {
        EXIT_SUCCESS
    }
}
