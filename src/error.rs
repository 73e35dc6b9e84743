//! Error types for license audit reporting.

use std::path::PathBuf;
use thiserror::Error;

/// Reporting errors
#[derive(Debug, Error)]
pub enum ReportError {
    /// The JUnit document could not be serialized or written to its destination
    #[error("Failed to write JUnit report to {destination}: {message}")]
    ReportWrite {
        destination: String,
        message: String,
    },

    /// Writing the console summary to the output stream failed
    #[error("Failed to write summary: {0}")]
    SinkWrite(#[source] std::io::Error),

    #[error("Failed to read audit results from {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid audit results: {0}")]
    Snapshot(String),

    #[error("Dependencies reported in more than one result set: {}", .0.join(", "))]
    Overlap(Vec<String>),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for ReportError {
    fn from(err: config::ConfigError) -> Self {
        ReportError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        ReportError::Snapshot(err.to_string())
    }
}
