//! Licaudit Report: Dependency License Audit Reporting
//!
//! Renders the outcome of a dependency license audit as a JUnit XML test suite for CI
//! dashboards and as pass/failure tables for the console.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod report;

pub use error::ReportError;
pub use model::{DependencyResult, FailureReason, LicenseResults, ResultMap};
pub use report::{print_summary, write_junit_report, ReportDestination, TableStyle};

/// Result type for reporting operations
pub type Result<T> = std::result::Result<T, ReportError>;
