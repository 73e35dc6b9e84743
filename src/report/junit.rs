//! JUnit XML report
//!
//! Maps a license audit snapshot to a single JUnit test suite with one test case per
//! dependency. Ignored dependencies are skipped cases, failed dependencies carry a
//! `failure` element typed with the raw reason code, everything else passes.

use crate::error::ReportError;
use crate::model::{DependencyResult, LicenseResults};
use crate::report::ReportDestination;
use junit_report::{Duration, Report, TestCase, TestCaseBuilder, TestSuiteBuilder};
use std::io::Write;
use std::time::SystemTime;
use tracing::debug;

/// Name of the generated test suite.
pub const SUITE_NAME: &str = "Dependency Licenses Audit";

/// Rendered in failure messages when no license was detected.
const ABSENT_LICENSE: &str = "undefined";

/// Options for building the JUnit document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JUnitOptions {
    pub suite_name: String,

    /// Suite timestamp. Fixed by default so identical snapshots produce identical bytes.
    pub timestamp: SystemTime,
}

impl Default for JUnitOptions {
    fn default() -> Self {
        Self {
            suite_name: SUITE_NAME.to_string(),
            timestamp: SystemTime::UNIX_EPOCH,
        }
    }
}

impl JUnitOptions {
    pub fn with_suite_name(mut self, suite_name: impl Into<String>) -> Self {
        self.suite_name = suite_name.into();
        self
    }
}

/// All entries of the snapshot, sorted by dependency name.
///
/// The sort is stable: a name present in several result sets keeps the order
/// pass, fail, ignored.
pub fn sorted_entries(results: &LicenseResults) -> Vec<(&str, &DependencyResult)> {
    let mut entries: Vec<(&str, &DependencyResult)> = results
        .pass
        .iter()
        .chain(results.fail.iter())
        .chain(results.ignored.iter())
        .collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}

/// Failure message for a failed dependency, `None` when the result has no reason.
pub fn failure_message(result: &DependencyResult) -> Option<String> {
    result.reason.map(|reason| {
        format!(
            "License: {}. Reason: {}",
            result.license.as_deref().unwrap_or(ABSENT_LICENSE),
            reason.description()
        )
    })
}

fn test_case(results: &LicenseResults, name: &str, result: &DependencyResult) -> TestCase {
    if results.ignored.contains(name) {
        return TestCaseBuilder::skipped(name).build();
    }
    match (result.reason, failure_message(result)) {
        (Some(reason), Some(message)) => {
            TestCase::failure(name, Duration::ZERO, reason.as_str(), &message)
        }
        _ => TestCaseBuilder::success(name, Duration::ZERO).build(),
    }
}

/// Build the JUnit document without writing it.
pub fn build_junit_report(results: &LicenseResults, options: &JUnitOptions) -> Report {
    let mut suite = TestSuiteBuilder::new(&options.suite_name)
        .set_timestamp(options.timestamp.into())
        .build();

    for (name, result) in sorted_entries(results) {
        suite.add_testcase(test_case(results, name, result));
    }

    let mut report = Report::new();
    report.add_testsuite(suite);
    report
}

/// Serialize the JUnit document to XML text.
pub fn render_junit_xml(
    results: &LicenseResults,
    options: &JUnitOptions,
    destination: &ReportDestination,
) -> Result<String, ReportError> {
    let report = build_junit_report(results, options);
    let mut buffer = Vec::new();
    report
        .write_xml(&mut buffer)
        .map_err(|e| report_write_error(destination, e))?;
    String::from_utf8(buffer).map_err(|e| report_write_error(destination, e))
}

/// Write the JUnit report for `results` to `destination` with default options.
pub fn write_junit_report<W: Write + ?Sized>(
    results: &LicenseResults,
    destination: &ReportDestination,
    stdout: &mut W,
) -> Result<(), ReportError> {
    write_junit_report_with(results, destination, stdout, &JUnitOptions::default())
}

/// Write the JUnit report for `results` to `destination`.
///
/// `Disabled` performs no I/O. `Stdout` writes the document and a trailing newline
/// to `stdout`. `File` writes the document to the path. The document is fully
/// serialized before anything is written.
pub fn write_junit_report_with<W: Write + ?Sized>(
    results: &LicenseResults,
    destination: &ReportDestination,
    stdout: &mut W,
    options: &JUnitOptions,
) -> Result<(), ReportError> {
    if destination.is_disabled() {
        debug!("No JUnit destination configured, skipping report");
        return Ok(());
    }

    let xml = render_junit_xml(results, options, destination)?;
    debug!(
        destination = %destination,
        bytes = xml.len(),
        "Writing JUnit report"
    );

    match destination {
        ReportDestination::Stdout => {
            let mut document = xml;
            document.push('\n');
            stdout
                .write_all(document.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|e| report_write_error(destination, e))
        }
        ReportDestination::File(path) => {
            std::fs::write(path, xml).map_err(|e| report_write_error(destination, e))
        }
        ReportDestination::Disabled => Ok(()),
    }
}

fn report_write_error(destination: &ReportDestination, err: impl std::fmt::Display) -> ReportError {
    ReportError::ReportWrite {
        destination: destination.to_string(),
        message: err.to_string(),
    }
}
