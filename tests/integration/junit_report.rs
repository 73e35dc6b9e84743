//! Integration tests for the JUnit XML report

use super::test_utils::{case_element, sample_results};
use licaudit_report::report::{render_junit_xml, write_junit_report_with, JUnitOptions};
use licaudit_report::{
    write_junit_report, DependencyResult, FailureReason, LicenseResults, ReportDestination,
    ReportError,
};
use std::path::PathBuf;
use tempfile::TempDir;

fn stdout_xml(results: &LicenseResults) -> String {
    let mut out = Vec::new();
    write_junit_report(results, &ReportDestination::Stdout, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_single_passing_dependency_is_unmarked() {
    let mut results = LicenseResults::new();
    results.pass.insert("left-pad", DependencyResult::licensed("MIT"));

    let xml = stdout_xml(&results);
    assert_eq!(xml.matches("<testcase ").count(), 1);
    let case = case_element(&xml, "left-pad");
    assert!(!case.contains("<failure"));
    assert!(!case.contains("<skipped"));
}

#[test]
fn test_incompatible_failure_message_and_type() {
    let mut results = LicenseResults::new();
    results.fail.insert(
        "gpl-lib",
        DependencyResult::licensed("GPL-3.0").with_reason(FailureReason::Incompatible),
    );

    let xml = stdout_xml(&results);
    let case = case_element(&xml, "gpl-lib");
    assert!(case.contains("<failure"));
    assert!(case.contains(r#"type="incompatible""#));
    assert!(case.contains("License: GPL-3.0. Reason: License is incompatible."));
}

#[test]
fn test_missing_failure_message_and_type() {
    let xml = stdout_xml(&sample_results());
    let case = case_element(&xml, "no-license");
    assert!(case.contains(r#"type="missing""#));
    assert!(case.contains("Reason: License could not be found."));
}

#[test]
fn test_ignored_dependency_is_skipped_without_failure() {
    let xml = stdout_xml(&sample_results());
    let case = case_element(&xml, "internal-helper");
    assert!(case.contains("<skipped"));
    assert!(!case.contains("<failure"));
}

#[test]
fn test_one_case_per_dependency_sorted_by_name() {
    let xml = stdout_xml(&sample_results());
    assert_eq!(xml.matches("<testcase ").count(), 6);

    let names = [
        "bare-pkg",
        "chalk",
        "gpl-lib",
        "internal-helper",
        "no-license",
        "yargs",
    ];
    let positions: Vec<usize> = names
        .iter()
        .map(|name| xml.find(&format!(r#"name="{}""#, name)).unwrap())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn test_stdout_output_ends_with_newline() {
    let xml = stdout_xml(&sample_results());
    assert!(xml.starts_with("<?xml"));
    assert!(xml.ends_with(">\n"));
}

#[test]
fn test_disabled_destination_is_noop() {
    let mut out = Vec::new();
    write_junit_report(&sample_results(), &ReportDestination::Disabled, &mut out).unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_file_destination_writes_document_only_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("licenses.xml");
    let mut out = Vec::new();

    write_junit_report(
        &sample_results(),
        &ReportDestination::File(path.clone()),
        &mut out,
    )
    .unwrap();

    assert!(out.is_empty());
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("Dependency Licenses Audit"));
    assert_eq!(written.matches("<testcase ").count(), 6);
}

#[test]
fn test_file_output_is_byte_identical_across_runs() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("first.xml");
    let second = temp_dir.path().join("second.xml");
    let results = sample_results();

    write_junit_report(&results, &ReportDestination::File(first.clone()), &mut Vec::new())
        .unwrap();
    write_junit_report(&results, &ReportDestination::File(second.clone()), &mut Vec::new())
        .unwrap();

    assert_eq!(std::fs::read(first).unwrap(), std::fs::read(second).unwrap());
}

#[test]
fn test_file_named_dash_is_written_as_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("-");
    let mut out = Vec::new();

    write_junit_report(&sample_results(), &ReportDestination::File(path.clone()), &mut out)
        .unwrap();

    assert!(out.is_empty());
    assert!(path.exists());
}

#[test]
fn test_unwritable_path_is_report_write_error() {
    let temp_dir = TempDir::new().unwrap();
    let path: PathBuf = temp_dir.path().join("missing-dir").join("report.xml");

    let err = write_junit_report(&sample_results(), &ReportDestination::File(path), &mut Vec::new())
        .unwrap_err();
    assert!(matches!(err, ReportError::ReportWrite { .. }));
}

#[test]
fn test_suite_name_option() {
    let options = JUnitOptions::default().with_suite_name("Licenses (frontend)");
    let mut out = Vec::new();
    write_junit_report_with(
        &sample_results(),
        &ReportDestination::Stdout,
        &mut out,
        &options,
    )
    .unwrap();
    let xml = String::from_utf8(out).unwrap();
    assert!(xml.contains(r#"name="Licenses (frontend)""#));
}

#[test]
fn test_render_matches_stdout_body() {
    let results = sample_results();
    let rendered =
        render_junit_xml(&results, &JUnitOptions::default(), &ReportDestination::Stdout).unwrap();
    assert_eq!(format!("{}\n", rendered), stdout_xml(&results));
}
