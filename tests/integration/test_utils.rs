//! Shared fixtures for integration tests.

use licaudit_report::{DependencyResult, FailureReason, LicenseResults};

/// A snapshot with entries in every result set, inserted out of name order.
pub fn sample_results() -> LicenseResults {
    let mut results = LicenseResults::new();
    results.pass.insert(
        "yargs",
        DependencyResult::licensed("MIT").with_repository("https://github.com/yargs/yargs"),
    );
    results.pass.insert("chalk", DependencyResult::licensed("MIT"));
    results.pass.insert("bare-pkg", DependencyResult::new());
    results.fail.insert(
        "gpl-lib",
        DependencyResult::licensed("GPL-3.0").with_reason(FailureReason::Incompatible),
    );
    results.fail.insert(
        "no-license",
        DependencyResult::new()
            .with_repository("https://example.com/no-license")
            .with_reason(FailureReason::Missing),
    );
    results
        .ignored
        .insert("internal-helper", DependencyResult::licensed("UNLICENSED"));
    results
}

/// JSON form of a snapshot as produced by the audit engine.
pub const SAMPLE_JSON: &str = r#"{
  "pass": {
    "yargs": {"license": "MIT", "repository": "https://github.com/yargs/yargs"},
    "chalk": {"license": "MIT"}
  },
  "fail": {
    "gpl-lib": {"license": "GPL-3.0", "reason": "incompatible"},
    "no-license": {"reason": "missing"}
  },
  "ignored": {
    "internal-helper": {"license": "UNLICENSED"}
  }
}"#;

/// Slice of `xml` from the named test case up to the next test case.
pub fn case_element<'a>(xml: &'a str, name: &str) -> &'a str {
    let needle = format!(r#"name="{}""#, name);
    let start = xml
        .find(&needle)
        .unwrap_or_else(|| panic!("no test case named {} in:\n{}", name, xml));
    let rest = &xml[start..];
    let end = rest.find("<testcase").unwrap_or(rest.len());
    &rest[..end]
}
