//! Property-based tests for report determinism and coverage

use licaudit_report::report::junit::sorted_entries;
use licaudit_report::report::{render_junit_xml, JUnitOptions, SummaryTable};
use licaudit_report::{DependencyResult, FailureReason, LicenseResults, ReportDestination};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn dependency_result() -> impl Strategy<Value = DependencyResult> {
    (
        proptest::option::of("[A-Z][A-Za-z0-9.-]{1,10}"),
        proptest::option::of("https://[a-z]{3,8}\\.example/[a-z]{1,6}"),
    )
        .prop_map(|(license, repository)| DependencyResult {
            license,
            repository,
            reason: None,
        })
}

/// Disjoint pass/fail/ignored sets built from one pool of unique names.
fn snapshot() -> impl Strategy<Value = LicenseResults> {
    proptest::collection::btree_map("[a-z][a-z0-9-]{0,12}", (0u8..3, dependency_result()), 0..24)
        .prop_map(|entries| {
            let mut results = LicenseResults::new();
            for (name, (set, result)) in entries {
                match set {
                    0 => {
                        results.pass.insert(name, result);
                    }
                    1 => {
                        let reason = if result.license.is_some() {
                            FailureReason::Incompatible
                        } else {
                            FailureReason::Missing
                        };
                        results.fail.insert(name, result.with_reason(reason));
                    }
                    _ => {
                        results.ignored.insert(name, result);
                    }
                }
            }
            results
        })
}

fn xml(results: &LicenseResults) -> String {
    render_junit_xml(results, &JUnitOptions::default(), &ReportDestination::Stdout).unwrap()
}

proptest! {
    #[test]
    fn prop_one_test_case_per_dependency(results in snapshot()) {
        let (pass, fail, ignored) = results.counts();
        prop_assert_eq!(xml(&results).matches("<testcase ").count(), pass + fail + ignored);
    }

    #[test]
    fn prop_entries_sorted_and_unique(results in snapshot()) {
        let names: Vec<&str> = sorted_entries(&results).into_iter().map(|(n, _)| n).collect();
        let unique: BTreeSet<&str> = names.iter().copied().collect();
        prop_assert_eq!(unique.len(), names.len());
        prop_assert!(names.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn prop_rendering_is_deterministic(results in snapshot()) {
        prop_assert_eq!(xml(&results), xml(&results.clone()));
    }

    #[test]
    fn prop_failure_types_match_reasons(results in snapshot()) {
        let xml = xml(&results);
        let missing = results
            .fail
            .iter()
            .filter(|(_, r)| r.reason == Some(FailureReason::Missing))
            .count();
        let incompatible = results.fail.len() - missing;
        prop_assert_eq!(xml.matches(r#"type="missing""#).count(), missing);
        prop_assert_eq!(xml.matches(r#"type="incompatible""#).count(), incompatible);
        prop_assert_eq!(xml.matches("<skipped").count(), results.ignored.len());
    }

    #[test]
    fn prop_summary_rows_cover_pass_and_fail_only(results in snapshot()) {
        prop_assert_eq!(SummaryTable::passes(&results.pass).rows.len(), results.pass.len());
        prop_assert_eq!(SummaryTable::failures(&results.fail).rows.len(), results.fail.len());
        for row in SummaryTable::passes(&results.pass).rows {
            prop_assert_eq!(row.len(), 4);
            prop_assert_eq!(row[2].as_str(), "pass");
        }
    }
}
