//! Integration tests for build-time property classification.
//!
//! Exercises the classifier through the public surface the AOT processor
//! uses: an [`AotOptions`] record populated by the build driver and the
//! per-key decision predicate.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use aotopts::{AotOptions, DEFAULT_EXCLUDE_ALL, DEFAULT_INCLUDE_ALL, PropertyChecks};
use test_case::test_case;

#[test_case("spring.application.name", true; "explicit inclusion overrides exclude-all baseline")]
#[test_case("management.endpoints.enabled", false; "unmatched key falls back to exclude-all baseline")]
fn classify_against_exclude_all_baseline(key: &str, expected: bool) {
    let checks = PropertyChecks::new([DEFAULT_EXCLUDE_ALL, "spring."]);
    assert_eq!(checks.check_at_build_time(key), expected);
}

#[test_case("spring.cloud.refresh.enabled", false; "longer exclusion beats shorter inclusion")]
#[test_case("spring.application.name", true; "inclusion matches where exclusion does not")]
fn classify_with_exclusion_carveout(key: &str, expected: bool) {
    let checks = PropertyChecks::new(["spring.", "!spring.cloud."]);
    assert_eq!(checks.check_at_build_time(key), expected);
}

#[test]
fn equal_length_match_prefers_inclusion() {
    let checks = PropertyChecks::new(["spring.foo.", "!spring.foo."]);
    assert!(checks.check_at_build_time("spring.foo.bar"));
}

#[test]
fn absent_pattern_list_classifies_everything_runtime() {
    let options = AotOptions::default();
    assert!(!options.is_build_time_property_checking());
    for key in ["anything", "spring.application.name", ""] {
        assert!(!options.build_time_checkable_property(key));
    }
}

#[test]
fn options_record_drives_classifier_end_to_end() {
    let options = AotOptions::default().with_build_time_properties_checks([
        DEFAULT_EXCLUDE_ALL,
        "logging.",
        "!logging.level.",
        "logging.level.root",
    ]);

    let test_cases = [
        ("logging.pattern.console", true),
        ("logging.level.web", false),
        ("logging.level.root", true),
        ("server.port", false),
    ];
    for (key, expected) in test_cases {
        assert_eq!(
            options.build_time_checkable_property(key),
            expected,
            "wrong decision for {key}"
        );
    }
}

#[test]
fn later_directive_wins_through_options_record() {
    let options = AotOptions::default()
        .with_build_time_properties_checks([DEFAULT_INCLUDE_ALL, DEFAULT_EXCLUDE_ALL]);
    assert!(options.is_build_time_property_checking());
    assert!(!options.build_time_checkable_property("spring.application.name"));
}
