//! Integration tests for options-file ingestion.
//!
//! Round-trips [`AotOptions`] through real TOML files on disk, covering the
//! merge-over-defaults behaviour and both failure paths of
//! [`AotOptions::load_from_file`].
#![allow(clippy::unwrap_used, clippy::expect_used)]

use aotopts::{AotOptions, Error, Mode};
use std::path::PathBuf;

fn write_options_file(contents: &str) -> (tempfile::TempDir, PathBuf) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = temp_dir.path().join("aot.toml");
    std::fs::write(&path, contents).expect("Failed to write options file");
    (temp_dir, path)
}

#[test]
fn test_load_full_options_file() {
    let (_guard, path) = write_options_file(
        r#"
mode = "native-init"
debug_verify = true
ignore_hints_on_excluded_config = false
remove_unused_config = false
fail_on_missing_selector_hint = false
verify = false
remove_yaml_support = true
remove_jmx_support = false
remove_xml_support = false
remove_spel_support = true

[build_time_properties]
match_if_missing = false
checks = ["default-exclude-all", "spring.", "!spring.cloud."]
"#,
    );

    let options = AotOptions::load_from_file(&path).expect("Failed to load options");
    assert_eq!(options.to_mode().unwrap(), Mode::NativeInit);
    assert!(options.debug_verify);
    assert!(!options.ignore_hints_on_excluded_config);
    assert!(!options.remove_unused_config);
    assert!(!options.fail_on_missing_selector_hint);
    assert!(!options.verify);
    assert!(options.remove_yaml_support);
    assert!(!options.remove_jmx_support);
    assert!(!options.remove_xml_support);
    assert!(options.remove_spel_support);
    assert!(!options.build_time_properties_match_if_missing);
    assert!(options.is_build_time_property_checking());
}

#[test]
fn test_load_empty_file_keeps_defaults() {
    let (_guard, path) = write_options_file("");
    let options = AotOptions::load_from_file(&path).expect("Failed to load options");
    assert_eq!(options, AotOptions::default());
}

#[test]
fn test_load_partial_file_keeps_untouched_defaults() {
    let (_guard, path) = write_options_file("remove_yaml_support = true\n");
    let options = AotOptions::load_from_file(&path).expect("Failed to load options");
    assert!(options.remove_yaml_support);
    assert!(options.remove_jmx_support);
    assert!(options.verify);
    assert_eq!(options.to_mode().unwrap(), Mode::Native);
    assert!(options.build_time_properties_checks.is_none());
}

#[test]
fn test_load_missing_file_fails() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = temp_dir.path().join("nonexistent.toml");

    let err = AotOptions::load_from_file(&path).unwrap_err();
    assert!(matches!(err, Error::OperationFailed { .. }));
    assert!(err.to_string().contains("read_options_file"));
}

#[test]
fn test_load_malformed_file_fails() {
    let (_guard, path) = write_options_file("mode = [not toml");

    let err = AotOptions::load_from_file(&path).unwrap_err();
    assert!(matches!(err, Error::OperationFailed { .. }));
    assert!(err.to_string().contains("parse_options_file"));
}

#[test]
fn test_loaded_checks_drive_classifier() {
    let (_guard, path) = write_options_file(
        r#"
[build_time_properties]
checks = ["default-exclude-all", "logging.", "!logging.level."]
"#,
    );

    let options = AotOptions::load_from_file(&path).expect("Failed to load options");
    assert!(options.build_time_checkable_property("logging.pattern.console"));
    assert!(!options.build_time_checkable_property("logging.level.root"));
    assert!(!options.build_time_checkable_property("server.port"));
}

#[test]
fn test_loaded_empty_checks_stay_disabled() {
    let (_guard, path) = write_options_file(
        r#"
[build_time_properties]
checks = []
"#,
    );

    let options = AotOptions::load_from_file(&path).expect("Failed to load options");
    assert!(options.build_time_properties_checks.is_some());
    assert!(!options.is_build_time_property_checking());
    assert!(!options.build_time_checkable_property("spring.application.name"));
}

#[test]
fn test_unknown_mode_token_surfaces_on_resolution() {
    // Loading keeps the raw token; resolution rejects it with a message
    // naming every accepted token.
    let (_guard, path) = write_options_file("mode = \"hotspot\"\n");

    let options = AotOptions::load_from_file(&path).expect("Failed to load options");
    let err = options.to_mode().unwrap_err();
    assert!(matches!(err, Error::InvalidConfiguration(_)));
    let display = err.to_string();
    assert!(display.contains("hotspot"));
    for mode in Mode::all() {
        assert!(display.contains(mode.as_str()));
    }
}
