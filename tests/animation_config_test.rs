//! Tests for loading animation settings from disk.

use std::io::Write;
use std::time::Duration;
use tictactoe::{AnimationConfig, Element, Entrance};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_load_overrides() {
    let file = write_config(
        r#"
stagger_ms = 100

[grid]
delay_ms = 50
duration_ms = 300
offset = -4
"#,
    );
    let config = AnimationConfig::from_file(file.path()).expect("valid config");

    assert_eq!(*config.stagger_ms(), 100);
    assert_eq!(*config.grid(), Entrance::new(50, 300, -4));
    assert_eq!(config.title(), AnimationConfig::default().title());
    assert!(*config.enabled());
    assert_eq!(config.offset(Element::Row(1), Duration::ZERO), -4);
}

#[test]
fn test_load_disabled() {
    let file = write_config("enabled = false\n");
    let config = AnimationConfig::from_file(file.path()).expect("valid config");
    assert_eq!(config.total_duration(), Duration::ZERO);
}

#[test]
fn test_missing_file_is_error() {
    let err = AnimationConfig::from_file("/nonexistent/animation.toml").unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_error() {
    let file = write_config("stagger_ms = \"fast\"\n");
    let err = AnimationConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_huge_timings_saturate() {
    let file = write_config(
        r#"
stagger_ms = 18446744073709551615

[status]
delay_ms = 18446744073709551615
duration_ms = 18446744073709551615
offset = 6
"#,
    );
    let config = AnimationConfig::from_file(file.path()).expect("valid config");

    assert_eq!(config.total_duration(), Duration::from_millis(u64::MAX));
    assert_eq!(config.progress(Element::Row(2), Duration::ZERO), 0.0);
    assert_eq!(config.progress(Element::Row(0), Duration::MAX), 1.0);
    assert_eq!(config.progress(Element::Status, Duration::from_secs(60)), 0.0);
    assert_eq!(config.offset(Element::Status, Duration::ZERO), 6);
}
