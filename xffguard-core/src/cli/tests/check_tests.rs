use crate::cli::conf::{check, render_failure, render_success};
use crate::conf::{load_config, parse_config};
use std::fs;

#[test]
fn success_lists_active_policy() {
    // Arrange
    let validated = parse_config(r#"{"num_trusted_hops": 2}"#).unwrap();

    // Act
    let out = render_success(&validated, false).unwrap();

    // Assert
    assert!(out.contains("✔ Config loaded successfully"));
    assert!(out.contains("✔ policy: trust_depth"));
    assert!(!out.contains("warnings"));
}

#[test]
fn success_includes_warnings() {
    let validated = parse_config(r#"{"trusted_networks": ["8.8.8.0/24"]}"#).unwrap();

    let out = render_success(&validated, false).unwrap();

    assert!(out.contains("8.8.8.0/24"));
    assert!(out.contains("✔ 1 warnings"));
}

#[test]
fn success_as_json() {
    // Arrange
    let validated = parse_config(r#"{"trusted_networks": ["10.0.0.0/8"]}"#).unwrap();

    // Act
    let out = render_success(&validated, true).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();

    // Assert
    assert_eq!(json["valid"], true);
    assert_eq!(json["policy"], "filter_chain");
    assert_eq!(json["errors"].as_array().unwrap().len(), 0);
}

#[test]
fn validation_failure_as_json_lists_errors() {
    // Arrange
    let err = parse_config(r#"{"trusted_networks": ["0.0.0.0/0"]}"#)
        .err()
        .unwrap();

    // Act
    let out = render_failure(&err, true).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();

    // Assert
    assert_eq!(json["valid"], false);
    assert_eq!(json["errors"][0]["field"], "trusted_networks");
    assert_eq!(json["errors"][0]["severity"], "Error");
}

#[test]
fn parse_failure_plain_carries_hint() {
    let err = parse_config("{not json").err().unwrap();

    let out = render_failure(&err, false).unwrap();

    assert!(out.contains("invalid configuration payload"));
    assert!(out.contains("exactly one policy shape"));
}

#[test]
fn check_fails_for_invalid_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"{"num_trusted_hops": -1}"#).unwrap();

    assert!(check(&path, false).is_err());
    assert!(load_config(&path).is_err());
}

#[test]
fn check_passes_for_valid_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("good.json");
    fs::write(&path, r#"{"header": "x-forwarded-for", "value": "127.0.0.1"}"#).unwrap();

    assert!(check(&path, true).is_ok());
}
