use crate::conf::types::Policy;
use crate::conf::{ConfigError, load_config, parse_config};
use std::fs;

#[test]
fn load_config_from_file() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("xffguard.json");
    fs::write(&path, r#"{"num_trusted_hops": 1}"#).unwrap();

    // Act
    let validated = load_config(&path).unwrap();

    // Assert
    assert_eq!(validated.config.policy, Policy::trust_depth(1));
    assert!(!validated.report.has_violations());
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();

    let err = load_config(&dir.path().join("missing.json")).err().unwrap();

    assert!(matches!(err, ConfigError::ReadFile { .. }));
}

#[test]
fn malformed_payload_is_a_parse_error() {
    assert!(matches!(
        parse_config("{not json").err().unwrap(),
        ConfigError::Parse { .. }
    ));
}

#[test]
fn unknown_keys_are_rejected() {
    let err = parse_config(r#"{"num_trusted_hops": 1, "trusted_proxies": []}"#)
        .err()
        .unwrap();

    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn non_integer_hop_count_is_a_parse_error() {
    assert!(matches!(
        parse_config(r#"{"num_trusted_hops": "2"}"#).err().unwrap(),
        ConfigError::Parse { .. }
    ));
    assert!(matches!(
        parse_config(r#"{"num_trusted_hops": 1.5}"#).err().unwrap(),
        ConfigError::Parse { .. }
    ));
}

#[test]
fn validation_errors_prevent_activation() {
    // Act
    let err = parse_config(r#"{"trusted_networks": ["nope"]}"#).err().unwrap();

    // Assert
    match err {
        ConfigError::Validation { report } => {
            assert_eq!(report.errors.len(), 1);
            assert!(report.summary().starts_with("1 errors"));
        }
        other => panic!("expected validation error, got {other}"),
    }
}

#[test]
fn warnings_are_carried_on_a_valid_config() {
    let validated = parse_config(r#"{"trusted_networks": ["198.51.100.0/24"]}"#).unwrap();

    assert_eq!(validated.report.warnings.len(), 1);
    assert_eq!(validated.config.policy.kind(), "filter_chain");
}
