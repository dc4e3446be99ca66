use crate::conf::types::SanitizerSpec;
use crate::conf::validation::{Severity, validate_spec};

fn spec(json: &str) -> SanitizerSpec {
    serde_json::from_str(json).unwrap()
}

fn error_messages(json: &str) -> Vec<String> {
    validate_spec(&spec(json))
        .errors
        .iter()
        .map(|e| e.message.clone())
        .collect()
}

#[test]
fn valid_full_chain_policy() {
    let report = validate_spec(&spec(r#"{"trusted_networks": ["10.0.0.0/8", "fd00::/8"]}"#));

    assert!(!report.has_violations());
}

#[test]
fn valid_injection_policy() {
    let report = validate_spec(&spec(
        r#"{"trusted_networks": ["10.0.0.0/8"], "injected_header_name": "x-real-ip", "overwrite_header_on_exists": false}"#,
    ));

    assert!(!report.has_violations());
}

#[test]
fn valid_depth_and_static_policies() {
    assert!(!validate_spec(&spec(r#"{"num_trusted_hops": 0}"#)).has_violations());
    assert!(
        !validate_spec(&spec(r#"{"header": "x-forwarded-for", "value": "127.0.0.1"}"#))
            .has_violations()
    );
}

#[test]
fn empty_payload_has_no_policy() {
    let messages = error_messages("{}");

    assert!(messages.iter().any(|m| m.contains("no policy configured")));
}

#[test]
fn mixing_policy_shapes_is_rejected() {
    // Arrange
    let json = r#"{"trusted_networks": ["10.0.0.0/8"], "num_trusted_hops": 1}"#;

    // Act
    let messages = error_messages(json);

    // Assert
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("more than one policy configured"));
    assert!(messages[0].contains("trusted_networks"));
    assert!(messages[0].contains("num_trusted_hops"));
}

#[test]
fn invalid_cidr_is_an_error() {
    let messages = error_messages(r#"{"trusted_networks": ["10.0.0.0/8", "10.0.0.300/8"]}"#);

    assert_eq!(messages, vec!["invalid CIDR: 10.0.0.300/8".to_string()]);
}

#[test]
fn trusting_all_addresses_is_an_error() {
    let messages = error_messages(r#"{"trusted_networks": ["0.0.0.0/0"]}"#);

    assert!(messages.iter().any(|m| m.contains("trusts every address")));
}

#[test]
fn public_range_is_only_a_warning() {
    // Arrange
    let report = validate_spec(&spec(r#"{"trusted_networks": ["203.0.113.0/24"]}"#));

    // Assert
    assert!(!report.has_errors());
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].severity, Severity::Warning);
    assert!(report.warnings[0].message.contains("203.0.113.0/24"));
}

#[test]
fn empty_trusted_networks_is_a_warning() {
    let report = validate_spec(&spec(r#"{"trusted_networks": []}"#));

    assert!(!report.has_errors());
    assert!(
        report
            .warnings
            .iter()
            .any(|w| w.message.contains("no trusted networks"))
    );
}

#[test]
fn injected_header_name_cannot_be_empty() {
    let messages = error_messages(
        r#"{"trusted_networks": ["10.0.0.0/8"], "injected_header_name": "", "overwrite_header_on_exists": true}"#,
    );

    assert_eq!(
        messages,
        vec!["injected_header_name can not be empty".to_string()]
    );
}

#[test]
fn injected_header_name_must_be_a_header_name() {
    let messages = error_messages(
        r#"{"trusted_networks": ["10.0.0.0/8"], "injected_header_name": "x real ip", "overwrite_header_on_exists": true}"#,
    );

    assert!(messages[0].contains("invalid header name"));
}

#[test]
fn injected_header_cannot_clobber_preserved_chain() {
    let messages = error_messages(
        r#"{"trusted_networks": ["10.0.0.0/8"], "injected_header_name": "X-Original-Forwarded-For", "overwrite_header_on_exists": true}"#,
    );

    assert!(messages[0].contains("reserved"));
}

#[test]
fn overwrite_flag_must_be_boolean() {
    let messages = error_messages(
        r#"{"trusted_networks": ["10.0.0.0/8"], "injected_header_name": "x-real-ip", "overwrite_header_on_exists": "yes"}"#,
    );

    assert_eq!(
        messages,
        vec![r#"overwrite_header_on_exists must be boolean, got "yes""#.to_string()]
    );
}

#[test]
fn overwrite_flag_is_required_with_injected_header() {
    let messages = error_messages(
        r#"{"trusted_networks": ["10.0.0.0/8"], "injected_header_name": "x-real-ip"}"#,
    );

    assert!(messages[0].contains("overwrite_header_on_exists is required"));
}

#[test]
fn injected_header_is_required_with_overwrite_flag() {
    let messages = error_messages(
        r#"{"trusted_networks": ["10.0.0.0/8"], "overwrite_header_on_exists": true}"#,
    );

    assert!(messages[0].contains("requires injected_header_name"));
}

#[test]
fn injection_without_networks_is_rejected() {
    let messages =
        error_messages(r#"{"injected_header_name": "x-real-ip", "overwrite_header_on_exists": true}"#);

    assert!(messages.iter().any(|m| m.contains("requires trusted_networks")));
}

#[test]
fn negative_hop_count_is_rejected() {
    let messages = error_messages(r#"{"num_trusted_hops": -1}"#);

    assert_eq!(
        messages,
        vec!["num_trusted_hops must not be negative: -1".to_string()]
    );
}

#[test]
fn static_policy_requires_both_fields() {
    assert!(error_messages(r#"{"header": "x-forwarded-for"}"#)[0].contains("value is required"));
    assert!(error_messages(r#"{"value": "1.2.3.4"}"#)[0].contains("header is required"));
}

#[test]
fn static_value_must_be_a_header_value() {
    let messages = error_messages(r#"{"header": "x-forwarded-for", "value": "a\nb"}"#);

    assert!(messages[0].contains("invalid header value"));
}
