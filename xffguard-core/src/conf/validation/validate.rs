use crate::conf::types::{PolicyShape, SanitizerSpec};
use crate::conf::validation::report::ValidationReport;
use crate::headers::ORIGINAL_FORWARDED_FOR;
use http::{HeaderName, HeaderValue};
use ipnet::IpNet;
use std::net::IpAddr;

/// Validate a parsed payload, collecting every error and warning.
pub fn validate_spec(spec: &SanitizerSpec) -> ValidationReport {
    let mut report = ValidationReport::default();

    let shapes = spec.shapes();
    match shapes.as_slice() {
        [] => report.no_policy_configured(),
        [PolicyShape::TrustedNetworks] => validate_trusted_networks_policy(spec, &mut report),
        [PolicyShape::TrustDepth] => validate_trust_depth(spec, &mut report),
        [PolicyShape::Static] => validate_static(spec, &mut report),
        _ => report.conflicting_policies(&shapes),
    }

    report
}

fn validate_trusted_networks_policy(spec: &SanitizerSpec, report: &mut ValidationReport) {
    match &spec.trusted_networks {
        Some(networks) => validate_trusted_networks(networks, report),
        None => report.missing_trusted_networks(),
    }

    if !spec.injects_header() {
        return;
    }

    match spec.injected_header_name.as_deref() {
        Some(name) => validate_header_name("injected_header_name", name, report),
        None => report.injected_header_name_missing(),
    }

    match &spec.overwrite_header_on_exists {
        Some(serde_json::Value::Bool(_)) => {}
        Some(other) => report.overwrite_flag_not_boolean(other),
        None => report.overwrite_flag_missing(),
    }
}

fn validate_trusted_networks(cidrs: &[String], report: &mut ValidationReport) {
    if cidrs.is_empty() {
        report.trusted_networks_empty_warning();
        return;
    }

    let mut networks = Vec::new();
    for cidr in cidrs {
        if let Ok(net) = cidr.trim().parse::<IpNet>() {
            networks.push(net);
        } else {
            report.invalid_trusted_network(cidr);
        }
    }

    for network in networks {
        // Trusting everything lets any client choose its own address.
        if network.prefix_len() == 0 {
            report.trusted_networks_cannot_trust_all_networks(network);
            continue;
        }

        if !is_non_public_infra_network(&network) {
            report.trusted_network_is_public_warning(network);
        }
    }
}

/// NOTE: This function identifies non-globally-routable infrastructure address
/// space (RFC1918, ULA, loopback, link-local).
/// It MUST NOT be used to determine the absolute trustworthiness of a peer.
fn is_non_public_infra_network(net: &IpNet) -> bool {
    match &net.addr() {
        IpAddr::V4(v4) => v4.is_private() || v4.is_loopback() || v4.is_link_local(),
        IpAddr::V6(v6) => v6.is_loopback() || v6.is_unique_local() || v6.is_unicast_link_local(),
    }
}

fn validate_trust_depth(spec: &SanitizerSpec, report: &mut ValidationReport) {
    let Some(hops) = spec.num_trusted_hops else {
        return;
    };

    if hops < 0 {
        report.negative_trusted_hops(hops);
    } else if usize::try_from(hops).is_err() {
        report.trusted_hops_out_of_range(hops);
    }
}

fn validate_static(spec: &SanitizerSpec, report: &mut ValidationReport) {
    match spec.header.as_deref() {
        Some(name) => validate_header_name("header", name, report),
        None => report.static_header_missing(),
    }

    match spec.value.as_deref() {
        Some(value) => {
            if HeaderValue::from_str(value).is_err() {
                report.invalid_header_value(value);
            }
        }
        None => report.static_value_missing(),
    }
}

fn validate_header_name(field: &'static str, name: &str, report: &mut ValidationReport) {
    if name.is_empty() {
        report.header_name_empty(field);
        return;
    }

    match HeaderName::from_bytes(name.as_bytes()) {
        Ok(parsed) if parsed.as_str() == ORIGINAL_FORWARDED_FOR => {
            report.reserved_header_name(field, name);
        }
        Ok(_) => {}
        Err(_) => report.invalid_header_name(field, name),
    }
}
