use crate::conf::error::ConfigError;
use crate::conf::types::{Policy, PolicyShape, SanitizerConfig, SanitizerSpec};
use crate::trust::TrustedNetworks;
use http::{HeaderName, HeaderValue};

/// Turn a validated payload into the runtime configuration.
///
/// Validation has already run; anything that still fails here is reported as
/// an invalid configuration rather than panicking.
pub fn lower_spec(spec: &SanitizerSpec) -> Result<SanitizerConfig, ConfigError> {
    let policy = match spec.shapes().as_slice() {
        [PolicyShape::TrustedNetworks] => lower_trusted_networks(spec)?,
        [PolicyShape::TrustDepth] => lower_trust_depth(spec)?,
        [PolicyShape::Static] => lower_static(spec)?,
        _ => return Err(ConfigError::invalid("exactly one policy must be configured")),
    };

    Ok(SanitizerConfig { policy })
}

fn lower_trusted_networks(spec: &SanitizerSpec) -> Result<Policy, ConfigError> {
    let cidrs = spec
        .trusted_networks
        .as_deref()
        .ok_or_else(|| ConfigError::invalid("trusted_networks is missing"))?;

    let networks = TrustedNetworks::parse(cidrs)
        .map_err(|e| ConfigError::invalid(format!("invalid trusted network: {e}")))?;

    if !spec.injects_header() {
        return Ok(Policy::filter_chain(networks));
    }

    let header = lower_header_name(spec.injected_header_name.as_deref(), "injected_header_name")?;
    let overwrite_on_exists = spec
        .overwrite_header_on_exists
        .as_ref()
        .and_then(serde_json::Value::as_bool)
        .ok_or_else(|| ConfigError::invalid("overwrite_header_on_exists must be boolean"))?;

    Ok(Policy::inject_header(networks, header, overwrite_on_exists))
}

fn lower_trust_depth(spec: &SanitizerSpec) -> Result<Policy, ConfigError> {
    let trusted_hops = spec
        .num_trusted_hops
        .and_then(|hops| usize::try_from(hops).ok())
        .ok_or_else(|| ConfigError::invalid("num_trusted_hops must be a non-negative integer"))?;

    Ok(Policy::trust_depth(trusted_hops))
}

fn lower_static(spec: &SanitizerSpec) -> Result<Policy, ConfigError> {
    let header = lower_header_name(spec.header.as_deref(), "header")?;
    let value = spec
        .value
        .clone()
        .filter(|value| HeaderValue::from_str(value).is_ok())
        .ok_or_else(|| ConfigError::invalid("value must be a valid header value"))?;

    Ok(Policy::Static { header, value })
}

fn lower_header_name(name: Option<&str>, field: &str) -> Result<HeaderName, ConfigError> {
    name.filter(|name| !name.is_empty())
        .and_then(|name| HeaderName::from_bytes(name.as_bytes()).ok())
        .ok_or_else(|| ConfigError::invalid(format!("{field} must be a valid header name")))
}
