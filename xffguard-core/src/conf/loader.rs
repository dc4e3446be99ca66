use crate::conf::error::ConfigError;
use crate::conf::lower::lower_spec;
use crate::conf::types::SanitizerSpec;
use crate::conf::validation::{ValidatedConfig, validate_spec};
use std::fs;
use std::path::Path;

const INLINE_ORIGIN: &str = "<inline>";

/// Load, validate and lower a configuration file.
pub fn load_config(path: &Path) -> Result<ValidatedConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;

    build(&raw, &path.display().to_string())
}

/// Validate and lower a configuration blob handed over by a hosting runtime.
pub fn parse_config(raw: &str) -> Result<ValidatedConfig, ConfigError> {
    build(raw, INLINE_ORIGIN)
}

fn build(raw: &str, origin: &str) -> Result<ValidatedConfig, ConfigError> {
    //--------------------------------------------------------------------------
    // Hard fail: parsing
    //--------------------------------------------------------------------------
    let spec: SanitizerSpec =
        serde_json::from_str(raw).map_err(|e| ConfigError::parse(origin, e))?;

    //--------------------------------------------------------------------------
    // Semantic validation (aggregate all errors)
    //--------------------------------------------------------------------------
    let report = validate_spec(&spec);
    if report.has_errors() {
        for issue in &report.errors {
            tracing::error!(origin, field = issue.field, "{}", issue.message);
        }
        return Err(ConfigError::Validation { report });
    }

    for issue in &report.warnings {
        tracing::warn!(origin, field = issue.field, "{}", issue.message);
    }

    //--------------------------------------------------------------------------
    // Build runtime config
    //--------------------------------------------------------------------------
    let config = lower_spec(&spec)?;
    tracing::info!(origin, policy = config.policy.kind(), "sanitizer configuration loaded");

    Ok(ValidatedConfig { config, report })
}
