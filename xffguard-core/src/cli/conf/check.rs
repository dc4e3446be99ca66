use crate::conf::validation::ValidationIssue;
use crate::conf::{ConfigError, ValidatedConfig, config_error_hint, load_config};
use anyhow::bail;
use serde::Serialize;
use std::path::Path;

const NO_ISSUES: &[ValidationIssue] = &[];

#[derive(Serialize)]
struct CheckJson<'a> {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    policy: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    errors: &'a [ValidationIssue],
    warnings: &'a [ValidationIssue],
}

pub fn check(path: &Path, json: bool) -> anyhow::Result<()> {
    match load_config(path) {
        Ok(validated) => {
            print!("{}", render_success(&validated, json)?);
            Ok(())
        }
        Err(err) => {
            eprint!("{}", render_failure(&err, json)?);
            bail!("configuration check failed for {}", path.display());
        }
    }
}

pub fn render_success(validated: &ValidatedConfig, json: bool) -> anyhow::Result<String> {
    let policy = &validated.config.policy;
    let report = &validated.report;

    if json {
        let out = CheckJson {
            valid: true,
            policy: Some(policy.kind()),
            summary: Some(policy.describe()),
            error: None,
            errors: &report.errors,
            warnings: &report.warnings,
        };
        return Ok(serde_json::to_string_pretty(&out)? + "\n");
    }

    let mut out = String::new();
    if report.has_violations() {
        out.push_str(&report.render_pretty());
    }
    out.push_str("✔ Config loaded successfully\n");
    out.push_str(&format!("✔ policy: {}\n", policy.kind()));
    out.push_str(&format!("✔ {}\n", policy.describe()));
    if !report.warnings.is_empty() {
        out.push_str(&format!("✔ {} warnings\n", report.warnings.len()));
    }
    Ok(out)
}

pub fn render_failure(err: &ConfigError, json: bool) -> anyhow::Result<String> {
    if json {
        let (errors, warnings) = match err {
            ConfigError::Validation { report } => {
                (report.errors.as_slice(), report.warnings.as_slice())
            }
            _ => (NO_ISSUES, NO_ISSUES),
        };
        let out = CheckJson {
            valid: false,
            policy: None,
            summary: None,
            error: Some(err.to_string()),
            errors,
            warnings,
        };
        return Ok(serde_json::to_string_pretty(&out)? + "\n");
    }

    let mut out = String::new();
    match err {
        ConfigError::Validation { report } => {
            out.push('\n');
            out.push_str(&report.render_pretty());
        }
        other => {
            out.push_str(&other.to_string());
            out.push('\n');
        }
    }
    if let Some(hint) = config_error_hint(err) {
        out.push('\n');
        out.push_str(hint);
        out.push('\n');
    }
    Ok(out)
}
