use crate::conf::types::PolicyShape;
use ipnet::IpNet;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub message: String,
    /// Configuration key the issue is about.
    pub field: &'static str,
    pub help: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

#[derive(Serialize)]
struct ValidationReportJson<'a> {
    errors: &'a [ValidationIssue],
    warnings: &'a [ValidationIssue],
}

impl ValidationReport {
    pub fn has_violations(&self) -> bool {
        !self.errors.is_empty() || !self.warnings.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn summary(&self) -> String {
        format!(
            "{} errors, {} warnings",
            self.errors.len(),
            self.warnings.len()
        )
    }

    pub(crate) fn error(&mut self, field: &'static str, message: String, help: Option<String>) {
        self.errors.push(ValidationIssue {
            severity: Severity::Error,
            message,
            field,
            help,
        });
    }

    fn warning(&mut self, field: &'static str, message: String, help: Option<String>) {
        self.warnings.push(ValidationIssue {
            severity: Severity::Warning,
            message,
            field,
            help,
        });
    }

    pub fn render_json(&self) -> Result<String, serde_json::Error> {
        let json = ValidationReportJson {
            errors: &self.errors,
            warnings: &self.warnings,
        };

        serde_json::to_string_pretty(&json)
    }

    pub fn render_plain(&self) -> String {
        let mut out = String::new();
        for issue in self.errors.iter().chain(self.warnings.iter()) {
            let severity = match issue.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };

            let _ = writeln!(out, "{}:{}: {}", issue.field, severity, issue.message);

            if let Some(help) = &issue.help {
                let _ = writeln!(out, "  help: {}", help);
            }
        }
        out
    }

    pub fn render_pretty(&self) -> String {
        let mut out = String::new();

        if self.has_violations() {
            let _ = writeln!(
                out,
                "configuration validation found {} errors, {} warnings\n",
                self.errors.len(),
                self.warnings.len()
            );
        }

        for issue in self.errors.iter().chain(self.warnings.iter()) {
            match issue.severity {
                Severity::Error => {
                    let _ = writeln!(
                        out,
                        "  {} [{}]: {}",
                        "error".red().bold(),
                        issue.field,
                        issue.message
                    );
                }
                Severity::Warning => {
                    let _ = writeln!(
                        out,
                        "  {} [{}]: {}",
                        "warning".yellow().bold(),
                        issue.field,
                        issue.message
                    );
                }
            }

            if let Some(help) = &issue.help {
                let _ = writeln!(out, "    {} {}", "help:".cyan(), help);
            }
            out.push('\n');
        }
        out
    }
}

/// Policy Shape Validation
impl ValidationReport {
    pub fn no_policy_configured(&mut self) {
        self.error(
            "<root>",
            "no policy configured".to_string(),
            Some(
                "Set one of: trusted_networks, num_trusted_hops, or header + value.".to_string(),
            ),
        )
    }

    pub fn conflicting_policies(&mut self, shapes: &[PolicyShape]) {
        let names = shapes
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        self.error(
            "<root>",
            format!("more than one policy configured: {}", names),
            Some("Exactly one policy shape may be used per configuration.".to_string()),
        )
    }
}

/// Trusted Networks Validation
impl ValidationReport {
    pub fn missing_trusted_networks(&mut self) {
        self.error(
            "trusted_networks",
            "header injection requires trusted_networks".to_string(),
            None,
        )
    }

    pub fn invalid_trusted_network(&mut self, cidr: &str) {
        self.error(
            "trusted_networks",
            format!("invalid CIDR: {}", cidr),
            Some("Use CIDR notation, e.g. 10.0.0.0/8 or 10.0.0.1/32.".to_string()),
        )
    }

    pub fn trusted_networks_cannot_trust_all_networks(&mut self, network: IpNet) {
        self.error(
            "trusted_networks",
            format!("{} trusts every address", network),
            Some("A zero-length prefix makes every forwarded-for hop trusted.".to_string()),
        )
    }

    pub fn trusted_network_is_public_warning(&mut self, network: IpNet) {
        self.warning(
            "trusted_networks",
            format!("{} is not private infrastructure address space", network),
            Some("Only trust public ranges that are owned by your own proxies.".to_string()),
        )
    }

    pub fn trusted_networks_empty_warning(&mut self) {
        self.warning(
            "trusted_networks",
            "no trusted networks: every hop is treated as a client".to_string(),
            None,
        )
    }
}

/// Header Injection Validation
impl ValidationReport {
    pub fn injected_header_name_missing(&mut self) {
        self.error(
            "injected_header_name",
            "overwrite_header_on_exists requires injected_header_name".to_string(),
            None,
        )
    }

    pub fn header_name_empty(&mut self, field: &'static str) {
        self.error(field, format!("{} can not be empty", field), None)
    }

    pub fn invalid_header_name(&mut self, field: &'static str, name: &str) {
        self.error(field, format!("invalid header name: {:?}", name), None)
    }

    pub fn reserved_header_name(&mut self, field: &'static str, name: &str) {
        self.error(
            field,
            format!("header '{}' is reserved for the original chain", name),
            None,
        )
    }

    pub fn overwrite_flag_missing(&mut self) {
        self.error(
            "overwrite_header_on_exists",
            "overwrite_header_on_exists is required with injected_header_name".to_string(),
            None,
        )
    }

    pub fn overwrite_flag_not_boolean(&mut self, value: &serde_json::Value) {
        self.error(
            "overwrite_header_on_exists",
            format!("overwrite_header_on_exists must be boolean, got {}", value),
            None,
        )
    }
}

/// Trust Depth Validation
impl ValidationReport {
    pub fn negative_trusted_hops(&mut self, hops: i64) {
        self.error(
            "num_trusted_hops",
            format!("num_trusted_hops must not be negative: {}", hops),
            None,
        )
    }

    pub fn trusted_hops_out_of_range(&mut self, hops: i64) {
        self.error(
            "num_trusted_hops",
            format!("num_trusted_hops is out of range: {}", hops),
            None,
        )
    }
}

/// Static Header Validation
impl ValidationReport {
    pub fn static_header_missing(&mut self) {
        self.error("header", "header is required with value".to_string(), None)
    }

    pub fn static_value_missing(&mut self) {
        self.error("value", "value is required with header".to_string(), None)
    }

    pub fn invalid_header_value(&mut self, value: &str) {
        self.error("value", format!("invalid header value: {:?}", value), None)
    }
}
