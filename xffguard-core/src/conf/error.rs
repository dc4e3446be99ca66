use crate::conf::validation::ValidationReport;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    //-------------------------------------------------------------------------
    // IO
    //-------------------------------------------------------------------------
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    //-------------------------------------------------------------------------
    // Parsing
    //-------------------------------------------------------------------------
    #[error("invalid configuration payload ({origin}): {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    //-------------------------------------------------------------------------
    // Validation
    //-------------------------------------------------------------------------
    #[error("configuration validation failed: {}", .report.summary())]
    Validation { report: ValidationReport },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(origin: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Parse {
            origin: origin.into(),
            source,
        }
    }

    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::Parse { .. } => Some(
            "The configuration must be a JSON object with exactly one policy shape.\n\
             \n\
             Examples:\n\
             \n\
             {\"trusted_networks\": [\"10.0.0.0/8\"]}\n\
             {\"trusted_networks\": [\"10.0.0.0/8\"], \"injected_header_name\": \"x-real-ip\", \"overwrite_header_on_exists\": false}\n\
             {\"num_trusted_hops\": 1}\n\
             {\"header\": \"x-forwarded-for\", \"value\": \"127.0.0.1\"}",
        ),

        ConfigError::Validation { .. } => Some(
            "Fix the errors listed above. Warnings alone never prevent startup.",
        ),

        _ => None,
    }
}
