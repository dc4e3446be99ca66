use crate::trust::{TrustPolicy, TrustedNetworks};
use http::HeaderName;

/// Validated, immutable sanitizer configuration.
///
/// Built once at startup and shared read-only by every request evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizerConfig {
    pub policy: Policy,
}

/// What the sanitizer writes back once a chain has been resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Policy {
    /// Replace the forwarded-for header with its untrusted hops.
    FilterChain { trust: TrustPolicy },

    /// Write the client address into a separate header.
    InjectHeader {
        trust: TrustPolicy,
        header: HeaderName,
        overwrite_on_exists: bool,
    },

    /// Replace the forwarded-for header with the client address alone.
    TrustDepth { trust: TrustPolicy },

    /// Set a fixed header value without looking at the chain.
    Static { header: HeaderName, value: String },
}

impl Policy {
    pub fn filter_chain(networks: TrustedNetworks) -> Self {
        Policy::FilterChain {
            trust: TrustPolicy::TrustedNetworks(networks),
        }
    }

    pub fn inject_header(
        networks: TrustedNetworks,
        header: HeaderName,
        overwrite_on_exists: bool,
    ) -> Self {
        Policy::InjectHeader {
            trust: TrustPolicy::TrustedNetworks(networks),
            header,
            overwrite_on_exists,
        }
    }

    pub fn trust_depth(trusted_hops: usize) -> Self {
        Policy::TrustDepth {
            trust: TrustPolicy::TrustedHopCount(trusted_hops),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Policy::FilterChain { .. } => "filter_chain",
            Policy::InjectHeader { .. } => "inject_header",
            Policy::TrustDepth { .. } => "trust_depth",
            Policy::Static { .. } => "static",
        }
    }

    /// One-line human readable summary, used by the CLI.
    pub fn describe(&self) -> String {
        match self {
            Policy::FilterChain { trust } => {
                format!("filter forwarded-for chain using {trust}")
            }
            Policy::InjectHeader {
                trust,
                header,
                overwrite_on_exists,
            } => format!(
                "inject client address into '{header}' using {trust} (overwrite on exists: {overwrite_on_exists})"
            ),
            Policy::TrustDepth { trust } => {
                format!("narrow forwarded-for to the client address using {trust}")
            }
            Policy::Static { header, value } => format!("set '{header}' to fixed value '{value}'"),
        }
    }
}
