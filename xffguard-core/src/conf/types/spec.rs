use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Configuration payload as written by the operator.
///
/// Every field is optional here; which ones are present decides the policy
/// and validation rejects mixtures.
#[derive(Default, Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SanitizerSpec {
    /// CIDR strings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trusted_networks: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub injected_header_name: Option<String>,

    /// Kept loose so that non-boolean values are reported by validation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overwrite_header_on_exists: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_trusted_hops: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyShape {
    TrustedNetworks,
    TrustDepth,
    Static,
}

impl Display for PolicyShape {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            PolicyShape::TrustedNetworks => "trusted_networks",
            PolicyShape::TrustDepth => "num_trusted_hops",
            PolicyShape::Static => "header/value",
        })
    }
}

impl SanitizerSpec {
    /// Every policy shape that has at least one of its keys present.
    pub fn shapes(&self) -> Vec<PolicyShape> {
        let mut shapes = Vec::new();

        if self.trusted_networks.is_some()
            || self.injected_header_name.is_some()
            || self.overwrite_header_on_exists.is_some()
        {
            shapes.push(PolicyShape::TrustedNetworks);
        }
        if self.num_trusted_hops.is_some() {
            shapes.push(PolicyShape::TrustDepth);
        }
        if self.header.is_some() || self.value.is_some() {
            shapes.push(PolicyShape::Static);
        }

        shapes
    }

    pub fn injects_header(&self) -> bool {
        self.injected_header_name.is_some() || self.overwrite_header_on_exists.is_some()
    }
}
