#[cfg(test)]
mod tests;

use crate::chain::{AddressChain, Hop, render};
use crate::trust::TrustedNetworks;
use std::fmt::{Display, Formatter};

/// Why no client address could be chosen from a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indeterminate {
    /// The header was present but carried no hops.
    EmptyChain,
    /// Every hop sits inside a trusted network.
    AllHopsTrusted { hops: usize },
    /// The trusted suffix covers the whole chain.
    ChainTooShort { hops: usize, trusted_hops: usize },
}

impl Display for Indeterminate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Indeterminate::EmptyChain => f.write_str("forwarded-for chain is empty"),
            Indeterminate::AllHopsTrusted { hops } => {
                write!(f, "all {hops} hops are inside trusted networks")
            }
            Indeterminate::ChainTooShort { hops, trusted_hops } => write!(
                f,
                "chain has {hops} hops but {trusted_hops} trailing hops are trusted"
            ),
        }
    }
}

/// Outcome of locating the trust boundary in one chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The rightmost hop outside the trust boundary.
    pub client: Option<Hop>,
    /// Hops outside the trust boundary, in chain order.
    pub retained: Vec<Hop>,
    /// Set whenever `client` is `None`.
    pub indeterminate: Option<Indeterminate>,
}

impl Resolution {
    fn resolved(retained: Vec<Hop>) -> Self {
        Self {
            client: retained.last().cloned(),
            retained,
            indeterminate: None,
        }
    }

    fn indeterminate(reason: Indeterminate) -> Self {
        Self {
            client: None,
            retained: Vec::new(),
            indeterminate: Some(reason),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.client.is_some()
    }

    /// Client address as it is written back into headers.
    pub fn client_addr(&self) -> Option<String> {
        self.client.as_ref().map(Hop::to_string)
    }

    /// Retained hops serialized as a forwarded-for value.
    pub fn retained_chain(&self) -> String {
        render(&self.retained)
    }
}

/// Drop every trusted hop; the client is the rightmost survivor.
pub fn resolve_trusted_networks(chain: &AddressChain, networks: &TrustedNetworks) -> Resolution {
    if chain.is_empty() {
        return Resolution::indeterminate(Indeterminate::EmptyChain);
    }

    let retained: Vec<Hop> = chain
        .iter()
        .filter(|hop| !networks.is_trusted(hop))
        .cloned()
        .collect();

    if retained.is_empty() {
        return Resolution::indeterminate(Indeterminate::AllHopsTrusted { hops: chain.len() });
    }

    Resolution::resolved(retained)
}

/// Skip `trusted_hops` entries from the right; the client is the next one.
///
/// A suffix as long as the chain leaves nothing that can be attributed to a
/// client, so the leftmost (client-controlled) hop is never returned then.
pub fn resolve_trust_depth(chain: &AddressChain, trusted_hops: usize) -> Resolution {
    if chain.is_empty() {
        return Resolution::indeterminate(Indeterminate::EmptyChain);
    }

    if trusted_hops >= chain.len() {
        return Resolution::indeterminate(Indeterminate::ChainTooShort {
            hops: chain.len(),
            trusted_hops,
        });
    }

    let boundary = chain.len() - trusted_hops;
    Resolution::resolved(chain.hops()[..boundary].to_vec())
}
