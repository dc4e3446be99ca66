#[cfg(test)]
mod tests;

use crate::chain::{AddressChain, Hop};
use crate::resolve::{Resolution, resolve_trust_depth, resolve_trusted_networks};
use ipnet::IpNet;
use std::fmt::{Display, Formatter};
use std::net::IpAddr;

/// Network ranges whose members are legitimate intermediate proxies.
///
/// Built once from configuration and shared read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrustedNetworks {
    networks: Vec<IpNet>,
}

impl TrustedNetworks {
    pub fn new(networks: Vec<IpNet>) -> Self {
        Self { networks }
    }

    /// Parse CIDR strings, failing on the first invalid entry.
    pub fn parse<I, S>(cidrs: I) -> Result<Self, ipnet::AddrParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let networks = cidrs
            .into_iter()
            .map(|s| s.as_ref().trim().parse::<IpNet>())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { networks })
    }

    pub fn networks(&self) -> &[IpNet] {
        &self.networks
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    pub fn contains(&self, addr: &IpAddr) -> bool {
        self.networks.iter().any(|net| net.contains(addr))
    }

    /// Malformed hops are never trusted.
    pub fn is_trusted(&self, hop: &Hop) -> bool {
        is_trusted(hop.addr(), self)
    }
}

/// True iff `addr` is present and inside at least one trusted range.
pub fn is_trusted(addr: Option<IpAddr>, networks: &TrustedNetworks) -> bool {
    addr.is_some_and(|addr| networks.contains(&addr))
}

/// How the trust boundary of a chain is located.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrustPolicy {
    /// Hops inside these ranges are proxies; everything else is a client.
    TrustedNetworks(TrustedNetworks),
    /// The rightmost `n` hops are proxies, regardless of address.
    TrustedHopCount(usize),
}

impl TrustPolicy {
    pub fn resolve(&self, chain: &AddressChain) -> Resolution {
        match self {
            TrustPolicy::TrustedNetworks(networks) => resolve_trusted_networks(chain, networks),
            TrustPolicy::TrustedHopCount(count) => resolve_trust_depth(chain, *count),
        }
    }
}

impl Display for TrustPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TrustPolicy::TrustedNetworks(networks) => {
                write!(f, "{} trusted networks", networks.networks().len())
            }
            TrustPolicy::TrustedHopCount(count) => write!(f, "{count} trusted hops"),
        }
    }
}
