use std::fmt::{Display, Formatter};
use std::net::IpAddr;

/// One entry of a forwarded-for chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hop {
    raw: String,
    addr: Option<IpAddr>,
    position: usize,
}

impl Hop {
    /// Parse a single chain segment. Surrounding whitespace is ignored for
    /// parsing but the raw text is kept as received.
    ///
    /// IPv4-mapped IPv6 addresses are canonicalized to IPv4 so that
    /// `::ffff:10.0.0.1` and `10.0.0.1` classify identically.
    pub fn parse(position: usize, raw: &str) -> Self {
        let addr = raw
            .trim()
            .parse::<IpAddr>()
            .ok()
            .map(|addr| addr.to_canonical());

        Self {
            raw: raw.to_owned(),
            addr,
            position,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Parsed address, `None` when the segment is not an IP address.
    pub fn addr(&self) -> Option<IpAddr> {
        self.addr
    }

    /// Index in the original chain, 0 being the leftmost hop.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_malformed(&self) -> bool {
        self.addr.is_none()
    }
}

/// Well-formed hops render as their canonical address, malformed hops as
/// their trimmed raw text.
impl Display for Hop {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.addr {
            Some(addr) => write!(f, "{addr}"),
            None => f.write_str(self.raw.trim()),
        }
    }
}
