mod hop;

pub use hop::Hop;

use smallvec::SmallVec;

/// Ordered hops of one forwarded-for header, leftmost (oldest) first.
///
/// A chain is always parsed fresh from the current header value and lives no
/// longer than the request that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressChain {
    hops: SmallVec<[Hop; 8]>,
}

impl AddressChain {
    /// Split a raw forwarded-for value on `,` and parse every segment.
    ///
    /// A blank value yields an empty chain. Empty interior segments are kept
    /// as malformed hops so positions stay aligned with the raw header.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::default();
        }

        let hops = raw
            .split(',')
            .enumerate()
            .map(|(position, segment)| Hop::parse(position, segment))
            .collect();

        Self { hops }
    }

    pub fn hops(&self) -> &[Hop] {
        &self.hops
    }

    pub fn len(&self) -> usize {
        self.hops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Hop> {
        self.hops.iter()
    }

    /// Number of hops that failed to parse as an address.
    pub fn malformed_count(&self) -> usize {
        self.hops.iter().filter(|hop| hop.is_malformed()).count()
    }
}

/// Serialize hops back into a forwarded-for value (`,` separated, no spaces).
pub fn render<'a>(hops: impl IntoIterator<Item = &'a Hop>) -> String {
    hops.into_iter()
        .map(|hop| hop.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
