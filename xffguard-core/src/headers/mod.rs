mod error;
mod header_map;
mod pairs;
#[cfg(feature = "pingora")]
mod pingora;

pub use error::HeaderStoreError;
pub use pairs::HeaderPairs;

/// Header carrying the forwarded-for chain.
pub const FORWARDED_FOR: &str = "x-forwarded-for";

/// Header receiving the untouched original chain before any rewrite.
pub const ORIGINAL_FORWARDED_FOR: &str = "x-original-forwarded-for";

/// The header operations the sanitizer needs from a hosting runtime.
///
/// Runtimes implement three calls; the rest have defaults built on them.
/// Every call may fail since the runtime owns the actual header storage.
pub trait HeaderStore {
    /// Every header of the current request, in transport order.
    fn header_pairs(&self) -> Result<Vec<(String, String)>, HeaderStoreError>;

    /// First value of `name`, matched ASCII-case-insensitively.
    fn header(&self, name: &str) -> Result<Option<String>, HeaderStoreError> {
        Ok(find_header(&self.header_pairs()?, name).map(str::to_owned))
    }

    /// Append a value, keeping any existing values of `name`.
    fn add_header(&mut self, name: &str, value: &str) -> Result<(), HeaderStoreError>;

    /// Set `name` to exactly one value, dropping previous values.
    fn replace_header(&mut self, name: &str, value: &str) -> Result<(), HeaderStoreError>;

    /// Copy the first value of `from` into `to` (replace semantics) without
    /// re-encoding it. Does nothing when `from` is absent.
    ///
    /// Stores that keep raw bytes override this so values which are not UTF-8
    /// survive unchanged.
    fn preserve(&mut self, from: &str, to: &str) -> Result<(), HeaderStoreError> {
        match self.header(from)? {
            Some(value) => self.replace_header(to, &value),
            None => Ok(()),
        }
    }
}

/// First value of `name` in `pairs`; header names compare case-insensitively
/// the way HTTP transports treat them.
pub fn find_header<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}
