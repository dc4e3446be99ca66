use super::{HeaderStore, HeaderStoreError};

/// Plain ordered header list, as handed over by runtimes that expose headers
/// as name/value tuples.
///
/// Names are stored exactly as given; lookups ignore ASCII case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderPairs {
    pairs: Vec<(String, String)>,
}

impl HeaderPairs {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    pub fn into_inner(self) -> Vec<(String, String)> {
        self.pairs
    }

    pub fn as_slice(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Every value stored under `name`, in order.
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for HeaderPairs
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

fn check_name(name: &str) -> Result<(), HeaderStoreError> {
    if name.is_empty() {
        return Err(HeaderStoreError::invalid_name(name));
    }
    Ok(())
}

impl HeaderStore for HeaderPairs {
    fn header_pairs(&self) -> Result<Vec<(String, String)>, HeaderStoreError> {
        Ok(self.pairs.clone())
    }

    fn add_header(&mut self, name: &str, value: &str) -> Result<(), HeaderStoreError> {
        check_name(name)?;
        self.pairs.push((name.to_owned(), value.to_owned()));
        Ok(())
    }

    /// The first matching entry keeps its slot; later duplicates are dropped.
    fn replace_header(&mut self, name: &str, value: &str) -> Result<(), HeaderStoreError> {
        check_name(name)?;

        let mut replaced = false;
        self.pairs.retain_mut(|(key, current)| {
            if !key.eq_ignore_ascii_case(name) {
                return true;
            }
            if replaced {
                return false;
            }
            *current = value.to_owned();
            replaced = true;
            true
        });

        if !replaced {
            self.pairs.push((name.to_owned(), value.to_owned()));
        }
        Ok(())
    }
}
