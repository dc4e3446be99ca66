use super::{HeaderStore, HeaderStoreError};
use http::{HeaderMap, HeaderName, HeaderValue};

fn name_of(name: &str) -> Result<HeaderName, HeaderStoreError> {
    HeaderName::from_bytes(name.as_bytes()).map_err(|_| HeaderStoreError::invalid_name(name))
}

fn value_of(name: &str, value: &str) -> Result<HeaderValue, HeaderStoreError> {
    HeaderValue::from_str(value).map_err(|_| HeaderStoreError::invalid_value(name))
}

/// Values that are not valid UTF-8 are converted lossily; callers that need
/// the exact bytes go through [`first_value`] or [`preserve_value`].
pub(crate) fn pairs_of(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(k, v)| {
            (
                k.as_str().to_owned(),
                String::from_utf8_lossy(v.as_bytes()).into_owned(),
            )
        })
        .collect()
}

/// First value of `name`; a value that is not UTF-8 is an error, never
/// silently rewritten.
pub(crate) fn first_value(
    headers: &HeaderMap,
    name: &str,
) -> Result<Option<String>, HeaderStoreError> {
    let Some(value) = headers.get(name_of(name)?) else {
        return Ok(None);
    };

    std::str::from_utf8(value.as_bytes())
        .map(|v| Some(v.to_owned()))
        .map_err(|_| HeaderStoreError::non_utf8(name))
}

/// Raw bytes of the first `from` value, ready to be stored under another name.
pub(crate) fn preserve_value(
    headers: &HeaderMap,
    from: &str,
    to: &str,
) -> Result<Option<(HeaderName, HeaderValue)>, HeaderStoreError> {
    let to = name_of(to)?;
    Ok(headers.get(name_of(from)?).map(|value| (to, value.clone())))
}

fn append(headers: &mut HeaderMap, name: &str, value: &str) -> Result<(), HeaderStoreError> {
    let value = value_of(name, value)?;
    headers.append(name_of(name)?, value);
    Ok(())
}

fn insert(headers: &mut HeaderMap, name: &str, value: &str) -> Result<(), HeaderStoreError> {
    let value = value_of(name, value)?;
    headers.insert(name_of(name)?, value);
    Ok(())
}

impl HeaderStore for HeaderMap {
    fn header_pairs(&self) -> Result<Vec<(String, String)>, HeaderStoreError> {
        Ok(pairs_of(self))
    }

    fn header(&self, name: &str) -> Result<Option<String>, HeaderStoreError> {
        first_value(self, name)
    }

    fn add_header(&mut self, name: &str, value: &str) -> Result<(), HeaderStoreError> {
        append(self, name, value)
    }

    fn replace_header(&mut self, name: &str, value: &str) -> Result<(), HeaderStoreError> {
        insert(self, name, value)
    }

    fn preserve(&mut self, from: &str, to: &str) -> Result<(), HeaderStoreError> {
        if let Some((to, value)) = preserve_value(self, from, to)? {
            self.insert(to, value);
        }
        Ok(())
    }
}
