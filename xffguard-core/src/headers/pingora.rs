use super::header_map::{first_value, pairs_of, preserve_value};
use super::{HeaderStore, HeaderStoreError};
use pingora_http::RequestHeader;

/// Pingora keeps its own case map next to the `http` header map, so writes go
/// through `RequestHeader` rather than the inner map.
impl HeaderStore for RequestHeader {
    fn header_pairs(&self) -> Result<Vec<(String, String)>, HeaderStoreError> {
        Ok(pairs_of(&self.headers))
    }

    fn header(&self, name: &str) -> Result<Option<String>, HeaderStoreError> {
        first_value(&self.headers, name)
    }

    fn add_header(&mut self, name: &str, value: &str) -> Result<(), HeaderStoreError> {
        self.append_header(name.to_owned(), value.to_owned())
            .map(|_| ())
            .map_err(|e| HeaderStoreError::rejected(name, e))
    }

    fn replace_header(&mut self, name: &str, value: &str) -> Result<(), HeaderStoreError> {
        self.insert_header(name.to_owned(), value.to_owned())
            .map_err(|e| HeaderStoreError::rejected(name, e))
    }

    fn preserve(&mut self, from: &str, to: &str) -> Result<(), HeaderStoreError> {
        let Some((name, value)) = preserve_value(&self.headers, from, to)? else {
            return Ok(());
        };
        self.insert_header(name, value)
            .map_err(|e| HeaderStoreError::rejected(to, e))
    }
}
