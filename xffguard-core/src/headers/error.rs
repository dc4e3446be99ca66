use thiserror::Error;

/// Failure reported by the runtime owning the request headers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HeaderStoreError {
    #[error("request headers are unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("invalid header name '{name}'")]
    InvalidName { name: String },

    #[error("invalid value for header '{name}'")]
    InvalidValue { name: String },

    #[error("value of header '{name}' is not valid UTF-8")]
    NonUtf8Value { name: String },

    #[error("runtime rejected write of header '{name}': {reason}")]
    Rejected { name: String, reason: String },
}

impl HeaderStoreError {
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName { name: name.into() }
    }

    pub fn invalid_value(name: impl Into<String>) -> Self {
        Self::InvalidValue { name: name.into() }
    }

    pub fn non_utf8(name: impl Into<String>) -> Self {
        Self::NonUtf8Value { name: name.into() }
    }

    pub fn rejected(name: impl Into<String>, reason: impl ToString) -> Self {
        Self::Rejected {
            name: name.into(),
            reason: reason.to_string(),
        }
    }
}
