use crate::ctx::RequestId;
use crate::headers::HeaderStore;
use http::Extensions;

/// Request context passed through the device pipeline.
///
/// Lives for exactly one request; nothing in here is shared across requests.
pub struct RequestCtx<'h> {
    pub request_id: RequestId,

    /// Header storage owned by the hosting runtime.
    pub headers: &'h mut dyn HeaderStore,

    /// Request-scoped typed extensions (NOT forwarded, NOT logged by default).
    pub extensions: Extensions,
}

impl<'h> RequestCtx<'h> {
    pub fn new(headers: &'h mut dyn HeaderStore) -> Self {
        Self {
            request_id: RequestId::default(),
            headers,
            extensions: Extensions::new(),
        }
    }

    pub fn with_request_id(mut self, request_id: impl Into<RequestId>) -> Self {
        self.request_id = request_id.into();
        self
    }

    pub fn request_id(&self) -> &RequestId {
        &self.request_id
    }
}
