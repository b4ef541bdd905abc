//! Execution context carrying the in-flight request.

/// Access to the request currently being executed.
///
/// The target URI is parsed into a URL and passed to the host authenticator
/// so that realm matching can consider the request destination.
pub trait RequestContext {
    /// URI of the request currently being executed, if one is attached.
    fn current_request_uri(&self) -> Option<&str>;
}

/// Simple owned context for callers that drive resolution directly.
#[derive(Debug, Default, Clone)]
pub struct ExecutionContext {
    request_uri: Option<String>,
}

impl ExecutionContext {
    /// Context with no request attached (fluent callers).
    pub fn new() -> Self {
        Self::default()
    }

    /// Context carrying the target URI of the request being executed.
    pub fn with_request_uri(uri: impl Into<String>) -> Self {
        Self {
            request_uri: Some(uri.into()),
        }
    }
}

impl RequestContext for ExecutionContext {
    fn current_request_uri(&self) -> Option<&str> {
        self.request_uri.as_deref()
    }
}
