use thiserror::Error;

/// Inline error code used when a write endpoint answers 404.
pub const NOT_FOUND_CODE: &str = "NotFound";

/// Failures reported by an [`HttpTransport`](crate::transport::HttpTransport).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransportError {
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Network error: {0}")]
    Network(String),
    #[error("Invalid JSON body: {0}")]
    Decode(String),
}

impl TransportError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, TransportError::Status { status: 404, .. })
    }
}

/// Errors surfaced by a form controller to whoever drives it.
///
/// Domain errors (`Ok=false`) and 404s are not here: they land in
/// [`FormState::error`](crate::domain::FormState) instead.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FormError {
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unreadable response: {0}")]
    Decode(String),
    #[error("A request is already in flight")]
    Busy,
    #[error("Page {page} has no {operation} endpoint")]
    Unsupported {
        page: &'static str,
        operation: &'static str,
    },
    #[error("Invalid endpoint {path}: {reason}")]
    InvalidEndpoint { path: String, reason: String },
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<TransportError> for FormError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Status { status, body } => FormError::Http { status, body },
            TransportError::Network(msg) => FormError::Network(msg),
            TransportError::Decode(msg) => FormError::Decode(msg),
        }
    }
}
