use thiserror::Error;

/// Error returned by the transaction service alongside a non-2xx status.
///
/// Displays as the service-provided error message only, which is empty if the
/// response body was missing or could not be parsed. The HTTP status is kept so
/// that such responses are still distinguishable from successful ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// HTTP status code of the response.
    pub http_status: u16,
    /// Status string reported by the service, typically "Failure".
    pub status: String,
    pub message: String,
    pub error_details: String,
    pub error_code: String,
}

#[derive(Debug, Error)]
pub enum RokuIapError {
    /// No HTTP response was obtained (DNS, connection, timeout, etc.).
    #[error("request to transaction service failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The service responded with a non-2xx status.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The service responded with a 2xx status, but the body could not be
    /// parsed as a validation result.
    #[error("failed to parse transaction service response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl RokuIapError {
    /// Whether the request was aborted because the configured timeout elapsed.
    pub fn is_timeout(&self) -> bool {
        match self {
            RokuIapError::Transport(e) => e.is_timeout(),
            _ => false,
        }
    }

    /// HTTP status of the response, if one was received with a non-2xx code.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            RokuIapError::Validation(e) => Some(e.http_status),
            _ => None,
        }
    }
}
