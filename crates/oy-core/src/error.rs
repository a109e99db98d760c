//! # Error Types
//!
//! Every client operation returns `Result<T, OyError>`.
//! Provider error payloads are not translated: a non-2xx response is still a
//! successful call and reaches the caller as a raw response.

use thiserror::Error;

/// Error type for the OY! client
#[derive(Debug, Error)]
pub enum OyError {
    /// Transport failure (DNS, connect refused, timeout, body read)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Configuration errors (missing keys, invalid header values)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A fractional value was given where an integer amount is required
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Id that cannot be used as a single URL path segment
    #[error("Invalid id: {0:?}")]
    InvalidId(String),

    /// Non-2xx status, only raised by `ApiResponse::error_for_status`
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body could not be decoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl OyError {
    /// Returns true if the error came from the HTTP transport
    pub fn is_transport(&self) -> bool {
        matches!(self, OyError::Transport(_))
    }

    /// Returns the HTTP status carried by the error, if any
    pub fn status_code(&self) -> Option<u16> {
        match self {
            OyError::Status { status, .. } => Some(*status),
            OyError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias for client operations
pub type OyResult<T> = Result<T, OyError>;
