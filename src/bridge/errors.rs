//! Bridge error types
//!
//! Bridge-level failures are returned to the front end as data, never as
//! process-terminating faults.

use thiserror::Error;

/// Errors produced while parsing or dispatching a front-end request
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BridgeError {
    /// The request name is not part of the bridge protocol
    #[error("unsupported request: {0}")]
    UnsupportedRequest(String),

    /// The payload could not be decoded for the named request
    #[error("malformed payload for '{name}': {reason}")]
    MalformedRequest { name: String, reason: String },

    /// Response serialization failed
    #[error("internal bridge error: {0}")]
    Internal(String),
}

impl BridgeError {
    pub fn malformed(name: &str, reason: impl Into<String>) -> Self {
        Self::MalformedRequest {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for BridgeError {
    fn from(e: serde_json::Error) -> Self {
        BridgeError::Internal(e.to_string())
    }
}

/// Result type for bridge operations
pub type BridgeResult<T> = Result<T, BridgeError>;
