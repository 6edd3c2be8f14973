//! Client error types

use reqwest::StatusCode;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network/transport failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server-reported application error (non-2xx with a message payload)
    ///
    /// The message is surfaced to the user verbatim.
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    /// Response body did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
