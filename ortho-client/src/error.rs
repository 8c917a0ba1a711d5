//! Client error types

use reqwest::StatusCode;
use shared::{AppError, ErrorCode};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Payload parsed but violates a domain invariant
    #[error("Rejected payload: {0}")]
    Rejected(#[from] AppError),

    /// Local file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Channel lacks the settings it needs
    #[error("Channel not configured: {0}")]
    NotConfigured(String),

    /// Remote accepted the request but reported a failure
    #[error("Delivery failed: {0}")]
    Delivery(String),
}

impl ClientError {
    /// Classify as a catalog load failure
    pub fn to_catalog_error(&self) -> AppError {
        let code = match self {
            ClientError::Http(_) | ClientError::Status { .. } | ClientError::Io(_) => {
                ErrorCode::CatalogUnavailable
            }
            ClientError::Rejected(inner) => inner.code,
            _ => ErrorCode::CatalogMalformed,
        };
        AppError::with_message(code, self.to_string())
    }

    /// Classify as an outbound message failure
    pub fn to_dispatch_error(&self) -> AppError {
        let code = match self {
            ClientError::NotConfigured(_) => ErrorCode::ChannelNotConfigured,
            _ => ErrorCode::DispatchFailed,
        };
        AppError::with_message(code, self.to_string())
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
