// Rust guideline compliant 2026-10-19

//! Error types for backend calls.

use thiserror::Error;

/// Result type alias for backend calls.
pub type Result<T> = std::result::Result<T, ClientError>;

/// A backend call failed. Callers only distinguish success from failure.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure: connection refused, timeout, broken body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with anything other than 200.
    #[error("Backend error: {status} - {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        message: String,
    },

    /// Response body was not the expected JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Request rejected before it reached the network.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}
