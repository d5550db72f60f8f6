// Rust guideline compliant 2026-10-19

//! Error types for the lostfound core library.

use crate::models::ItemId;
use thiserror::Error;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Item not present in the partition the operation targets.
    #[error("Item not found: {0}")]
    NotFound(ItemId),

    /// Invalid status transition.
    #[error("Invalid status transition: {0}")]
    InvalidTransition(String),

    /// Input failed validation before any network call.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Configuration file or override is invalid.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
