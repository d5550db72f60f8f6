// Rust guideline compliant 2026-10-19

//! Error handling for lostfound application services.

use lostfound_client::ClientError;
use lostfound_core::Error as CoreError;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The item is not in the partition the operation targets.
    NotFound,
    /// The requested status transition is invalid.
    InvalidTransition,
    /// Input validation failed before any network call.
    ValidationError,
    /// The backend answered with a non-200 status.
    BackendError,
    /// The backend could not be reached or timed out.
    TransportError,
    /// No valid admin session is stored.
    NotLoggedIn,
    /// The `.lostfound` directory is missing.
    WorkspaceNotInitialized,
    /// Configuration could not be loaded.
    ConfigError,
    /// The request included invalid inputs.
    InvalidInput,
    /// IO failure while reading or writing local files.
    IoError,
    /// JSON serialization or parsing failed.
    JsonError,
    /// A fallback for unexpected errors.
    Unknown,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Workspace is missing or not initialized.
    #[error("Lostfound workspace not initialized at {path}. Run 'lostfound init' first.")]
    WorkspaceNotInitialized {
        /// Path where `.lostfound` was expected.
        path: PathBuf,
    },

    /// No session, or the stored session expired and was discarded.
    #[error("Not logged in. Run 'lostfound login' first.")]
    NotLoggedIn,

    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The store task has shut down.
    #[error("Item store is no longer running")]
    StoreClosed,

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Error from a backend call.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Core(CoreError::Json(err))
    }
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::WorkspaceNotInitialized { .. } => ErrorCode::WorkspaceNotInitialized,
            AppError::NotLoggedIn => ErrorCode::NotLoggedIn,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::StoreClosed => ErrorCode::Unknown,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Core(core) => match core {
                CoreError::NotFound(_) => ErrorCode::NotFound,
                CoreError::InvalidTransition(_) => ErrorCode::InvalidTransition,
                CoreError::Validation(_) => ErrorCode::ValidationError,
                CoreError::Config(_) => ErrorCode::ConfigError,
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
            },
            AppError::Client(client) => match client {
                ClientError::Http(_) => ErrorCode::TransportError,
                ClientError::Status { .. } => ErrorCode::BackendError,
                ClientError::Json(_) => ErrorCode::JsonError,
                ClientError::InvalidRequest(_) => ErrorCode::ValidationError,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::WorkspaceNotInitialized { path } => Some(serde_json::json!({
                "path": path,
            })),
            AppError::Core(CoreError::NotFound(id)) => Some(serde_json::json!({
                "id": id,
            })),
            AppError::Client(ClientError::Status { status, .. }) => Some(serde_json::json!({
                "status": status,
            })),
            _ => None,
        }
    }
}
