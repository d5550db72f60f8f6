// Rust guideline compliant 2026-10-19

//! JSON envelopes for command output.

use crate::error::{AppError, ErrorCode};
use crate::sync::SyncOutcome;
use serde::Serialize;

/// Envelope wrapping a successful command result.
#[derive(Debug, Serialize)]
pub struct SuccessEnvelope<T> {
    /// Always `"ok"`.
    pub status: &'static str,
    /// Command payload.
    pub result: T,
    /// Outcome of the sync pass that produced the data, when one ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync: Option<SyncOutcome>,
}

impl<T> SuccessEnvelope<T> {
    /// Wraps a result.
    #[must_use]
    pub fn new(result: T) -> Self {
        Self {
            status: "ok",
            result,
            sync: None,
        }
    }

    /// Attaches the sync outcome the result was derived from.
    #[must_use]
    pub fn with_sync(mut self, outcome: SyncOutcome) -> Self {
        self.sync = Some(outcome);
        self
    }
}

/// Envelope describing a failed command.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    /// Always `"error"`.
    pub status: &'static str,
    /// Stable error code.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
    /// Structured context, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorEnvelope {
    /// Builds the envelope for an application error.
    #[must_use]
    pub fn from_error(error: &AppError) -> Self {
        Self {
            status: "error",
            code: error.code(),
            message: error.to_string(),
            details: error.details(),
        }
    }
}
