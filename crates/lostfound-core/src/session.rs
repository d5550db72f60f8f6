// Rust guideline compliant 2026-10-19

//! Admin session token model.

use crate::wire;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Bearer token issued by `POST /api/auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token.
    pub token: String,
    /// Moment the backend stops accepting the token.
    #[serde(with = "wire::timestamp")]
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Whether the token has expired at `now`.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }
}
