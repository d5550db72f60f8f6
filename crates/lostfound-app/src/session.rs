// Rust guideline compliant 2026-10-19

//! On-disk storage for the admin session.

use crate::error::{AppError, Result};
use chrono::{DateTime, Utc};
use lostfound_core::Session;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Reads and writes `session.json` inside the state directory.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Creates a store for the given file path.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the session file.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    /// Persists a session, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be serialized or written.
    pub fn save(&self, session: &Session) -> Result<()> {
        let content = serde_json::to_string_pretty(session)?;
        let temp_path = self.path.with_extension("json.tmp");
        std::fs::write(&temp_path, content)?;
        std::fs::rename(&temp_path, &self.path)?;
        debug!(path = %self.path.display(), "session saved");
        Ok(())
    }

    /// Loads the stored session if it has not expired.
    ///
    /// An expired session is deleted from disk.
    ///
    /// # Arguments
    ///
    /// * `now` - Current time used for the expiry check
    ///
    /// # Returns
    ///
    /// `Ok(None)` when no session is stored or the stored one expired.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_valid(&self, now: DateTime<Utc>) -> Result<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        let session: Session = serde_json::from_str(&content)?;
        if session.is_expired(now) {
            info!(expired_at = %session.expires_at, "discarding expired session");
            self.clear()?;
            return Ok(None);
        }
        Ok(Some(session))
    }

    /// Loads a valid session or fails with `NotLoggedIn`.
    ///
    /// # Errors
    ///
    /// Returns `NotLoggedIn` if no valid session exists, or an IO/JSON error.
    pub fn require(&self, now: DateTime<Utc>) -> Result<Session> {
        self.load_valid(now)?.ok_or(AppError::NotLoggedIn)
    }

    /// Removes the stored session.
    ///
    /// # Returns
    ///
    /// Whether a session file was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<bool> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}
