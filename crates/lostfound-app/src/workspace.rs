// Rust guideline compliant 2026-10-19

//! Workspace discovery and path management.
//!
//! A workspace is any directory holding a `.lostfound/` state directory with
//! the config file and the stored admin session.

use crate::error::{AppError, Result};
use crate::session::SessionStore;
use lostfound_core::Config;
use std::path::{Path, PathBuf};
use tracing::info;

/// Name of the state directory inside a workspace root.
pub const STATE_DIR: &str = ".lostfound";

/// Resolved paths of a lostfound workspace.
#[derive(Debug, Clone)]
pub struct WorkspaceContext {
    root: PathBuf,
    state_dir: PathBuf,
    config_path: PathBuf,
    session_path: PathBuf,
}

impl WorkspaceContext {
    fn at(root: PathBuf) -> Self {
        let state_dir = root.join(STATE_DIR);
        Self {
            root,
            config_path: state_dir.join("config.toml"),
            session_path: state_dir.join("session.json"),
            state_dir,
        }
    }

    fn resolve_root(root: Option<&Path>) -> Result<PathBuf> {
        Ok(match root {
            Some(root) => root.to_path_buf(),
            None => std::env::current_dir()?,
        })
    }

    /// Discovers an initialized workspace.
    ///
    /// # Arguments
    ///
    /// * `root` - Optional workspace root; defaults to the current directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The current directory cannot be resolved
    /// - The `.lostfound` directory is missing
    pub fn discover(root: Option<&Path>) -> Result<Self> {
        let context = Self::at(Self::resolve_root(root)?);
        if !context.state_dir.is_dir() {
            return Err(AppError::WorkspaceNotInitialized {
                path: context.state_dir,
            });
        }
        Ok(context)
    }

    /// Creates the state directory and a default config if missing.
    ///
    /// An existing config file is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or config cannot be written.
    pub fn init(root: Option<&Path>) -> Result<Self> {
        let context = Self::at(Self::resolve_root(root)?);
        std::fs::create_dir_all(&context.state_dir)?;
        if !context.config_path.exists() {
            Config::default().save(&context.state_dir)?;
            info!(path = %context.config_path.display(), "wrote default config");
        }
        Ok(context)
    }

    /// Workspace root.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    /// The `.lostfound` directory.
    #[must_use]
    pub fn state_dir(&self) -> &Path {
        self.state_dir.as_path()
    }

    /// Config TOML path.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        self.config_path.as_path()
    }

    /// Stored session path.
    #[must_use]
    pub fn session_path(&self) -> &Path {
        self.session_path.as_path()
    }

    /// Loads config with environment overrides applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or is invalid.
    pub fn load_config(&self) -> Result<Config> {
        Ok(Config::load(self.state_dir())?)
    }

    /// Session store backed by this workspace.
    #[must_use]
    pub fn session_store(&self) -> SessionStore {
        SessionStore::new(self.session_path.clone())
    }
}
