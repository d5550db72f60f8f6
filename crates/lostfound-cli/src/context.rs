// Rust guideline compliant 2026-10-19

//! Per-invocation state shared by the commands.

use crate::output::OutputFormatter;
use crate::terminal::stderr_is_terminal;
use chrono::Utc;
use lostfound_app::{AppError, Result, WorkspaceContext};
use lostfound_client::ApiClient;
use lostfound_core::Config;
use std::num::NonZeroU32;

/// Workspace, effective config, and output settings for one command.
pub struct CommandContext {
    workspace: WorkspaceContext,
    config: Config,
    formatter: Box<dyn OutputFormatter>,
    json: bool,
    use_color: bool,
}

impl CommandContext {
    /// Bundles the resolved settings.
    pub fn new(
        workspace: WorkspaceContext,
        config: Config,
        formatter: Box<dyn OutputFormatter>,
        json: bool,
        use_color: bool,
    ) -> Self {
        Self {
            workspace,
            config,
            formatter,
            json,
            use_color,
        }
    }

    /// Active workspace.
    pub fn workspace(&self) -> &WorkspaceContext {
        &self.workspace
    }

    /// Effective configuration after file, environment, and flag overrides.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Selected formatter.
    pub fn formatter(&self) -> &dyn OutputFormatter {
        self.formatter.as_ref()
    }

    /// Whether output is JSON.
    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Whether stderr messages may be colored.
    pub fn use_color(&self) -> bool {
        self.use_color
    }

    /// Whether sync progress should be drawn.
    pub fn show_progress(&self) -> bool {
        !self.json && stderr_is_terminal()
    }

    /// Configured page size.
    ///
    /// # Errors
    ///
    /// Returns an error if the page size is zero.
    pub fn page_size(&self) -> Result<NonZeroU32> {
        Ok(self.config.page_size()?)
    }

    /// Client without credentials, for public endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn client(&self) -> Result<ApiClient> {
        Ok(ApiClient::new(
            self.config.base_url.clone(),
            self.config.request_timeout(),
        )?)
    }

    /// Client carrying the stored admin token.
    ///
    /// # Errors
    ///
    /// Returns `NotLoggedIn` when no unexpired session is stored.
    pub fn admin_client(&self) -> Result<ApiClient> {
        let session = self.workspace.session_store().require(Utc::now())?;
        Ok(self.client()?.with_token(session.token))
    }

    /// Prints a rendered result to stdout.
    pub fn emit(&self, output: &str) {
        println!("{}", output.trim_end_matches('\n'));
    }
}

/// Applies flag overrides to a loaded config and re-validates it.
///
/// # Errors
///
/// Returns an error if the overridden config is invalid.
pub fn apply_overrides(
    mut config: Config,
    base_url: Option<String>,
    page_size: Option<u32>,
    log_level: Option<String>,
) -> Result<Config> {
    if let Some(base_url) = base_url {
        config.base_url = base_url;
    }
    if let Some(page_size) = page_size {
        config.page_size = page_size;
    }
    if let Some(log_level) = log_level {
        config.log_level = log_level;
    }
    config.validate().map_err(AppError::from)?;
    Ok(config)
}
