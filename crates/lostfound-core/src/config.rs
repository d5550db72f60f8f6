// Rust guideline compliant 2026-10-19

//! Configuration management for the lostfound admin tools.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::path::Path;
use std::time::Duration;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

/// Configuration for the admin tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the backend REST service.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Number of records requested per admin listing page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Transport timeout for every request, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Log level (error, warn, info, debug).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_base_url() -> String {
    "http://localhost:5417".to_string()
}

fn default_page_size() -> u32 {
    10
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: default_page_size(),
            request_timeout_secs: default_timeout_secs(),
            output_format: OutputFormat::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `.lostfound/config.toml`
    /// 3. Environment variables with `LOSTFOUND_` prefix
    ///
    /// # Arguments
    ///
    /// * `state_dir` - Path to the `.lostfound` directory
    ///
    /// # Returns
    ///
    /// A Config struct with values from file and environment variables applied.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(state_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = state_dir.join("config.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `LOSTFOUND_BASE_URL` - Backend base URL
    /// - `LOSTFOUND_PAGE_SIZE` - Records per listing page
    /// - `LOSTFOUND_TIMEOUT_SECS` - Request timeout in seconds
    /// - `LOSTFOUND_OUTPUT_FORMAT` - Output format (json/table/plain)
    /// - `LOSTFOUND_LOG_LEVEL` - Log level
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("LOSTFOUND_BASE_URL") {
            self.base_url = val;
        }

        if let Ok(val) = std::env::var("LOSTFOUND_PAGE_SIZE") {
            self.page_size = val.parse().map_err(|_| {
                Error::Config("LOSTFOUND_PAGE_SIZE must be a positive number".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("LOSTFOUND_TIMEOUT_SECS") {
            self.request_timeout_secs = val.parse().map_err(|_| {
                Error::Config("LOSTFOUND_TIMEOUT_SECS must be a positive number".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("LOSTFOUND_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(Error::Config(
                        "LOSTFOUND_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        if let Ok(val) = std::env::var("LOSTFOUND_LOG_LEVEL") {
            self.log_level = val;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - base_url is empty
    /// - page_size or request_timeout_secs is zero
    /// - log_level is not a known level
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::Config("base_url cannot be empty".to_string()));
        }

        if self.page_size == 0 {
            return Err(Error::Config(
                "page_size must be greater than 0".to_string(),
            ));
        }

        if self.request_timeout_secs == 0 {
            return Err(Error::Config(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }

        match self.log_level.to_lowercase().as_str() {
            "error" | "warn" | "info" | "debug" => Ok(()),
            other => Err(Error::Config(format!("Invalid log level: {}", other))),
        }
    }

    /// Page size as a non-zero value.
    ///
    /// # Errors
    ///
    /// Returns an error if the page size is zero.
    pub fn page_size(&self) -> Result<NonZeroU32> {
        NonZeroU32::new(self.page_size)
            .ok_or_else(|| Error::Config("page_size must be greater than 0".to_string()))
    }

    /// Transport timeout.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Arguments
    ///
    /// * `state_dir` - Path to the `.lostfound` directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, state_dir: &Path) -> Result<()> {
        let config_path = state_dir.join("config.toml");
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.base_url, "http://localhost:5417");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.output_format, OutputFormat::Table);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_config_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn test_config_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let content = r#"
base_url = "https://lostfound.example.org"
page_size = 25
request_timeout_secs = 30
output_format = "json"
log_level = "debug"
"#;
        std::fs::write(temp_dir.path().join("config.toml"), content).unwrap();

        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.base_url, "https://lostfound.example.org");
        assert_eq!(config.page_size().unwrap().get(), 25);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_config_validation_zero_page_size() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.toml"), "page_size = 0").unwrap();
        assert!(Config::load(temp_dir.path()).is_err());
    }

    #[test]
    fn test_config_validation_unknown_log_level() {
        let config = Config {
            log_level: "loud".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let original = Config {
            base_url: "http://10.0.0.2:5417".to_string(),
            page_size: 50,
            request_timeout_secs: 5,
            output_format: OutputFormat::Plain,
            log_level: "info".to_string(),
        };

        original.save(temp_dir.path()).unwrap();
        let loaded = Config::load(temp_dir.path()).unwrap();
        assert_eq!(original, loaded);
    }
}
