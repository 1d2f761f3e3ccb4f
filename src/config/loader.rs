use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Environment variable overriding `api.base_url`.
pub const BASE_URL_ENV: &str = "FARMDASH_API_BASE_URL";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Directory holding `config.toml` and the default session file.
    ///
    /// Uses `~/.config/farmdash` on Unix/macOS, or the equivalent via
    /// `dirs::config_dir()`. Falls back to the current directory.
    pub fn config_dir() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("farmdash")
    }

    /// Returns the path to the configuration file.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Loads the default config file, then applies `FARMDASH_API_BASE_URL`
    /// and finally `base_url` (the command-line flag).
    pub fn load(base_url: Option<String>) -> Result<Self, ConfigError> {
        Self::resolve(
            &Self::config_path(),
            std::env::var(BASE_URL_ENV).ok(),
            base_url,
        )
    }

    /// File, then environment override, then explicit override.
    ///
    /// Validation runs once on the result, so an override can replace an
    /// invalid value from the file.
    pub fn resolve(
        path: &Path,
        env_base_url: Option<String>,
        base_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::load_from(path)?;
        config.override_base_url(env_base_url);
        config.override_base_url(base_url);
        config.validate()?;
        Ok(config)
    }

    /// Reads a specific file without validating it.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Replaces the base URL when the override is set and non-blank.
    pub fn override_base_url(&mut self, base_url: Option<String>) {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            tracing::debug!(base_url = %url, "base URL overridden");
            self.api.base_url = url;
        }
    }

    /// Effective session file path.
    pub fn session_path(&self) -> PathBuf {
        self.session
            .path
            .clone()
            .unwrap_or_else(|| Self::config_dir().join("session.json"))
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The base URL is an absolute http(s) URL
    /// - The sign-in path is absolute
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = reqwest::Url::parse(&self.api.base_url).map_err(|e| {
            ConfigError::ValidationError {
                message: format!("Invalid api.base_url '{}': {}", self.api.base_url, e),
            }
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "api.base_url must use http or https, got '{}'",
                    url.scheme()
                ),
            });
        }

        if !self.session.signin_path.starts_with('/') {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "session.signin_path must start with '/', got '{}'",
                    self.session.signin_path
                ),
            });
        }

        Ok(())
    }
}
