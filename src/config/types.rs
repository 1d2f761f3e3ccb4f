use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

/// Where the dashboard API lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to
    /// (e.g., "http://localhost:5000/api/v1").
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Durable session storage and the sign-in boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Session file location. Defaults to `session.json` next to the config file.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Path the session guard navigates to after a 401.
    #[serde(default = "default_signin_path")]
    pub signin_path: String,
}

/// Notification texts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Shown when a failed write carries no `message` of its own.
    #[serde(default = "default_fallback_error_message")]
    pub fallback_error_message: String,
}

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api/v1";
pub const DEFAULT_SIGNIN_PATH: &str = "/signin";
pub const DEFAULT_ERROR_MESSAGE: &str = "حدث خطأ ما";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_signin_path() -> String {
    DEFAULT_SIGNIN_PATH.to_string()
}

fn default_fallback_error_message() -> String {
    DEFAULT_ERROR_MESSAGE.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            path: None,
            signin_path: default_signin_path(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            fallback_error_message: default_fallback_error_message(),
        }
    }
}
