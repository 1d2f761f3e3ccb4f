//! Configuration loading for the dashboard client.

mod loader;
mod types;

pub use loader::{ConfigError, BASE_URL_ENV};
pub use types::{
    ApiConfig, Config, NotificationConfig, SessionConfig, DEFAULT_BASE_URL,
    DEFAULT_ERROR_MESSAGE, DEFAULT_SIGNIN_PATH,
};
