//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use farmdash::api::ApiClient;
use farmdash::config::Config;
use farmdash::notify::RecordingNotifier;
use farmdash::session::{MemorySessionStore, RecordingNavigator, SessionStore, USER_KEY};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub use mock_backend::{CapturedRequest, MockBackend, MockResponse, API_PREFIX};

pub const TEST_TOKEN: &str = "test-token";

/// Client wired to the full interceptor pipeline with recording sinks.
pub struct Harness {
    pub client: ApiClient,
    pub store: Arc<MemorySessionStore>,
    pub notifier: Arc<RecordingNotifier>,
    pub navigator: Arc<RecordingNavigator>,
}

/// Signed-in client (token plus cached user) pointed at `base_url`.
pub fn harness(base_url: &str) -> Harness {
    let mut config = Config::default();
    config.api.base_url = base_url.to_string();

    let store = Arc::new(MemorySessionStore::with_token(TEST_TOKEN));
    store
        .set(USER_KEY, r#"{"name":"farmer"}"#)
        .expect("memory store never fails");
    let notifier = Arc::new(RecordingNotifier::new());
    let navigator = Arc::new(RecordingNavigator::new());

    let client = ApiClient::new(&config, store.clone(), notifier.clone(), navigator.clone())
        .expect("Failed to build client");

    Harness {
        client,
        store,
        notifier,
        navigator,
    }
}

/// Write `content` as `config.toml` in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
