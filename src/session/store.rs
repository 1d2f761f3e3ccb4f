//! Durable key-value storage for session credentials.
//!
//! All callers go through [`SessionStore`]; the backing mechanism is either
//! process memory or a JSON file. Writes are last-writer-wins, no locking.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use thiserror::Error;

use super::token::SessionToken;

/// Storage key of the session token.
pub const TOKEN_KEY: &str = "token";
/// Storage key of the cached user profile.
pub const USER_KEY: &str = "user";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to write session file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode session file '{path}': {source}")]
    EncodeError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Client-side credential storage.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Removes `key`. Removing a missing key is not an error.
    fn clear(&self, key: &str) -> Result<(), SessionError>;

    /// The session token, if one is stored and non-empty.
    fn token(&self) -> Option<SessionToken> {
        self.get(TOKEN_KEY).and_then(SessionToken::new)
    }
}

/// Process-local store, used by tests and one-shot sessions.
#[derive(Default)]
pub struct MemorySessionStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .lock()
            .insert(TOKEN_KEY.to_string(), token.to_string());
        store
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.entries
            .lock()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<(), SessionError> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

/// JSON-file store that survives process restarts.
///
/// The file is re-read on every access so separate processes observe each
/// other's writes.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> BTreeMap<String, String> {
        let Ok(content) = fs::read_to_string(&self.path) else {
            return BTreeMap::new();
        };
        match serde_json::from_str(&content) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "session file unreadable, treating as empty");
                BTreeMap::new()
            }
        }
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| SessionError::WriteError {
                path: self.path.clone(),
                source: e,
            })?;
        }
        let content =
            serde_json::to_string_pretty(entries).map_err(|e| SessionError::EncodeError {
                path: self.path.clone(),
                source: e,
            })?;
        fs::write(&self.path, content).map_err(|e| SessionError::WriteError {
            path: self.path.clone(),
            source: e,
        })
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_all().remove(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let mut entries = self.read_all();
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    fn clear(&self, key: &str) -> Result<(), SessionError> {
        let mut entries = self.read_all();
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.write_all(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_set_get_clear() {
        let store = MemorySessionStore::new();
        assert!(store.get(TOKEN_KEY).is_none());

        store.set(TOKEN_KEY, "abc").unwrap();
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("abc"));

        store.clear(TOKEN_KEY).unwrap();
        assert!(store.get(TOKEN_KEY).is_none());
    }

    #[test]
    fn empty_token_is_treated_as_absent() {
        let store = MemorySessionStore::with_token("");
        assert!(store.token().is_none());
    }

    #[test]
    fn clearing_missing_key_is_ok() {
        let store = MemorySessionStore::new();
        assert!(store.clear(USER_KEY).is_ok());
    }
}
