//! Forced logout on unauthorized responses.

use std::sync::Arc;

use parking_lot::Mutex;

use super::store::{SessionStore, TOKEN_KEY, USER_KEY};

/// Performs a full navigation away from the current screen.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Navigator that only remembers where it was sent.
#[derive(Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visited.lock().push(path.to_string());
    }
}

/// Authenticated → Unauthenticated, once per unauthorized response.
///
/// There is no refresh or retry: the stored credentials are dropped and the
/// user is sent to the sign-in boundary.
#[derive(Clone)]
pub struct SessionGuard {
    store: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
    signin_path: String,
}

impl SessionGuard {
    pub fn new(
        store: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
        signin_path: impl Into<String>,
    ) -> Self {
        Self {
            store,
            navigator,
            signin_path: signin_path.into(),
        }
    }

    /// Erase `token` and `user`, then navigate to the sign-in path.
    ///
    /// Storage failures are logged; navigation happens regardless.
    pub fn invalidate(&self) {
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(e) = self.store.clear(key) {
                tracing::error!(key, error = %e, "failed to clear session key");
            }
        }
        tracing::info!(signin_path = %self.signin_path, "session invalidated");
        self.navigator.navigate(&self.signin_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;

    #[test]
    fn invalidate_clears_both_keys_and_navigates() {
        let store = Arc::new(MemorySessionStore::with_token("t0k"));
        store.set(USER_KEY, r#"{"name":"farmer"}"#).unwrap();
        let navigator = Arc::new(RecordingNavigator::new());

        let guard = SessionGuard::new(store.clone(), navigator.clone(), "/signin");
        guard.invalidate();

        assert!(store.get(TOKEN_KEY).is_none());
        assert!(store.get(USER_KEY).is_none());
        assert_eq!(navigator.visited(), vec!["/signin".to_string()]);
    }
}
