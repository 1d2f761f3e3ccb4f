//! Request/response interceptors run by [`ApiClient`](super::ApiClient).
//!
//! ```text
//! on_request ──→ send ──┬─→ on_response ──→ Ok(payload)
//!                       └─→ on_error ─────→ Err(error)
//! ```
//!
//! Interceptors run in registration order and only observe; the outcome is
//! always handed back to the caller.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Method;
use serde_json::Value;

use super::error::RequestError;
use crate::notify::Notifier;
use crate::session::{SessionGuard, SessionStore};

/// What an interceptor knows about the request in flight.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: String,
    pub method: Method,
    pub path: String,
}

impl RequestContext {
    /// Reads never produce notifications.
    pub fn is_read(&self) -> bool {
        self.method == Method::GET
    }
}

pub trait Interceptor: Send + Sync {
    fn on_request(&self, _ctx: &RequestContext, _headers: &mut HeaderMap) {}

    fn on_response(&self, _ctx: &RequestContext, _payload: &Value) {}

    fn on_error(&self, _ctx: &RequestContext, _error: &RequestError) {}
}

/// Attaches the stored session token as `Authorization`, verbatim.
pub struct AuthInterceptor {
    store: Arc<dyn SessionStore>,
}

impl AuthInterceptor {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }
}

impl Interceptor for AuthInterceptor {
    fn on_request(&self, ctx: &RequestContext, headers: &mut HeaderMap) {
        let Some(token) = self.store.token() else {
            return;
        };
        match HeaderValue::from_str(token.expose()) {
            Ok(mut value) => {
                value.set_sensitive(true);
                headers.insert(AUTHORIZATION, value);
            }
            Err(_) => {
                tracing::warn!(request_id = %ctx.request_id, "stored token is not a valid header value, sending without it");
            }
        }
    }
}

/// Surfaces `message` of writes as success, failed writes as error.
pub struct NotifyInterceptor {
    notifier: Arc<dyn Notifier>,
    fallback_message: String,
}

impl NotifyInterceptor {
    pub fn new(notifier: Arc<dyn Notifier>, fallback_message: impl Into<String>) -> Self {
        Self {
            notifier,
            fallback_message: fallback_message.into(),
        }
    }
}

impl Interceptor for NotifyInterceptor {
    fn on_response(&self, ctx: &RequestContext, payload: &Value) {
        if ctx.is_read() {
            return;
        }
        if let Some(message) = payload_message(payload) {
            self.notifier.success(message);
        }
    }

    fn on_error(&self, ctx: &RequestContext, error: &RequestError) {
        if ctx.is_read() {
            return;
        }
        self.notifier
            .error(error.display_message(&self.fallback_message));
    }
}

impl Interceptor for SessionGuard {
    fn on_error(&self, ctx: &RequestContext, error: &RequestError) {
        if error.is_unauthorized() {
            tracing::warn!(request_id = %ctx.request_id, method = %ctx.method, path = %ctx.path, "unauthorized response");
            self.invalidate();
        }
    }
}

/// Non-empty string `message` field of a JSON object payload.
pub fn payload_message(payload: &Value) -> Option<&str> {
    payload
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
}
