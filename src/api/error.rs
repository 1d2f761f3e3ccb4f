//! Error types for API requests.

use thiserror::Error;

pub const UNAUTHORIZED: u16 = 401;

/// Errors returned by [`ApiClient`](super::ApiClient) calls.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The HTTP client could not be constructed.
    #[error("HTTP client setup failed: {0}")]
    Setup(#[source] reqwest::Error),

    /// Request never produced a response (DNS, refused connection, reset).
    #[error("Request to '{path}' failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status.
    #[error("Server error {status}: {}", message.as_deref().unwrap_or("no message"))]
    Status {
        status: u16,
        /// The payload's `message` field, when present and non-empty.
        message: Option<String>,
    },

    /// Request body could not be serialized.
    #[error("Failed to encode request body for '{path}': {source}")]
    Encode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Success response whose payload does not match the expected shape.
    #[error("Unexpected response payload from '{path}': {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl RequestError {
    /// HTTP status reported by the server, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Human-readable message carried by the error payload.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            RequestError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(UNAUTHORIZED)
    }

    /// Message to show the user, with `fallback` when the server gave none.
    pub fn display_message<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.server_message().unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_accessors() {
        let err = RequestError::Status {
            status: 422,
            message: Some("الاسم مطلوب".to_string()),
        };
        assert_eq!(err.status(), Some(422));
        assert_eq!(err.server_message(), Some("الاسم مطلوب"));
        assert!(!err.is_unauthorized());
        assert_eq!(err.display_message("fallback"), "الاسم مطلوب");
    }

    #[test]
    fn test_missing_message_uses_fallback() {
        let err = RequestError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(err.display_message("حدث خطأ ما"), "حدث خطأ ما");
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_unauthorized_detection() {
        let err = RequestError::Status {
            status: UNAUTHORIZED,
            message: None,
        };
        assert!(err.is_unauthorized());
    }
}
