//! # Error normalization at the HTTP boundary
//!
//! Server failures arrive as JSON bodies of varying shape: auth endpoints
//! raise `{"detail": "..."}`, the validation handler answers
//! `{"values": [...], "message": "..."}`, and transport failures have no
//! body at all. [`normalize`] parses the body exactly once and classifies
//! the failure into the closed [`ApiError`] set, so call sites never
//! inspect response payloads themselves; they match on the kind or show
//! [`ApiError::message`].

use serde::Deserialize;
use thiserror::Error;

/// Shown when the server gave no usable message.
pub const FALLBACK_MESSAGE: &str = "Something went wrong. Please try again.";

/// Every failure a call site can see.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ApiError {
    /// The server rejected the request content (400/422). `fields` carries
    /// the server's invalid-field list when it sent one.
    #[error("{message}")]
    Validation { message: String, fields: Vec<String> },
    /// The credential was missing, wrong, or expired (401/403).
    #[error("{0}")]
    Auth(String),
    /// Any other server-side failure.
    #[error("{0}")]
    Server(String),
    /// The request never completed.
    #[error("{0}")]
    Network(String),
}

impl ApiError {
    /// The human-readable message, uniform across kinds.
    pub fn message(&self) -> &str {
        match self {
            ApiError::Validation { message, .. } => message,
            ApiError::Auth(message) | ApiError::Server(message) | ApiError::Network(message) => {
                message
            }
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
    message: Option<String>,
    values: Option<Vec<String>>,
}

/// Classify a non-success response.
///
/// Message precedence: a string `detail`, then `message`, then
/// [`FALLBACK_MESSAGE`]. A structured `detail` (FastAPI sends a list for
/// schema violations) is skipped rather than stringified.
pub fn normalize(status: u16, body: &str) -> ApiError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();

    let message = parsed
        .detail
        .as_ref()
        .and_then(|d| d.as_str())
        .map(str::to_string)
        .or(parsed.message)
        .unwrap_or_else(|| FALLBACK_MESSAGE.to_string());

    match status {
        400 | 422 => ApiError::Validation {
            message,
            fields: parsed.values.unwrap_or_default(),
        },
        401 | 403 => ApiError::Auth(message),
        _ => ApiError::Server(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_string_wins() {
        let err = normalize(401, r#"{"detail": "Invalid email or password"}"#);
        assert_eq!(err, ApiError::Auth("Invalid email or password".to_string()));
        assert_eq!(err.message(), "Invalid email or password");
    }

    #[test]
    fn test_message_when_no_detail() {
        let err = normalize(
            422,
            r#"{"values": ["heart_rate_bpm"], "message": "Please provide valid input values."}"#,
        );
        assert_eq!(
            err,
            ApiError::Validation {
                message: "Please provide valid input values.".to_string(),
                fields: vec!["heart_rate_bpm".to_string()],
            }
        );
    }

    #[test]
    fn test_structured_detail_falls_through() {
        // FastAPI schema errors put a list in `detail`.
        let err = normalize(500, r#"{"detail": [{"loc": ["body"], "msg": "invalid"}]}"#);
        assert_eq!(err, ApiError::Server(FALLBACK_MESSAGE.to_string()));
    }

    #[test]
    fn test_unparseable_body_gets_fallback() {
        let err = normalize(500, "<html>Bad Gateway</html>");
        assert_eq!(err, ApiError::Server(FALLBACK_MESSAGE.to_string()));
    }

    #[test]
    fn test_status_classification() {
        assert!(matches!(normalize(400, "{}"), ApiError::Validation { .. }));
        assert!(matches!(normalize(422, "{}"), ApiError::Validation { .. }));
        assert!(matches!(normalize(401, "{}"), ApiError::Auth(_)));
        assert!(matches!(normalize(403, "{}"), ApiError::Auth(_)));
        assert!(matches!(normalize(404, "{}"), ApiError::Server(_)));
        assert!(matches!(normalize(500, "{}"), ApiError::Server(_)));
    }
}
