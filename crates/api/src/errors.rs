//! Error types for the pickup API client.
//!
//! [`ApiError`] is the single error every service operation returns.
//! [`TransportError`] is what an [`crate::HttpTransport`] implementation reports
//! when no HTTP response was obtained at all.
//!
//! ## Message resolution
//!
//! For a non-success response the message carried by [`ApiError::Status`] is
//! resolved in priority order:
//!
//! 1. the `error` string of a JSON error body;
//! 2. [`UNKNOWN_ERROR_MESSAGE`] when the body is not JSON;
//! 3. a call-site prefix followed by the HTTP status text.

use thiserror::Error;

/// Message used when a failed response's body cannot be parsed as JSON.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

// ---------------------------------------------------------------------------
// Transport-level errors
// ---------------------------------------------------------------------------

/// The request never produced an HTTP response (connection refused, DNS
/// failure, TLS failure, malformed request).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Transport failure: {message}")]
pub struct TransportError {
    /// Description reported by the underlying HTTP stack.
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Client errors
// ---------------------------------------------------------------------------

/// Errors returned by [`crate::ApiClient`] and the resource services.
///
/// Errors are never retried or recovered locally; they are handed straight to
/// the caller, which decides how to present them.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP request could not be completed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The backend answered with a non-success status.
    ///
    /// `Display` yields `message` unchanged so it can be shown to the user.
    #[error("{message}")]
    Status {
        /// Numeric HTTP status code.
        status: u16,
        /// Resolved human-readable message.
        message: String,
    },

    /// A success response body did not match the expected shape.
    #[error("Failed to decode response from {path}: {source}")]
    Decode {
        /// Request path whose response failed to decode.
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A request body could not be encoded as JSON.
    #[error("Failed to encode request body for {path}: {source}")]
    Encode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The client configuration is invalid.
    ///
    /// Produced at construction; a client never exists with an invalid config.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration problem.
        message: String,
    },
}

impl ApiError {
    /// Returns the HTTP status code for [`ApiError::Status`] errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Resolves the user-facing message for a failed response.
///
/// `fallback_prefix` is prepended to `status_text` when the body is valid JSON
/// but carries no usable `error` field.
pub fn resolve_error_message(body: &[u8], fallback_prefix: &str, status_text: &str) -> String {
    let parsed: serde_json::Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(_) => return UNKNOWN_ERROR_MESSAGE.to_string(),
    };

    match parsed.get("error").and_then(|e| e.as_str()) {
        Some(message) if !message.is_empty() => message.to_string(),
        _ => format!("{fallback_prefix}: {status_text}"),
    }
}
