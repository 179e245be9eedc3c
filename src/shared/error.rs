//! Shared Error Types
//!
//! Error taxonomy for calls against the backend gateway. Transient
//! failures are logged and never surfaced as blocking UI errors; the
//! variants here exist so each call site can decide which bucket a
//! failure falls into.

use thiserror::Error;

/// Errors produced by backend gateway calls
#[derive(Debug, Error, Clone)]
pub enum ApiError {
    /// The backend answered with a non-success status
    #[error("request failed: {status} - {body}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        body: String,
    },

    /// The request never completed (DNS, connection, timeout)
    #[error("network error: {0}")]
    Network(String),

    /// The response body could not be decoded
    #[error("failed to parse response: {0}")]
    Decode(String),

    /// No session is present for an authenticated call
    #[error("not authenticated")]
    NotAuthenticated,

    /// Could not set up the client-side runtime for the call
    #[error("runtime error: {0}")]
    Runtime(String),
}

impl ApiError {
    /// Create an HTTP error from a status code and body
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Self::Http { status, body: body.into() }
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Short message suitable for an inline banner
    pub fn user_message(&self) -> String {
        match self {
            Self::Http { status: 401, .. } => "Your session expired. Please log in again.".to_string(),
            Self::Http { status: 403, .. } => "You do not have permission for that action.".to_string(),
            Self::Http { status: 404, .. } => "The requested record was not found.".to_string(),
            Self::Http { status, .. } => format!("The server rejected the request ({})", status),
            Self::Network(_) => "Could not reach the server. Check your connection.".to_string(),
            Self::Decode(_) => "The server sent an unexpected response.".to_string(),
            Self::NotAuthenticated => "You are not logged in.".to_string(),
            Self::Runtime(_) => "An internal error occurred.".to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::decode(format!("JSON error: {}", err))
    }
}
