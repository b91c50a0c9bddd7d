//! Client error types.

use thiserror::Error;

/// Client error type.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request failed (connection, timeout, malformed response).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A value cannot be sent as a single URL path segment.
    #[error("'{0}' cannot be used as a path segment")]
    InvalidPathSegment(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Check if this error came from the network round trip itself.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(e) if !e.is_builder())
    }

    /// Check if this error was caused by the server or key configuration.
    pub fn is_config(&self) -> bool {
        match self {
            Error::Config(_) | Error::InvalidUrl(_) => true,
            Error::Http(e) => e.is_builder(),
            Error::Json(_) | Error::InvalidPathSegment(_) => false,
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;
