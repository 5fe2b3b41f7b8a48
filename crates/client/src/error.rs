//! Error types for the PokéAPI client.

use thiserror::Error;

/// Errors that can occur when using the PokéAPI client.
#[derive(Debug, Error)]
pub enum Error {
    /// Connection error (network failure, DNS resolution, etc.).
    #[error("connection error: {0}")]
    Connection(String),

    /// The primary resource lookup returned a non-success status.
    ///
    /// Carries the query exactly as the user submitted it.
    #[error("No Pokemon found for \"{query}\"")]
    NotFound {
        /// Submitted query.
        query: String,
        /// HTTP status code.
        status: u16,
    },

    /// HTTP error with status code.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Error message.
        message: String,
    },

    /// Response deserialization error.
    #[error("failed to deserialize response: {0}")]
    Deserialization(String),

    /// Client configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// Returns `true` if this is a connection error.
    pub fn is_connection_error(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Returns `true` if the primary resource did not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns the HTTP status code, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { status, .. } | Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
