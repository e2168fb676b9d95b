//! Error types for the blogqa client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for every blogqa library crate.
///
/// Each variant maps to one failure class of the client: the service
/// answered with a non-success status, the request never completed, a body
/// could not be decoded, or local configuration/input was invalid.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlogQaError {
    /// The service responded with a non-success HTTP status.
    ///
    /// `detail` is the server-provided message when one could be extracted,
    /// otherwise `HTTP <status>`.
    #[error("{detail}")]
    Request { status: u16, detail: String },

    /// Connection-level failure (refused, DNS, reset, ...)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// IO error (config file access)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Rejected client-side input
    #[error("Validation error: {0}")]
    Validation(String),
}

impl BlogQaError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Request error carrying an explicit detail message.
    pub fn request(status: u16, detail: impl Into<String>) -> Self {
        Self::Request {
            status,
            detail: detail.into(),
        }
    }

    /// Creates a Request error with the generic `HTTP <status>` detail.
    pub fn http_status(status: u16) -> Self {
        Self::Request {
            status,
            detail: format!("HTTP {status}"),
        }
    }

    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates a JSON Serialization error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a non-success HTTP response
    pub fn is_request(&self) -> bool {
        matches!(self, Self::Request { .. })
    }

    /// Check if this is a transport error
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// HTTP status of a Request error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text suitable for an inline error line.
    ///
    /// Returns `None` when the error carries no message at all, so callers
    /// can substitute a localized fallback.
    pub fn user_message(&self) -> Option<String> {
        let message = self.to_string();
        if message.trim().is_empty() {
            None
        } else {
            Some(message)
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for BlogQaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for BlogQaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for BlogQaError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, BlogQaError>`.
pub type Result<T> = std::result::Result<T, BlogQaError>;
