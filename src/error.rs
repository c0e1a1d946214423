//! Error types and handling for Chargelink
//!
//! This module defines the error types used throughout the library,
//! providing consistent error handling and reporting. Callers never need to
//! inspect raw transport internals: every failure carries a human-readable
//! message.

use thiserror::Error;

/// Result type alias for Chargelink operations
pub type Result<T> = std::result::Result<T, ChargelinkError>;

/// Main error type for Chargelink
#[derive(Debug, Error)]
pub enum ChargelinkError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Network/HTTP failures, normalized to a single message
    #[error("Network error: {message}")]
    Network { message: String },

    /// Remote API rejections (non-2xx with a server-provided message)
    #[error("API error: {message}")]
    Api { message: String },

    /// Authentication/authorization failures (HTTP 401)
    #[error("Authentication error: {message}")]
    Auth { message: String },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// File I/O errors
    #[error("I/O error: {message}")]
    Io { message: String },

    /// Validation errors
    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    /// Generic errors with context
    #[error("Error: {message}")]
    Generic { message: String },
}

impl ChargelinkError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        ChargelinkError::Config {
            message: message.into(),
        }
    }

    /// Create a new network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        ChargelinkError::Network {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        ChargelinkError::Api {
            message: message.into(),
        }
    }

    /// Create a new auth error
    pub fn auth<S: Into<String>>(message: S) -> Self {
        ChargelinkError::Auth {
            message: message.into(),
        }
    }

    /// Create a new I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        ChargelinkError::Io {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(field: S, message: S) -> Self {
        ChargelinkError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new generic error
    pub fn generic<S: Into<String>>(message: S) -> Self {
        ChargelinkError::Generic {
            message: message.into(),
        }
    }

    /// The normalized human-readable message, without the variant prefix
    pub fn message(&self) -> &str {
        match self {
            ChargelinkError::Config { message }
            | ChargelinkError::Network { message }
            | ChargelinkError::Api { message }
            | ChargelinkError::Auth { message }
            | ChargelinkError::Serialization { message }
            | ChargelinkError::Io { message }
            | ChargelinkError::Generic { message } => message,
            ChargelinkError::Validation { message, .. } => message,
        }
    }
}

impl From<std::io::Error> for ChargelinkError {
    fn from(err: std::io::Error) -> Self {
        ChargelinkError::io(err.to_string())
    }
}

impl From<serde_yaml::Error> for ChargelinkError {
    fn from(err: serde_yaml::Error) -> Self {
        ChargelinkError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ChargelinkError {
    fn from(err: serde_json::Error) -> Self {
        ChargelinkError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for ChargelinkError {
    fn from(err: reqwest::Error) -> Self {
        ChargelinkError::network(err.to_string())
    }
}
