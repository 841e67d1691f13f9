//! Error types for the Verdure identification relay.
//!
//! Relay errors split into two kinds the caller can act on: the request was
//! malformed, or one of the upstream providers failed. Both carry enough
//! context to be rendered as a structured JSON body.

use thiserror::Error;

/// Top-level error type for Verdure operations.
#[derive(Error, Debug)]
pub enum VerdureError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Relay processing errors
    #[error("Relay error: {0}")]
    Relay(#[from] RelayError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Errors raised while relaying one identification request.
#[derive(Error, Debug)]
pub enum RelayError {
    /// The inbound upload is missing or malformed
    #[error("{message}")]
    Validation { message: String },

    /// An upstream provider was unreachable, errored, or returned nothing usable
    #[error("{message}: {details}")]
    Upstream {
        message: String,
        details: String,
        status_code: Option<u16>,
    },
}

impl RelayError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn upstream(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
            details: details.into(),
            status_code: None,
        }
    }

    /// The short, caller-facing message (without details).
    pub fn message(&self) -> &str {
        match self {
            RelayError::Validation { message } | RelayError::Upstream { message, .. } => message,
        }
    }

    /// The upstream cause, if any.
    pub fn details(&self) -> Option<&str> {
        match self {
            RelayError::Validation { .. } => None,
            RelayError::Upstream { details, .. } => Some(details),
        }
    }
}

/// Convenience type alias for Verdure results.
pub type Result<T> = std::result::Result<T, VerdureError>;

/// Convenience type alias for relay-specific results.
pub type RelayResult<T> = std::result::Result<T, RelayError>;
