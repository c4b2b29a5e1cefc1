//! Error types for the scene viewer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for every scene viewer crate.
///
/// All failures are scoped to the page: none of these variants is fatal to
/// the hosting application.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ViewerError {
    /// The scene read failed. The page recovers by redirecting to the
    /// generic error destination.
    #[error("Failed to load scene '{scene}': {message}")]
    LoadFailure { scene: String, message: String },

    /// A theme update or message deletion failed.
    #[error("Write failed ({operation}): {message}")]
    WriteFailure { operation: String, message: String },

    /// Network level failure (connection, timeout, TLS).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("Unexpected status {code}: {message}")]
    Status { code: u16, message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The visitor attempted an owner-only action.
    #[error("Not permitted: {0}")]
    NotPermitted(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ViewerError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a LoadFailure error
    pub fn load_failure(scene: impl Into<String>, message: impl Into<String>) -> Self {
        Self::LoadFailure {
            scene: scene.into(),
            message: message.into(),
        }
    }

    /// Creates a WriteFailure error
    pub fn write_failure(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::WriteFailure {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a NotPermitted error
    pub fn not_permitted(message: impl Into<String>) -> Self {
        Self::NotPermitted(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn is_load_failure(&self) -> bool {
        matches!(self, Self::LoadFailure { .. })
    }

    pub fn is_write_failure(&self) -> bool {
        matches!(self, Self::WriteFailure { .. })
    }

    pub fn is_not_permitted(&self) -> bool {
        matches!(self, Self::NotPermitted(_))
    }

    /// Check if the server reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { code: 404, .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for ViewerError {
    fn from(err: std::io::Error) -> Self {
        Self::Internal(format!("{} (kind: {:?})", err, err.kind()))
    }
}

impl From<serde_json::Error> for ViewerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for ViewerError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, ViewerError>`.
pub type Result<T> = std::result::Result<T, ViewerError>;
