//! Error types for job routing
//!
//! Routing itself is total: a name that matches no keyword is reported through
//! an `Unmatched` notice, never through this module. These errors cover the
//! surfaces around dispatch: configuration loading, input reading and notice output.

use thiserror::Error;

/// Main error type for job router operations
#[derive(Debug, Error)]
pub enum RouterError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] crate::config::ConfigError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for job router operations
pub type RouterResult<T> = Result<T, RouterError>;
