//! Error types for the portal.

use thiserror::Error;

/// Common error type for portal operations.
#[derive(Error, Debug)]
pub enum PortalError {
    /// Database error.
    ///
    /// Wraps any persistence failure; sqlx errors are converted
    /// automatically. Surfaced to web clients as a 500.
    #[error("database error: {0}")]
    Database(String),

    /// Username already taken (unique constraint on `users.username`).
    #[error("username already taken")]
    DuplicateUsername,

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<sqlx::Error> for PortalError {
    fn from(e: sqlx::Error) -> Self {
        PortalError::Database(e.to_string())
    }
}

/// Result type alias for portal operations.
pub type Result<T> = std::result::Result<T, PortalError>;
