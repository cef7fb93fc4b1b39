//! Common error types for the mood board

use thiserror::Error;

/// Common result type for mood board operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types shared by the mood board crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Third-party lookup or token exchange failed
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}
