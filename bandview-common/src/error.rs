//! Common error types for Bandview

use thiserror::Error;

/// Common result type for Bandview operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across Bandview crates
#[derive(Error, Debug)]
pub enum Error {
    /// Upstream API request failed (network or HTTP status)
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Upstream payload could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}
