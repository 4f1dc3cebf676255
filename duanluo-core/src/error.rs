//! Error types for the core library

use thiserror::Error;

/// Error type for core operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Chapter heading pattern failed to compile
    #[error("Invalid chapter pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Input bytes could not be decoded as text
    #[error("Decode error: {0}")]
    Decode(String),

    /// Malformed event-list document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Infrastructure error (I/O, etc.)
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;
