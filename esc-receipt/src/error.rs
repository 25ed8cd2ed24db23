//! Error types for the receipt library

use thiserror::Error;

/// Receipt printing error types
#[derive(Debug, Error)]
pub enum PrintError {
    /// IO error while writing to the device
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A hex command string contained a token that is not a byte
    #[error("Invalid hex token: {0}")]
    InvalidHex(String),

    /// Invalid print configuration
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Failure reported by a caller-provided sink
    #[error("Sink error: {0}")]
    Sink(String),
}

/// Result type for receipt operations
pub type PrintResult<T> = Result<T, PrintError>;
