//! Core error types for Spectrum

use thiserror::Error;

/// Main error type for Spectrum operations
#[derive(Error, Debug)]
pub enum SpectrumError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Parsing error: {0}")]
    Parse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Result type alias for Spectrum operations
pub type SpectrumResult<T> = Result<T, SpectrumError>;

// Conversion implementations for common error types
impl From<serde_json::Error> for SpectrumError {
    fn from(err: serde_json::Error) -> Self {
        SpectrumError::Serialization(err.to_string())
    }
}

impl From<anyhow::Error> for SpectrumError {
    fn from(err: anyhow::Error) -> Self {
        SpectrumError::Other(err.to_string())
    }
}
