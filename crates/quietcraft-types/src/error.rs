//! Error types for quietcraft

use thiserror::Error;

/// Which calculator input was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidField {
    Service,
    Weight,
    Distance,
}

impl std::fmt::Display for InvalidField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidField::Service => write!(f, "unknown service"),
            InvalidField::Weight => write!(f, "weight must be positive"),
            InvalidField::Distance => write!(f, "distance must be positive"),
        }
    }
}

/// Quote calculation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuoteError {
    #[error("Invalid input: {0}")]
    InvalidInput(InvalidField),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Quote error: {0}")]
    Quote(#[from] QuoteError),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;
