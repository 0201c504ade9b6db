//! Unified error types for ssl-scan-watch

use thiserror::Error;

/// Main error type for ssl-scan-watch operations
#[derive(Error, Debug)]
pub enum ScanWatchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Assessment API error: {0}")]
    Api(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid domain: {0}")]
    InvalidDomain(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for ScanWatchError {
    fn from(err: serde_json::Error) -> Self {
        ScanWatchError::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ScanWatchError>;
