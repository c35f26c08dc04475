//! Error Types

use thiserror::Error;

/// Failure of a request to the page's own address
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server answered with status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for RequestError {
    fn from(err: serde_json::Error) -> Self {
        RequestError::Malformed(err.to_string())
    }
}

/// Page configuration block could not be read
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration element #{0} not found")]
    Missing(String),
    #[error("invalid configuration: {0}")]
    Invalid(#[from] serde_json::Error),
}
