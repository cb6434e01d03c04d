use std::io;
use thiserror::Error;

/// Why a single tracker query yielded no result.
///
/// The scheduler treats every variant the same way (penalty + endpoint
/// removal); the split exists for logging and statistics.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Network error: {0}")]
    Network(#[from] io::Error),

    #[error("Query deadline exceeded")]
    Timeout,

    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Unsupported tracker scheme: {0}")]
    UnsupportedScheme(String),
}

impl QueryError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, QueryError::Timeout)
    }
}
