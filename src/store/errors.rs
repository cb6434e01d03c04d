use thiserror::Error;

/// Errors surfaced while establishing the store connection. Once
/// connected, commands are retried internally and do not return errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Redis error: {0}")]
    RedisError(#[from] redis::RedisError),
}
