//! Custom error types for the common library
//!
//! This module defines the errors raised by the key-value store backends and
//! the JSON collection adapter layered on top of them.

use redis::RedisError;
use thiserror::Error;

/// Custom error type for key-value store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Error occurred while connecting to the Redis backend
    #[error("Store connection error: {0}")]
    Connection(#[source] RedisError),

    /// Error occurred while executing a Redis command
    #[error("Store command error: {0}")]
    Command(#[source] RedisError),

    /// Error occurred while reading or writing the file backend
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored value could not be encoded or decoded as JSON
    #[error("Store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Store configuration error: {0}")]
    Configuration(String),
}

/// Type alias for Result with StoreError
pub type StoreResult<T> = Result<T, StoreError>;
