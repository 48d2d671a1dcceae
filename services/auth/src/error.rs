//! Custom error types for the authentication service

use common::error::StoreError;
use thiserror::Error;

/// Custom error type for the authentication service
#[derive(Error, Debug)]
pub enum AuthError {
    /// Email and password do not match the account for the requested role
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The persisted session could not be read or written
    #[error("Session store error: {0}")]
    Store(#[from] StoreError),
}

/// Type alias for authentication results
pub type AuthResult<T> = Result<T, AuthError>;
