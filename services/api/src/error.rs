//! Custom error types for the API service

use auth::AuthError;
use common::error::StoreError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::validation::ValidationErrors;

/// Custom error type for the API service
#[derive(Error, Debug)]
pub enum ApiError {
    /// No record with this id in the collection
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Authentication failure
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// A form failed validation before reaching a repository
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// Store error
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn hotel_not_found(id: &str) -> Self {
        ApiError::NotFound {
            entity: "Hotel",
            id: id.to_string(),
        }
    }

    pub fn booking_not_found(id: &str) -> Self {
        ApiError::NotFound {
            entity: "Booking",
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }

    /// Message suitable for showing to the user
    pub fn user_message(&self) -> String {
        match self {
            ApiError::NotFound { entity, .. } => format!("{} not found", entity),
            ApiError::Auth(AuthError::InvalidCredentials) => {
                "Login failed. Please check your credentials.".to_string()
            }
            ApiError::Validation(errors) => errors.to_string(),
            ApiError::Auth(AuthError::Store(_)) | ApiError::Store(_) => {
                "An unexpected error occurred".to_string()
            }
        }
    }
}

/// User-facing notice for a failed action
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorNotice {
    pub error: bool,
    pub message: String,
}

/// Log a failed action and turn it into a notice for the user
pub fn report_error(err: &ApiError) -> ErrorNotice {
    error!("API error: {}", err);
    ErrorNotice {
        error: true,
        message: err.user_message(),
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
