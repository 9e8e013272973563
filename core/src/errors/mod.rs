//! Domain-specific error types and error handling.

mod types;

pub use types::{TokenError, ValidationError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

impl DomainError {
    /// Not-found error for an employee id
    pub fn employee_not_found(id: &str) -> Self {
        DomainError::NotFound {
            resource: format!("employee {}", id),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
