//! # Infrastructure Layer
//!
//! Concrete persistence for the employee service. The domain layer only
//! knows the `EmployeeRepository` trait; this crate provides the two stores
//! behind it.
//!
//! ## Architecture
//!
//! - **Memory**: `InMemoryEmployeeRepository`, the default store
//! - **MySQL**: `MySqlEmployeeRepository` and its connection pool using SQLx
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

// Re-export core error types for convenience
pub use emp_core::errors::{DomainError, DomainResult};

/// Database module - in-memory and MySQL employee stores
pub mod database;

pub use database::InMemoryEmployeeRepository;
#[cfg(feature = "mysql")]
pub use database::{DatabasePool, MySqlEmployeeRepository};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[cfg(feature = "mysql")]
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        DomainError::Internal {
            message: err.to_string(),
        }
    }
}
