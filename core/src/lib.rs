//! # Employee Service Core
//!
//! Core business logic and domain layer for the employee service.
//! This crate contains domain entities, the token lifecycle and record
//! services, repository interfaces, and error types. It has no knowledge of
//! HTTP or of any particular database.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{Claims, Employee, EmployeeData, EmployeeUpdate, NewEmployee, TokenPair};
pub use errors::{DomainError, DomainResult, TokenError, ValidationError};
pub use repositories::{EmployeeRepository, InMemoryRefreshTokenStore, RefreshTokenStore};
pub use services::{EmployeeService, TokenService, TokenServiceConfig};
