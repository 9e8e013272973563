//! Domain entities representing core business objects.

pub mod employee;
pub mod token;

// Re-export commonly used types
pub use employee::{normalize_name, Employee, EmployeeData, EmployeeUpdate, NewEmployee};
pub use token::{
    Claims, TokenPair, LOGIN_ACCESS_TOKEN_EXPIRY_SECONDS, REFRESHED_ACCESS_TOKEN_EXPIRY_SECONDS,
};
