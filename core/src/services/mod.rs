//! Business services containing domain logic and use cases.

pub mod employee;
pub mod token;

// Re-export commonly used types
pub use employee::EmployeeService;
pub use token::{TokenService, TokenServiceConfig};
