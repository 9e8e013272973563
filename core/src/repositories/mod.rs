pub mod employee;
pub mod token;

pub use employee::EmployeeRepository;
pub use token::{InMemoryRefreshTokenStore, RefreshTokenStore};
