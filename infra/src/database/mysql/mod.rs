//! MySQL repository implementations

mod employee_repository_impl;

pub use employee_repository_impl::MySqlEmployeeRepository;
