//! Employee record service module

mod service;

#[cfg(test)]
mod tests;

pub use service::EmployeeService;
