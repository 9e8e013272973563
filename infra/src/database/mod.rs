//! Database module - employee store implementations
//!
//! This module provides:
//! - An in-process store used when no database is configured
//! - Connection pool management for MySQL
//! - The MySQL repository implementation

mod memory;

#[cfg(feature = "mysql")]
pub mod connection;
#[cfg(feature = "mysql")]
pub mod mysql;

#[cfg(all(test, feature = "mysql"))]
mod tests;

// Re-export commonly used types
pub use memory::InMemoryEmployeeRepository;
#[cfg(feature = "mysql")]
pub use connection::{DatabasePool, PoolStatistics};
#[cfg(feature = "mysql")]
pub use mysql::MySqlEmployeeRepository;
