//! HTTP route handlers
//!
//! - `auth` - login, token refresh and logout
//! - `employee` - employee record CRUD behind the access token gate

pub mod auth;
pub mod employee;
