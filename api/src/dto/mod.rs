pub mod auth;
pub mod employee;
pub mod error;

pub use auth::*;
pub use employee::*;
pub use error::{ErrorResponse, ErrorResponseExt, NoDataResponse};
