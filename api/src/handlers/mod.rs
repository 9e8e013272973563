pub mod error;

pub use error::{handle_domain_error, handle_field_errors, handle_malformed_body, handle_validation_error};
