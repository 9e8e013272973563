//! Token lifecycle route handlers
//!
//! - Login issuing an access/refresh pair
//! - Access token refresh
//! - Logout revoking a refresh token

pub mod login;
pub mod logout;
pub mod refresh;

pub use login::login;
pub use logout::logout;
pub use refresh::refresh;
