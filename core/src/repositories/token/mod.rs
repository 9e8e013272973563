//! Refresh token store module.

mod r#trait;
pub use r#trait::RefreshTokenStore;

mod memory;
pub use memory::InMemoryRefreshTokenStore;
