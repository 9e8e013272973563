//! Refresh token store trait defining the set of currently honored refresh tokens.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Set of refresh tokens the service currently honors
///
/// A token enters the set when it is issued and leaves it only through
/// [`RefreshTokenStore::remove`]. Implementations must make a removal visible
/// to every subsequent [`RefreshTokenStore::contains`] call.
///
/// # Example
/// ```no_run
/// # use emp_core::repositories::{InMemoryRefreshTokenStore, RefreshTokenStore};
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = InMemoryRefreshTokenStore::new();
/// store.insert("token").await?;
/// assert!(store.contains("token").await?);
///
/// store.remove("token").await?;
/// assert!(!store.contains("token").await?);
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait RefreshTokenStore: Send + Sync {
    /// Add a refresh token to the set
    ///
    /// Inserting a token that is already present is not an error.
    async fn insert(&self, token: &str) -> Result<(), DomainError>;

    /// Check whether a refresh token is in the set
    async fn contains(&self, token: &str) -> Result<bool, DomainError>;

    /// Remove a refresh token from the set
    ///
    /// # Returns
    /// * `Ok(true)` - The token was present and has been removed
    /// * `Ok(false)` - The token was not present
    async fn remove(&self, token: &str) -> Result<bool, DomainError>;

    /// Number of tokens currently in the set
    async fn len(&self) -> Result<usize, DomainError>;
}
