//! In-process implementation of RefreshTokenStore

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::DomainError;

use super::r#trait::RefreshTokenStore;

/// Refresh token set held in process memory
///
/// Cloning shares the underlying set. Contents are lost on restart.
#[derive(Clone, Default)]
pub struct InMemoryRefreshTokenStore {
    tokens: Arc<RwLock<HashSet<String>>>,
}

impl InMemoryRefreshTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RefreshTokenStore for InMemoryRefreshTokenStore {
    async fn insert(&self, token: &str) -> Result<(), DomainError> {
        self.tokens.write().await.insert(token.to_string());
        Ok(())
    }

    async fn contains(&self, token: &str) -> Result<bool, DomainError> {
        Ok(self.tokens.read().await.contains(token))
    }

    async fn remove(&self, token: &str) -> Result<bool, DomainError> {
        Ok(self.tokens.write().await.remove(token))
    }

    async fn len(&self) -> Result<usize, DomainError> {
        Ok(self.tokens.read().await.len())
    }
}
