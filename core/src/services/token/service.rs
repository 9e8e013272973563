//! Main token service implementation

use std::collections::HashSet;

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{Claims, TokenPair};
use crate::errors::{DomainError, TokenError};
use crate::repositories::RefreshTokenStore;

use super::config::TokenServiceConfig;

/// Service issuing, verifying, refreshing and revoking tokens
///
/// Access tokens are stateless and signed with the access secret. Refresh
/// tokens are signed with the refresh secret and are honored only while they
/// remain in the injected [`RefreshTokenStore`].
pub struct TokenService<S: RefreshTokenStore> {
    store: S,
    config: TokenServiceConfig,
    access_encoding_key: EncodingKey,
    access_decoding_key: DecodingKey,
    refresh_encoding_key: EncodingKey,
    refresh_decoding_key: DecodingKey,
    access_validation: Validation,
    refresh_validation: Validation,
}

impl<S: RefreshTokenStore> TokenService<S> {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `store` - Set of currently valid refresh tokens
    /// * `config` - Secrets, algorithm and access token lifetimes
    ///
    /// # Returns
    ///
    /// A new `TokenService`, or `DomainError::Internal` when a secret is empty
    /// or the algorithm is not an HMAC variant
    pub fn new(store: S, config: TokenServiceConfig) -> Result<Self, DomainError> {
        if !matches!(config.algorithm, Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512) {
            return Err(DomainError::Internal {
                message: format!("Unsupported JWT algorithm: {:?}", config.algorithm),
            });
        }
        if config.access_secret.is_empty() || config.refresh_secret.is_empty() {
            return Err(DomainError::Internal {
                message: "Token signing secrets must not be empty".to_string(),
            });
        }

        let mut access_validation = Validation::new(config.algorithm);
        access_validation.validate_exp = true;
        access_validation.leeway = 0;

        // Refresh tokens carry no exp claim
        let mut refresh_validation = Validation::new(config.algorithm);
        refresh_validation.validate_exp = false;
        refresh_validation.required_spec_claims = HashSet::new();

        Ok(Self {
            store,
            access_encoding_key: EncodingKey::from_secret(config.access_secret.as_bytes()),
            access_decoding_key: DecodingKey::from_secret(config.access_secret.as_bytes()),
            refresh_encoding_key: EncodingKey::from_secret(config.refresh_secret.as_bytes()),
            refresh_decoding_key: DecodingKey::from_secret(config.refresh_secret.as_bytes()),
            access_validation,
            refresh_validation,
            config,
        })
    }

    /// Returns the active configuration
    pub fn config(&self) -> &TokenServiceConfig {
        &self.config
    }

    /// Issues an access/refresh token pair for `username`
    ///
    /// The refresh token is registered in the store before the pair is
    /// returned.
    pub async fn issue_tokens(&self, username: &str) -> Result<TokenPair, DomainError> {
        let access_token =
            self.generate_access_token(username, self.config.login_access_ttl_seconds)?;

        let claims = Claims::new_refresh_token(username);
        let refresh_token = encode(&self.header(), &claims, &self.refresh_encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))?;

        self.store.insert(&refresh_token).await?;
        tracing::debug!(username, "issued token pair");

        Ok(TokenPair::new(access_token, refresh_token))
    }

    /// Signs an access token for `username` valid for `ttl_seconds`
    fn generate_access_token(&self, username: &str, ttl_seconds: i64) -> Result<String, DomainError> {
        let claims = Claims::new_access_token(username, ttl_seconds);
        encode(&self.header(), &claims, &self.access_encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    fn header(&self) -> Header {
        Header::new(self.config.algorithm)
    }

    /// Verifies an access token and returns the claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - Signature valid under the access secret and not expired
    /// * `Err(DomainError::Token(_))` - Token is invalid, expired, or malformed
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, DomainError> {
        decode::<Claims>(token, &self.access_decoding_key, &self.access_validation)
            .map(|data| data.claims)
            .map_err(|e| DomainError::Token(TokenError::from_jwt(&e)))
    }

    /// Verifies a refresh token and returns its claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - Token is in the store and its signature is valid
    /// * `Err(DomainError::Unauthorized)` - No token supplied
    /// * `Err(DomainError::Token(_))` - Token unknown, revoked, or invalid
    pub async fn verify_refresh_token(&self, token: &str) -> Result<Claims, DomainError> {
        if token.is_empty() {
            return Err(DomainError::Unauthorized);
        }

        if !self.store.contains(token).await? {
            tracing::warn!("refresh rejected: token not in the valid set");
            return Err(DomainError::Token(TokenError::InvalidRefreshToken));
        }

        decode::<Claims>(token, &self.refresh_decoding_key, &self.refresh_validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::warn!(error = %e, "refresh rejected: verification failed");
                DomainError::Token(TokenError::from_jwt(&e))
            })
    }

    /// Issues a fresh access token from a refresh token
    ///
    /// The new token is bound to the username in the verified refresh token.
    /// `claimed_username`, when supplied, is only compared for diagnostics.
    /// The refresh token itself stays valid.
    pub async fn refresh_access_token(
        &self,
        refresh_token: &str,
        claimed_username: Option<&str>,
    ) -> Result<String, DomainError> {
        let claims = self.verify_refresh_token(refresh_token).await?;

        if let Some(claimed) = claimed_username {
            if claimed != claims.username {
                tracing::warn!(
                    claimed,
                    verified = %claims.username,
                    "refresh request username differs from token"
                );
            }
        }

        self.generate_access_token(&claims.username, self.config.refreshed_access_ttl_seconds)
    }

    /// Removes a refresh token from the valid set
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - Token was present and is now revoked
    /// * `Ok(false)` - Token was not present; nothing changed
    pub async fn revoke_refresh_token(&self, token: &str) -> Result<bool, DomainError> {
        let removed = self.store.remove(token).await?;
        tracing::debug!(removed, "refresh token revocation");
        Ok(removed)
    }

    /// Whether `token` is currently in the valid refresh token set
    pub async fn is_refresh_token_active(&self, token: &str) -> Result<bool, DomainError> {
        self.store.contains(token).await
    }
}
