//! Configuration for the token service

use jsonwebtoken::Algorithm;
use std::str::FromStr;

use emp_shared::config::JwtConfig;

use crate::domain::entities::token::{
    LOGIN_ACCESS_TOKEN_EXPIRY_SECONDS, REFRESHED_ACCESS_TOKEN_EXPIRY_SECONDS,
};
use crate::errors::DomainError;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Access token signing secret
    pub access_secret: String,
    /// Refresh token signing secret
    pub refresh_secret: String,
    /// JWT signing algorithm (HMAC family only)
    pub algorithm: Algorithm,
    /// Lifetime of access tokens issued at login, in seconds
    pub login_access_ttl_seconds: i64,
    /// Lifetime of access tokens issued from a refresh token, in seconds
    pub refreshed_access_ttl_seconds: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            access_secret: "development-access-secret".to_string(),
            refresh_secret: "development-refresh-secret".to_string(),
            algorithm: Algorithm::HS256,
            login_access_ttl_seconds: LOGIN_ACCESS_TOKEN_EXPIRY_SECONDS,
            refreshed_access_ttl_seconds: REFRESHED_ACCESS_TOKEN_EXPIRY_SECONDS,
        }
    }
}

impl TokenServiceConfig {
    /// Creates a configuration with the given secrets and default lifetimes
    pub fn with_secrets(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
            ..Default::default()
        }
    }

    /// Builds the service configuration from the shared JWT settings
    pub fn from_jwt_config(jwt: &JwtConfig) -> Result<Self, DomainError> {
        let algorithm = Algorithm::from_str(&jwt.algorithm).map_err(|_| DomainError::Internal {
            message: format!("Unknown JWT algorithm: {}", jwt.algorithm),
        })?;

        Ok(Self {
            access_secret: jwt.access_secret.clone(),
            refresh_secret: jwt.refresh_secret.clone(),
            algorithm,
            login_access_ttl_seconds: jwt.access_token_expiry,
            refreshed_access_ttl_seconds: jwt.refreshed_access_token_expiry,
        })
    }
}
