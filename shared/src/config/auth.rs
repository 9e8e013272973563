//! Authentication configuration

use serde::{Deserialize, Serialize};

/// Placeholder secret used when `ACCESS_TOKEN_SECRET` is not set
pub const DEFAULT_ACCESS_TOKEN_SECRET: &str = "access-secret-change-in-production";

/// Placeholder secret used when `REFRESH_TOKEN_SECRET` is not set
pub const DEFAULT_REFRESH_TOKEN_SECRET: &str = "refresh-secret-change-in-production";

/// JWT signing configuration
///
/// Access tokens and refresh tokens are signed with distinct secrets. Access
/// tokens minted at login and access tokens minted from a refresh token have
/// separately tunable lifetimes.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret used to sign and verify access tokens
    pub access_secret: String,

    /// Secret used to sign and verify refresh tokens
    pub refresh_secret: String,

    /// Lifetime in seconds of an access token issued at login
    pub access_token_expiry: i64,

    /// Lifetime in seconds of an access token issued from a refresh token
    pub refreshed_access_token_expiry: i64,

    /// Algorithm for JWT signing (default: HS256)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            access_secret: String::from(DEFAULT_ACCESS_TOKEN_SECRET),
            refresh_secret: String::from(DEFAULT_REFRESH_TOKEN_SECRET),
            access_token_expiry: 120,             // 2 minutes
            refreshed_access_token_expiry: 1200,  // 20 minutes
            algorithm: default_algorithm(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with both signing secrets
    pub fn new(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
            ..Default::default()
        }
    }

    /// Set the login access token expiry in seconds
    pub fn with_access_expiry_seconds(mut self, seconds: i64) -> Self {
        self.access_token_expiry = seconds;
        self
    }

    /// Set the refreshed access token expiry in minutes
    pub fn with_refreshed_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.refreshed_access_token_expiry = minutes * 60;
        self
    }

    /// Check if either secret is still the built-in placeholder
    pub fn is_using_default_secret(&self) -> bool {
        self.access_secret == DEFAULT_ACCESS_TOKEN_SECRET
            || self.refresh_secret == DEFAULT_REFRESH_TOKEN_SECRET
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = JwtConfig::default();

        let access_secret = std::env::var("ACCESS_TOKEN_SECRET")
            .unwrap_or(defaults.access_secret);
        let refresh_secret = std::env::var("REFRESH_TOKEN_SECRET")
            .unwrap_or(defaults.refresh_secret);
        let access_token_expiry = std::env::var("JWT_ACCESS_TOKEN_EXPIRY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.access_token_expiry);
        let refreshed_access_token_expiry = std::env::var("JWT_REFRESH_ACCESS_TOKEN_EXPIRY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.refreshed_access_token_expiry);

        Self {
            jwt: JwtConfig {
                access_secret,
                refresh_secret,
                access_token_expiry,
                refreshed_access_token_expiry,
                algorithm: default_algorithm(),
            },
        }
    }
}

fn default_algorithm() -> String {
    String::from("HS256")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_default() {
        let config = JwtConfig::default();
        assert_eq!(config.access_token_expiry, 120);
        assert_eq!(config.refreshed_access_token_expiry, 1200);
        assert_eq!(config.algorithm, "HS256");
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_jwt_config_builder() {
        let config = JwtConfig::new("access", "refresh")
            .with_access_expiry_seconds(60)
            .with_refreshed_access_expiry_minutes(30);

        assert_eq!(config.access_token_expiry, 60);
        assert_eq!(config.refreshed_access_token_expiry, 1800);
        assert!(!config.is_using_default_secret());
    }

    #[test]
    fn test_one_default_secret_is_still_flagged() {
        let config = JwtConfig::new("access", DEFAULT_REFRESH_TOKEN_SECRET);
        assert!(config.is_using_default_secret());
    }
}
