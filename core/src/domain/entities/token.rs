//! Token entities for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Lifetime of an access token issued at login (120 seconds)
pub const LOGIN_ACCESS_TOKEN_EXPIRY_SECONDS: i64 = 120;

/// Lifetime of an access token issued from a refresh token (20 minutes)
pub const REFRESHED_ACCESS_TOKEN_EXPIRY_SECONDS: i64 = 20 * 60;

/// Claims structure for JWT payload
///
/// Access tokens always carry `exp`. Refresh tokens never do; their lifetime
/// is governed solely by membership in the refresh token store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Username the token was issued for
    pub username: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl Claims {
    /// Creates new claims for an access token that expires after `ttl_seconds`
    pub fn new_access_token(username: impl Into<String>, ttl_seconds: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(ttl_seconds);

        Self {
            username: username.into(),
            iat: now.timestamp(),
            exp: Some(expiry.timestamp()),
        }
    }

    /// Creates new claims for a refresh token (no expiry)
    pub fn new_refresh_token(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            iat: Utc::now().timestamp(),
            exp: None,
        }
    }

    /// Checks if the claims have expired
    ///
    /// Claims without `exp` never expire.
    pub fn is_expired(&self) -> bool {
        match self.exp {
            Some(exp) => Utc::now().timestamp() >= exp,
            None => false,
        }
    }
}

/// Token pair returned to the client at login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,
}

impl TokenPair {
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}
