//! Domain-specific error types for token handling and record validation
//!
//! Messages here are for logs and error bodies; the HTTP status mapping lives
//! in the presentation layer.

use thiserror::Error;

/// Token-related errors
///
/// Every variant except `TokenGenerationFailed` describes a credential that
/// was presented but cannot be honored.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token revoked")]
    TokenRevoked,

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

impl TokenError {
    /// Maps a `jsonwebtoken` failure onto the domain taxonomy
    pub fn from_jwt(error: &jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match error.kind() {
            ErrorKind::ExpiredSignature => TokenError::TokenExpired,
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            _ => TokenError::InvalidTokenFormat,
        }
    }
}

/// Validation errors for employee payloads
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Negative value not allowed: {field}")]
    NegativeValue { field: String },
}

impl ValidationError {
    pub fn required(field: &str) -> Self {
        ValidationError::RequiredField { field: field.to_string() }
    }

    pub fn invalid_format(field: &str) -> Self {
        ValidationError::InvalidFormat { field: field.to_string() }
    }

    pub fn negative(field: &str) -> Self {
        ValidationError::NegativeValue { field: field.to_string() }
    }
}
