//! Token service module for JWT management
//!
//! This module handles all token-related operations:
//! - Access/refresh token pair issuance
//! - Access token verification
//! - Refresh token verification and access token renewal
//! - Refresh token revocation

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
