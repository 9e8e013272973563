use emp_core::errors::DomainError;
use emp_core::services::token::TokenServiceConfig;
use emp_shared::config::AppConfig;

/// Read the environment and reject unsafe settings
///
/// `.env` must already have been loaded by the caller.
pub fn load() -> anyhow::Result<AppConfig> {
    let config = AppConfig::from_env();
    config.validate().map_err(anyhow::Error::msg)?;

    if config.auth.jwt.is_using_default_secret() {
        log::warn!("Using a default token signing secret; set ACCESS_TOKEN_SECRET and REFRESH_TOKEN_SECRET");
    }

    Ok(config)
}

/// Token service settings derived from the loaded configuration
pub fn token_service_config(config: &AppConfig) -> Result<TokenServiceConfig, DomainError> {
    TokenServiceConfig::from_jwt_config(&config.auth.jwt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_service_config_follows_jwt_settings() {
        let mut config = AppConfig::default();
        config.auth.jwt = emp_shared::config::JwtConfig::new("access", "refresh")
            .with_access_expiry_seconds(60);

        let token_config = token_service_config(&config).unwrap();

        assert_eq!(token_config.access_secret, "access");
        assert_eq!(token_config.refresh_secret, "refresh");
        assert_eq!(token_config.login_access_ttl_seconds, 60);
    }
}
