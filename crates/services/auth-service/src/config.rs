//! Auth service configuration.

use std::env;

use common::{AppError, AppResult, JwtConfig};
use domain::{DEFAULT_JWT_EXPIRATION_HOURS, MAX_JWT_EXPIRATION_HOURS, MIN_JWT_SECRET_LENGTH};

/// Signing secret used by debug builds when `JWT_SECRET` is unset.
#[cfg(debug_assertions)]
const DEV_JWT_SECRET: &str = "dev-only-secret-change-me-before-deploying-0000";

/// Auth service configuration.
#[derive(Debug, Clone, Default)]
pub struct AuthServiceConfig {
    pub jwt: JwtConfig,
}

impl AuthServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Release builds refuse to start without `JWT_SECRET`.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let secret = match env::var("JWT_SECRET") {
            Ok(secret) => secret,
            Err(_) => Self::fallback_secret()?,
        };

        let expiration_hours = env::var("JWT_EXPIRATION_HOURS")
            .ok()
            .and_then(|h| h.parse().ok())
            .unwrap_or(DEFAULT_JWT_EXPIRATION_HOURS);

        let config = Self {
            jwt: JwtConfig {
                secret,
                expiration_hours,
            },
        };
        config.validate()?;
        Ok(config)
    }

    #[cfg(debug_assertions)]
    fn fallback_secret() -> AppResult<String> {
        tracing::warn!("JWT_SECRET not set, using the development signing secret");
        Ok(DEV_JWT_SECRET.to_string())
    }

    #[cfg(not(debug_assertions))]
    fn fallback_secret() -> AppResult<String> {
        Err(AppError::configuration("JWT_SECRET must be set"))
    }

    /// Check the secret length and token validity.
    pub fn validate(&self) -> AppResult<()> {
        if self.jwt.secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(AppError::configuration(format!(
                "JWT_SECRET must be at least {} characters",
                MIN_JWT_SECRET_LENGTH
            )));
        }
        if !(1..=MAX_JWT_EXPIRATION_HOURS).contains(&self.jwt.expiration_hours) {
            return Err(AppError::configuration(format!(
                "JWT_EXPIRATION_HOURS must be between 1 and {}",
                MAX_JWT_EXPIRATION_HOURS
            )));
        }
        Ok(())
    }
}
