//! User service configuration.

use std::env;

use common::DatabaseConfig;

/// User service configuration.
#[derive(Debug, Clone, Default)]
pub struct UserServiceConfig {
    pub database: DatabaseConfig,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = DatabaseConfig::default();
        Self {
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").unwrap_or(defaults.url),
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.min_connections),
            },
        }
    }
}
