//! Gateway configuration.

use std::env;

use auth_service_lib::AuthServiceConfig;
use common::{AppResult, CorsConfig, ServiceConfig};
use generation_service_lib::GenerationServiceConfig;
use user_service_lib::config::UserServiceConfig;

/// Everything the `content-api` binary needs to start.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub server: ServiceConfig,
    pub cors: CorsConfig,
    pub users: UserServiceConfig,
    pub auth: AuthServiceConfig,
    pub generation: GenerationServiceConfig,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let defaults = ServiceConfig::default();
        let server = ServiceConfig {
            service_name: defaults.service_name,
            host: env::var("SERVER_HOST").unwrap_or(defaults.host),
            port: env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
        };

        let cors = env::var("CORS_ALLOWED_ORIGINS")
            .map(|list| CorsConfig::from_list(&list))
            .unwrap_or_default();

        Ok(Self {
            server,
            cors,
            users: UserServiceConfig::from_env(),
            auth: AuthServiceConfig::from_env()?,
            generation: GenerationServiceConfig::from_env(),
        })
    }
}
