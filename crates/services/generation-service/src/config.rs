//! Generation service configuration.

use std::env;

use common::GeminiConfig;

/// Generation service configuration.
#[derive(Debug, Clone, Default)]
pub struct GenerationServiceConfig {
    pub gemini: GeminiConfig,
}

impl GenerationServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// A missing `GEMINI_API_KEY` is allowed; every call then falls back.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = GeminiConfig::default();
        let api_key = env::var("GEMINI_API_KEY").unwrap_or_default();
        if api_key.is_empty() {
            tracing::warn!("GEMINI_API_KEY not set, generation requests will fall back");
        }

        Self {
            gemini: GeminiConfig {
                api_key,
                base_url: env::var("GEMINI_BASE_URL").unwrap_or(defaults.base_url),
                model: env::var("GEMINI_MODEL").unwrap_or(defaults.model),
                timeout_seconds: env::var("GEMINI_TIMEOUT_SECONDS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .filter(|secs| *secs > 0)
                    .unwrap_or(defaults.timeout_seconds),
            },
        }
    }
}
