//! Content generator - prompt resolution plus the upstream call.

use async_trait::async_trait;

use crate::client::{GeminiClient, UpstreamError};
use crate::generation::Generation;
use common::{AppResult, GeminiConfig};
use domain::resolve_prompt;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Content generator trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Generate text for `content` phrased as `content_type`.
    ///
    /// Unknown content types send `content` unchanged.
    async fn generate(&self, content: &str, content_type: &str) -> Generation;
}

/// Generator backed by the Gemini REST API.
pub struct GeminiGenerator {
    client: GeminiClient,
}

impl GeminiGenerator {
    pub fn new(config: &GeminiConfig) -> AppResult<Self> {
        Ok(Self {
            client: GeminiClient::new(config)?,
        })
    }
}

#[async_trait]
impl ContentGenerator for GeminiGenerator {
    async fn generate(&self, content: &str, content_type: &str) -> Generation {
        let prompt = resolve_prompt(content_type, content);
        tracing::debug!(content_type, prompt_len = prompt.len(), "Calling upstream");

        match self.client.generate_content(&prompt).await {
            Ok(Some(text)) => Generation::Generated(text),
            Ok(None) => {
                tracing::info!(content_type, "Upstream returned no content");
                Generation::Empty
            }
            Err(err) => {
                log_upstream_failure(&err);
                Generation::UpstreamFailed
            }
        }
    }
}

fn log_upstream_failure(err: &UpstreamError) {
    match err {
        UpstreamError::Status(status) => {
            tracing::warn!(status = status.as_u16(), "Upstream generation failed")
        }
        other => tracing::warn!(error = %other, "Upstream generation failed"),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    const MODEL_PATH: &str = "/v1beta/models/gemini-1.5-flash:generateContent";

    fn config(server: &MockServer, timeout_seconds: u64) -> GeminiConfig {
        GeminiConfig {
            api_key: "test-key".to_string(),
            base_url: format!("{}/v1beta/models", server.uri()),
            model: "gemini-1.5-flash".to_string(),
            timeout_seconds,
        }
    }

    fn generator(server: &MockServer) -> GeminiGenerator {
        GeminiGenerator::new(&config(server, 5)).unwrap()
    }

    fn answer(text: &str) -> serde_json::Value {
        json!({
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": text}]}}
            ]
        })
    }

    #[tokio::test]
    async fn test_generated_text_with_template_and_key() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .and(query_param("key", "test-key"))
            .and(body_json(json!({
                "contents": [{"parts": [{
                    "text": "Write a professional, engaging blog post based on: cats"
                }]}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(answer("Cats rule.")))
            .expect(1)
            .mount(&server)
            .await;

        let result = generator(&server).generate("cats", "blog").await;
        assert_eq!(result, Generation::Generated("Cats rule.".to_string()));
    }

    #[tokio::test]
    async fn test_unknown_type_sends_content_unchanged() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .and(body_json(json!({"contents": [{"parts": [{"text": "cats"}]}]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(answer("ok")))
            .expect(1)
            .mount(&server)
            .await;

        let result = generator(&server).generate("cats", "unknown-tag").await;
        assert_eq!(result, Generation::Generated("ok".to_string()));
    }

    #[tokio::test]
    async fn test_empty_candidates() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
            .mount(&server)
            .await;

        let result = generator(&server).generate("cats", "blog").await;
        assert_eq!(result, Generation::Empty);
        assert_eq!(result.into_text(), "No content generated.");
    }

    #[tokio::test]
    async fn test_server_error_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&server)
            .await;

        let result = generator(&server).generate("cats", "blog").await;
        assert_eq!(result, Generation::UpstreamFailed);
        assert_eq!(result.into_text(), "Could not generate content (API error).");
    }

    #[tokio::test]
    async fn test_client_error_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let result = generator(&server).generate("cats", "blog").await;
        assert_eq!(result, Generation::UpstreamFailed);
    }

    #[tokio::test]
    async fn test_malformed_body_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let result = generator(&server).generate("cats", "blog").await;
        assert_eq!(result, Generation::UpstreamFailed);
    }

    #[tokio::test]
    async fn test_timeout_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(answer("too late"))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let slow = GeminiGenerator::new(&config(&server, 1)).unwrap();
        let result = slow.generate("cats", "blog").await;
        assert_eq!(result, Generation::UpstreamFailed);
    }

    #[tokio::test]
    async fn test_unreachable_upstream_falls_back() {
        let config = GeminiConfig {
            api_key: "test-key".to_string(),
            base_url: "http://127.0.0.1:1/v1beta/models".to_string(),
            model: "gemini-1.5-flash".to_string(),
            timeout_seconds: 2,
        };

        let result = GeminiGenerator::new(&config)
            .unwrap()
            .generate("cats", "blog")
            .await;
        assert_eq!(result, Generation::UpstreamFailed);
    }
}
