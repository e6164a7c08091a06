//! Gemini `generateContent` REST client.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use common::{AppError, AppResult, GeminiConfig};

/// Why an upstream call produced no usable answer. Never leaves the crate.
#[derive(Debug, Error)]
pub(crate) enum UpstreamError {
    #[error("request timed out")]
    Timeout,

    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("upstream answered {0}")]
    Status(StatusCode),

    #[error("unreadable response body: {0}")]
    Decode(#[source] reqwest::Error),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            UpstreamError::Timeout
        } else if err.is_decode() {
            UpstreamError::Decode(err)
        } else {
            UpstreamError::Transport(err)
        }
    }
}

/// Thin client for one configured model.
#[derive(Clone)]
pub(crate) struct GeminiClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl GeminiClient {
    /// Build a client whose every request is bounded by the configured timeout.
    pub(crate) fn new(config: &GeminiConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AppError::configuration(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint(),
            api_key: config.api_key.clone(),
        })
    }

    /// Send `prompt` as a single user turn.
    ///
    /// `Ok(None)` means the upstream answered but produced no text.
    pub(crate) async fn generate_content(
        &self,
        prompt: &str,
    ) -> Result<Option<String>, UpstreamError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        let parsed: GenerateContentResponse = response.json().await?;
        Ok(parsed.first_text())
    }
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}
