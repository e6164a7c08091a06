//! HTTP client for the upstream generation API.

mod gemini_client;

pub(crate) use gemini_client::{GeminiClient, UpstreamError};
