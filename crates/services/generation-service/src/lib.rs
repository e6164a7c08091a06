//! Generation Service Library
//!
//! Wraps user content in the prompt template for its content type and asks
//! the Gemini `generateContent` endpoint for a completion. Upstream failures
//! never surface as errors; they come back as a `Generation` fallback.

mod client;
pub mod config;
pub mod generation;
pub mod service;

pub use crate::config::GenerationServiceConfig;
pub use crate::generation::Generation;
pub use crate::service::{ContentGenerator, GeminiGenerator};

#[cfg(any(test, feature = "test-utils"))]
pub use crate::service::MockContentGenerator;
