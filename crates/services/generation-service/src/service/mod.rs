//! Content generation business logic.

mod generator;

pub use generator::{ContentGenerator, GeminiGenerator};

#[cfg(any(test, feature = "test-utils"))]
pub use generator::MockContentGenerator;
