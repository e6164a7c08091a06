//! Outcome of a generation request.

use domain::{NO_CONTENT_GENERATED, UPSTREAM_API_ERROR};

/// What the upstream produced. All three render as `200 {output}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generation {
    /// First text part of the first candidate
    Generated(String),
    /// Well-formed answer without any candidate text
    Empty,
    /// Transport error, timeout, non-2xx status or unreadable body
    UpstreamFailed,
}

impl Generation {
    /// Text returned to the caller.
    pub fn into_text(self) -> String {
        match self {
            Generation::Generated(text) => text,
            Generation::Empty => NO_CONTENT_GENERATED.to_string(),
            Generation::UpstreamFailed => UPSTREAM_API_ERROR.to_string(),
        }
    }

    pub fn is_soft_failure(&self) -> bool {
        !matches!(self, Generation::Generated(_))
    }
}
