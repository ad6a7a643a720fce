use thiserror::Error;
use tracing::error;

/// Failures surfaced by [`GongClient`](crate::GongClient).
///
/// Missing envelope fields are never errors; they normalize to empty records.
#[derive(Debug, Error)]
pub enum GongError {
    /// Upstream answered with a non-success status. `body` is the raw response text.
    #[error("Gong API error {status}: {body}")]
    Api { status: u16, body: String },
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("failed to encode query parameters: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),
    #[error("invalid path segment: {0:?}")]
    InvalidPathSegment(String),
    #[error("{0} not set")]
    MissingEnv(&'static str),
}

impl GongError {
    /// Status code of an upstream failure, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            GongError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub fn log_error(e: &GongError) {
    error!(error=%e, "gong request failed")
}
