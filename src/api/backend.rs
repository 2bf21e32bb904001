use std::fmt;

use async_trait::async_trait;

use super::types::{AnalysisResult, CorpusStats};

/// Errors that can occur while talking to the backend.
/// Variants carry enough info to tell transport failures from API rejections.
#[derive(Debug)]
pub enum ApiError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Backend answered with a non-2xx status. `message` is the error text
    /// from the response body, or a generic fallback when the body had none.
    Api { status: u16, message: String },
    /// Failed to decode the backend's response body.
    Parse(String),
}

impl ApiError {
    /// The text shown to the user in the inline error panel.
    ///
    /// API rejections surface the backend's own message verbatim; transport
    /// and decode failures fall back to the display text.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// The analyzer backend as the client sees it.
///
/// [`HttpBackend`](super::HttpBackend) is the real implementation; tests
/// substitute a no-op one.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Returns the name of the backend implementation.
    fn name(&self) -> &str;

    /// Health probe. `Ok(())` for any 2xx status, an error for everything
    /// else including connection-level failures.
    async fn check_health(&self) -> Result<(), ApiError>;

    /// Submits a question and waits for the generated answer.
    async fn analyze(&self, question: &str) -> Result<AnalysisResult, ApiError>;

    /// Corpus statistics. Best-effort; callers may ignore failures.
    async fn stats(&self) -> Result<CorpusStats, ApiError>;
}
