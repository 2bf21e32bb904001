//! Default backend implementation over reqwest.
//!
//! Three endpoints:
//! - `GET /api/health` — reachability probe, status code only
//! - `POST /api/analyze` — the actual question/answer call
//! - `GET /api/stats` — corpus statistics, best-effort

use async_trait::async_trait;
use log::{debug, info, warn};

use super::backend::{AnalysisBackend, ApiError};
use super::types::{AnalysisResult, AnalyzeRequest, CorpusStats, ErrorBody};

/// Fallback message when a failed analyze response carries no `error` field.
pub const GENERIC_ANALYZE_ERROR: &str = "Analysis failed";

/// HTTP client for the analyzer backend.
pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl AnalysisBackend for HttpBackend {
    fn name(&self) -> &str {
        "http"
    }

    async fn check_health(&self) -> Result<(), ApiError> {
        let response = self
            .client
            .get(format!("{}/api/health", self.base_url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        debug!("Health check status: {}", response.status());

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ApiError::Api {
                status: response.status().as_u16(),
                message: "unhealthy".to_string(),
            })
        }
    }

    async fn analyze(&self, question: &str) -> Result<AnalysisResult, ApiError> {
        let request = AnalyzeRequest {
            question: question.to_string(),
        };

        info!("Analyze request: {} chars", question.len());

        let response = self
            .client
            .post(format!("{}/api/analyze", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Analyze response status: {}", status);

        if !status.is_success() {
            // The backend puts its message in an `error` field; anything
            // else (HTML error page, empty body) gets the generic fallback.
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| GENERIC_ANALYZE_ERROR.to_string());
            warn!("Analyze failed: {} - {}", status, message);
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let result: AnalysisResult = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        info!(
            "Analyze complete: {:.2}s backend time, {} answer bytes",
            result.analysis_time,
            result.answer.len()
        );
        Ok(result)
    }

    async fn stats(&self) -> Result<CorpusStats, ApiError> {
        let response = self
            .client
            .get(format!("{}/api/stats", self.base_url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ApiError::Api {
                status: response.status().as_u16(),
                message: "stats unavailable".to_string(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let backend = HttpBackend::new("http://localhost:5000/".to_string());
        assert_eq!(backend.base_url, "http://localhost:5000");
    }
}
