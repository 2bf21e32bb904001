//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{AnalysisBackend, AnalysisResult, ApiError, CorpusStats};

/// A no-op backend for tests that don't need real HTTP.
pub struct NoopBackend;

#[async_trait]
impl AnalysisBackend for NoopBackend {
    fn name(&self) -> &str {
        "noop"
    }

    async fn check_health(&self) -> Result<(), ApiError> {
        Ok(())
    }

    async fn analyze(&self, question: &str) -> Result<AnalysisResult, ApiError> {
        Ok(AnalysisResult {
            question: question.to_string(),
            answer: String::new(),
            analysis_time: 0.0,
            sections_used: None,
        })
    }

    async fn stats(&self) -> Result<CorpusStats, ApiError> {
        Ok(CorpusStats {
            status: "ready".to_string(),
            total_sections: None,
            total_characters: None,
        })
    }
}

/// Creates a test App with a NoopBackend.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(NoopBackend))
}

/// A representative successful analysis for reducer and render tests.
pub fn sample_result() -> AnalysisResult {
    AnalysisResult {
        question: "What is the total revenue?".to_string(),
        answer: "Total revenue was $39.0B.\n\nUp 15.6% year over year.".to_string(),
        analysis_time: 2.4,
        sections_used: Some(vec![
            "Item 7. Management's Discussion".to_string(),
            "Item 8. Financial Statements".to_string(),
        ]),
    }
}
