//! Wire types for the analyzer backend.
//!
//! These mirror the JSON bodies the backend sends and receives. Fields the
//! backend may omit are `Option` so a sparse response still deserializes.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/analyze`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AnalyzeRequest {
    pub question: String,
}

/// A completed analysis. Replaced wholesale on every successful call.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    /// The question echoed back by the backend.
    pub question: String,
    /// Generated answer text. Paragraphs are separated by newlines.
    pub answer: String,
    /// Backend-reported elapsed time in seconds.
    pub analysis_time: f64,
    /// Citation labels for the document sections that informed the answer.
    #[serde(default)]
    pub sections_used: Option<Vec<String>>,
}

/// Error payload the backend attaches to non-2xx analyze responses.
#[derive(Deserialize, Debug)]
pub struct ErrorBody {
    pub error: Option<String>,
}

/// Corpus statistics from `GET /api/stats`.
///
/// `total_sections` and `total_characters` are absent until the backend has
/// finished indexing (`status` is then "not_initialized").
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CorpusStats {
    pub status: String,
    #[serde(default)]
    pub total_sections: Option<u64>,
    #[serde(default)]
    pub total_characters: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_result_deserializes_with_sections() {
        let json = r#"{
            "question": "What is the revenue?",
            "answer": "Revenue was $39B.",
            "analysis_time": 2.31,
            "sections_used": ["Item 7. MD&A", "Item 8. Financial Statements"]
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.question, "What is the revenue?");
        assert_eq!(result.analysis_time, 2.31);
        assert_eq!(
            result.sections_used.as_deref(),
            Some(&["Item 7. MD&A".to_string(), "Item 8. Financial Statements".to_string()][..])
        );
    }

    #[test]
    fn analysis_result_deserializes_without_sections() {
        let json = r#"{"question": "q", "answer": "a", "analysis_time": 0.4}"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert!(result.sections_used.is_none());
    }

    #[test]
    fn analyze_request_serializes_question_field() {
        let request = AnalyzeRequest {
            question: "How much cash?".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"question": "How much cash?"}));
    }

    #[test]
    fn error_body_tolerates_missing_field() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.error.is_none());

        let body: ErrorBody = serde_json::from_str(r#"{"error": "bad request"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("bad request"));
    }

    #[test]
    fn corpus_stats_sparse_response() {
        let stats: CorpusStats =
            serde_json::from_str(r#"{"status": "not_initialized"}"#).unwrap();
        assert_eq!(stats.status, "not_initialized");
        assert!(stats.total_sections.is_none());

        let stats: CorpusStats = serde_json::from_str(
            r#"{"status": "ready", "total_sections": 42, "total_characters": 120000}"#,
        )
        .unwrap();
        assert_eq!(stats.total_sections, Some(42));
    }
}
