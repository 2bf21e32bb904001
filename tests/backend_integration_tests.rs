use inquest::api::{AnalysisBackend, ApiError, HttpBackend};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Health Check
// ============================================================================

#[tokio::test]
async fn test_health_check_ok_on_2xx() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "healthy",
            "message": "Analyzer API is running"
        })))
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri());
    assert!(backend.check_health().await.is_ok());
}

#[tokio::test]
async fn test_health_check_fails_on_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri());
    let result = backend.check_health().await;

    assert!(matches!(result, Err(ApiError::Api { status: 503, .. })));
}

#[tokio::test]
async fn test_health_check_fails_on_connection_refused() {
    // Nothing listens on this port
    let backend = HttpBackend::new("http://127.0.0.1:1".to_string());
    let result = backend.check_health().await;

    assert!(matches!(result, Err(ApiError::Network(_))));
}

// ============================================================================
// Analyze
// ============================================================================

#[tokio::test]
async fn test_analyze_success_parses_full_result() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .and(body_json(json!({"question": "What is the total revenue?"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "question": "What is the total revenue?",
            "answer": "Total revenue was $39.0B.\n\nUp 15.6% year over year.",
            "analysis_time": 2.31,
            "sections_used": ["Item 7. MD&A", "Item 8. Financial Statements"]
        })))
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri());
    let result = backend
        .analyze("What is the total revenue?")
        .await
        .unwrap();

    assert_eq!(result.question, "What is the total revenue?");
    assert!(result.answer.starts_with("Total revenue"));
    assert_eq!(result.analysis_time, 2.31);
    assert_eq!(result.sections_used.as_ref().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_analyze_success_without_sections() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "question": "q",
            "answer": "a",
            "analysis_time": 0.4
        })))
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri());
    let result = backend.analyze("q").await.unwrap();

    assert!(result.sections_used.is_none());
}

#[tokio::test]
async fn test_analyze_error_body_message_is_used_verbatim() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error": "Question is required"})),
        )
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri());
    let result = backend.analyze("   ").await;

    match result {
        Err(ApiError::Api { status, message }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "Question is required");
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_analyze_error_without_error_field_uses_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri());
    let result = backend.analyze("q").await;

    match result {
        Err(ApiError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Analysis failed");
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_analyze_error_with_empty_json_body_uses_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri());
    let result = backend.analyze("q").await;

    match result {
        Err(ApiError::Api { message, .. }) => assert_eq!(message, "Analysis failed"),
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_analyze_malformed_success_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri());
    let result = backend.analyze("q").await;

    assert!(matches!(result, Err(ApiError::Parse(_))));
}

#[tokio::test]
async fn test_analyze_network_failure() {
    let backend = HttpBackend::new("http://127.0.0.1:1".to_string());
    let result = backend.analyze("q").await;

    assert!(matches!(result, Err(ApiError::Network(_))));
}

// ============================================================================
// Stats
// ============================================================================

#[tokio::test]
async fn test_stats_parses_ready_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ready",
            "total_sections": 57,
            "total_characters": 310000
        })))
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri());
    let stats = backend.stats().await.unwrap();

    assert_eq!(stats.status, "ready");
    assert_eq!(stats.total_sections, Some(57));
}

#[tokio::test]
async fn test_stats_tolerates_uninitialized_backend() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "not_initialized"
        })))
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri());
    let stats = backend.stats().await.unwrap();

    assert_eq!(stats.status, "not_initialized");
    assert!(stats.total_sections.is_none());
}
