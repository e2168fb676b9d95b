//! Integration tests for HttpQaApi.
//!
//! All tests run against a wiremock server.

use blogqa_core::api::{ChatRequest, FeedbackRequest, QaApi};
use blogqa_core::error::BlogQaError;
use blogqa_core::feedback::Rating;
use blogqa_core::message::{ChatMessage, Role};
use blogqa_interaction::HttpQaApi;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn chat_request(history: Option<Vec<ChatMessage>>) -> ChatRequest {
    ChatRequest {
        blog_id: "blog-v2".to_string(),
        question: "What is RAG?".to_string(),
        chat_history: history,
    }
}

#[tokio::test]
async fn test_send_chat_returns_answer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(body_json(json!({"blog_id": "blog-v2", "question": "What is RAG?"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "answer": "Retrieval-Augmented Generation",
            "sources": [{"title": "Post A", "url": "http://x"}],
            "message_id": "m1"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = HttpQaApi::new(mock_server.uri());
    let response = api.send_chat(chat_request(None)).await.unwrap();

    assert_eq!(response.answer, "Retrieval-Augmented Generation");
    assert_eq!(response.sources.len(), 1);
    assert_eq!(response.sources[0].title, "Post A");
    assert_eq!(response.message_id, "m1");
}

#[tokio::test]
async fn test_send_chat_sends_history() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(body_json(json!({
            "blog_id": "blog-v2",
            "question": "What is RAG?",
            "chat_history": [
                {"role": "human", "content": "hello"},
                {"role": "ai", "content": "hi"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "answer": "a", "sources": [], "message_id": "m2"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = HttpQaApi::new(mock_server.uri());
    let history = vec![
        ChatMessage {
            role: Role::Human,
            content: "hello".to_string(),
        },
        ChatMessage {
            role: Role::Ai,
            content: "hi".to_string(),
        },
    ];

    let response = api.send_chat(chat_request(Some(history))).await.unwrap();
    assert_eq!(response.message_id, "m2");
}

#[tokio::test]
async fn test_send_chat_error_uses_detail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"detail": "Unknown blog_id: nope"})),
        )
        .mount(&mock_server)
        .await;

    let api = HttpQaApi::new(mock_server.uri());
    let err = api.send_chat(chat_request(None)).await.unwrap_err();

    assert_eq!(err, BlogQaError::request(400, "Unknown blog_id: nope"));
    assert_eq!(err.to_string(), "Unknown blog_id: nope");
}

#[tokio::test]
async fn test_send_chat_error_without_detail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let api = HttpQaApi::new(mock_server.uri());
    let err = api.send_chat(chat_request(None)).await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "HTTP 500");
}

#[tokio::test]
async fn test_send_chat_undecodable_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let api = HttpQaApi::new(mock_server.uri());
    let err = api.send_chat(chat_request(None)).await.unwrap_err();

    assert!(matches!(err, BlogQaError::Serialization { .. }));
}

#[tokio::test]
async fn test_send_feedback_accepts_empty_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/feedback"))
        .and(body_json(json!({
            "message_id": "m1",
            "blog_id": "blog-v2",
            "question": "What is RAG?",
            "rating": "up"
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = HttpQaApi::new(mock_server.uri());
    api.send_feedback(FeedbackRequest {
        message_id: "m1".to_string(),
        blog_id: "blog-v2".to_string(),
        question: "What is RAG?".to_string(),
        rating: Rating::Up,
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn test_send_feedback_error_is_generic() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/feedback"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({"detail": "ignored"})))
        .mount(&mock_server)
        .await;

    let api = HttpQaApi::new(mock_server.uri());
    let err = api
        .send_feedback(FeedbackRequest {
            message_id: "m1".to_string(),
            blog_id: "blog-v2".to_string(),
            question: "q".to_string(),
            rating: Rating::Down,
        })
        .await
        .unwrap_err();

    assert_eq!(err, BlogQaError::http_status(422));
}

#[tokio::test]
async fn test_get_admin_stats() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "daily_queries": [
                {"date": "2024-01-01", "count": 3},
                {"date": "2024-01-02", "count": 5}
            ],
            "top_questions": [{"question": "What is RAG?", "count": 4}],
            "feedback_score": {"total": 3, "up": 2, "down": 1, "up_ratio": 0.667},
            "avg_response_time": 1234.0,
            "search_failure_rate": 0.05
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = HttpQaApi::new(mock_server.uri());
    let stats = api.get_admin_stats().await.unwrap();

    assert_eq!(stats.total_queries(), 8);
    assert_eq!(stats.top_questions[0].count, 4);
    assert_eq!(stats.feedback_score.up, 2);
}

#[tokio::test]
async fn test_get_admin_stats_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/stats"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let api = HttpQaApi::new(mock_server.uri());
    let err = api.get_admin_stats().await.unwrap_err();

    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn test_health() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .mount(&mock_server)
        .await;

    let api = HttpQaApi::new(format!("{}/", mock_server.uri()));
    let health = api.health().await.unwrap();

    assert!(health.is_ok());
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Port 9 (discard) is not expected to accept HTTP connections locally.
    let api = HttpQaApi::new("http://127.0.0.1:9");
    let err = api.health().await.unwrap_err();

    assert!(err.is_transport());
}
