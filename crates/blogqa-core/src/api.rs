//! Service contract consumed by the client.
//!
//! `QaApi` is the seam between orchestration and transport: the HTTP
//! implementation lives in `blogqa-interaction`, tests substitute mocks.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::feedback::Rating;
use crate::message::{ChatMessage, Source};
use crate::stats::{AdminStats, HealthStatus};

/// Body of `POST /chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub blog_id: String,
    pub question: String,
    /// Prior turns. Omitted from the body when `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_history: Option<Vec<ChatMessage>>,
}

/// Response of `POST /chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<Source>,
    #[serde(default)]
    pub message_id: String,
}

/// Body of `POST /feedback`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRequest {
    pub message_id: String,
    pub blog_id: String,
    pub question: String,
    pub rating: Rating,
}

/// One-shot request/response operations against the Q&A service.
///
/// None of them retries or supports cancellation.
#[async_trait]
pub trait QaApi: Send + Sync {
    /// Sends a chat turn.
    async fn send_chat(&self, request: ChatRequest) -> Result<ChatResponse>;

    /// Sends a rating for an answer. No body is expected back.
    async fn send_feedback(&self, request: FeedbackRequest) -> Result<()>;

    /// Fetches dashboard statistics.
    async fn get_admin_stats(&self) -> Result<AdminStats>;

    /// Checks service liveness.
    async fn health(&self) -> Result<HealthStatus>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Role;

    #[test]
    fn test_chat_request_omits_absent_history() {
        let request = ChatRequest {
            blog_id: "blog-v2".into(),
            question: "What is RAG?".into(),
            chat_history: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"blog_id": "blog-v2", "question": "What is RAG?"})
        );
    }

    #[test]
    fn test_chat_request_includes_history() {
        let request = ChatRequest {
            blog_id: "blog-v2".into(),
            question: "And then?".into(),
            chat_history: Some(vec![ChatMessage {
                role: Role::Human,
                content: "What is RAG?".into(),
            }]),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["chat_history"][0]["role"], "human");
    }

    #[test]
    fn test_chat_response_tolerates_missing_message_id() {
        let response: ChatResponse =
            serde_json::from_str(r#"{"answer": "a", "sources": []}"#).unwrap();
        assert_eq!(response.message_id, "");
    }

    #[test]
    fn test_feedback_request_wire_format() {
        let request = FeedbackRequest {
            message_id: "m1".into(),
            blog_id: "blog-v2".into(),
            question: "What is RAG?".into(),
            rating: Rating::Up,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["rating"], "up");
        assert_eq!(json["message_id"], "m1");
    }
}
