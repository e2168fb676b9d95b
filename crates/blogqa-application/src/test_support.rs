//! Scripted `QaApi` used by the unit tests of this crate.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use blogqa_core::api::{ChatRequest, ChatResponse, FeedbackRequest, QaApi};
use blogqa_core::error::{BlogQaError, Result};
use blogqa_core::message::Source;
use blogqa_core::stats::{AdminStats, HealthStatus};
use tokio::sync::Semaphore;

/// Returns queued results in order and records every request.
///
/// A gated mock holds each call until `release` is called, which keeps a
/// request observably in flight.
pub(crate) struct MockQaApi {
    chat_results: Mutex<VecDeque<Result<ChatResponse>>>,
    feedback_results: Mutex<VecDeque<Result<()>>>,
    stats_result: Mutex<Option<Result<AdminStats>>>,
    chat_requests: Mutex<Vec<ChatRequest>>,
    feedback_requests: Mutex<Vec<FeedbackRequest>>,
    gate: Option<Semaphore>,
}

impl MockQaApi {
    pub(crate) fn new() -> Self {
        Self {
            chat_results: Mutex::new(VecDeque::new()),
            feedback_results: Mutex::new(VecDeque::new()),
            stats_result: Mutex::new(None),
            chat_requests: Mutex::new(Vec::new()),
            feedback_requests: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    pub(crate) fn gated() -> Self {
        Self {
            gate: Some(Semaphore::new(0)),
            ..Self::new()
        }
    }

    /// Lets one held call complete.
    pub(crate) fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1);
        }
    }

    pub(crate) fn push_chat(&self, result: Result<ChatResponse>) {
        self.chat_results.lock().unwrap().push_back(result);
    }

    pub(crate) fn push_feedback(&self, result: Result<()>) {
        self.feedback_results.lock().unwrap().push_back(result);
    }

    pub(crate) fn set_stats(&self, result: Result<AdminStats>) {
        *self.stats_result.lock().unwrap() = Some(result);
    }

    pub(crate) fn chat_requests(&self) -> Vec<ChatRequest> {
        self.chat_requests.lock().unwrap().clone()
    }

    pub(crate) fn feedback_requests(&self) -> Vec<FeedbackRequest> {
        self.feedback_requests.lock().unwrap().clone()
    }

    /// Polls until `count` chat or feedback requests were issued.
    pub(crate) async fn wait_for_requests(&self, count: usize) {
        for _ in 0..10_000 {
            let issued = self.chat_requests.lock().unwrap().len()
                + self.feedback_requests.lock().unwrap().len();
            if issued >= count {
                return;
            }
            tokio::task::yield_now().await;
        }
        panic!("expected {count} requests to be issued");
    }

    async fn pass_gate(&self) -> Result<()> {
        if let Some(gate) = &self.gate {
            gate.acquire()
                .await
                .map_err(|_| BlogQaError::transport("gate closed"))?
                .forget();
        }
        Ok(())
    }
}

#[async_trait]
impl QaApi for MockQaApi {
    async fn send_chat(&self, request: ChatRequest) -> Result<ChatResponse> {
        self.chat_requests.lock().unwrap().push(request);
        self.pass_gate().await?;
        self.chat_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(BlogQaError::transport("no chat response queued")))
    }

    async fn send_feedback(&self, request: FeedbackRequest) -> Result<()> {
        self.feedback_requests.lock().unwrap().push(request);
        self.pass_gate().await?;
        self.feedback_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(BlogQaError::transport("no feedback response queued")))
    }

    async fn get_admin_stats(&self) -> Result<AdminStats> {
        self.stats_result
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Err(BlogQaError::http_status(500)))
    }

    async fn health(&self) -> Result<HealthStatus> {
        Ok(HealthStatus {
            status: "ok".to_string(),
        })
    }
}

/// A successful chat response citing one post.
pub(crate) fn answer(text: &str, message_id: &str) -> ChatResponse {
    ChatResponse {
        answer: text.to_string(),
        sources: vec![Source {
            title: "Post A".to_string(),
            url: "http://x".to_string(),
        }],
        message_id: message_id.to_string(),
    }
}
