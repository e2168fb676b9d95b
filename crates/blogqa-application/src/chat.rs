//! Conversation state and the chat turn orchestrator.
//!
//! A turn moves `Idle -> Sending -> (Settled | Failed)`. The human message is
//! echoed into the conversation before the request is sent; the answer is
//! appended only when the request succeeds. Only one turn may be in flight.

use std::sync::Arc;

use blogqa_core::api::{ChatRequest, QaApi};
use blogqa_core::collection::SelectedCollection;
use blogqa_core::message::{AiMessage, ChatMessage, DisplayMessage, Settlement};
use blogqa_core::text;
use tokio::sync::RwLock;

/// Result of a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input; nothing happened.
    Ignored,
    /// Another turn is in flight; nothing happened.
    Busy,
    /// The answer was appended at `index`.
    Answered { index: usize, message: AiMessage },
    /// The request failed; the error slot holds `message`.
    Failed { message: String },
    /// The conversation was reset while the request was in flight and the
    /// response was dropped.
    Discarded,
}

/// Result of [`ChatSession::begin`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    /// Blank input; nothing happened.
    Ignored,
    /// Another turn is in flight; nothing happened.
    Busy,
    /// The question was appended and loading is set.
    Accepted(PendingTurn),
}

/// A turn accepted into the conversation whose request has not been sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTurn {
    question: String,
    blog_id: String,
    chat_history: Option<Vec<ChatMessage>>,
    epoch: u64,
}

impl PendingTurn {
    /// The trimmed question as it appears in the conversation.
    pub fn question(&self) -> &str {
        &self.question
    }
}

/// Read-only view of the conversation for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationSnapshot {
    pub messages: Vec<DisplayMessage>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Default)]
struct ConversationState {
    messages: Vec<DisplayMessage>,
    loading: bool,
    error: Option<String>,
    /// Bumped by `reset`; responses from an older epoch are dropped.
    epoch: u64,
}

/// Owns the conversation and drives chat turns against the service.
pub struct ChatSession {
    api: Arc<dyn QaApi>,
    collection: SelectedCollection,
    state: RwLock<ConversationState>,
}

impl ChatSession {
    pub fn new(api: Arc<dyn QaApi>, collection: SelectedCollection) -> Self {
        Self {
            api,
            collection,
            state: RwLock::new(ConversationState::default()),
        }
    }

    pub fn collection(&self) -> &SelectedCollection {
        &self.collection
    }

    /// Runs one chat turn for `input`: [`begin`](Self::begin) followed by
    /// [`complete`](Self::complete).
    pub async fn submit(&self, input: &str) -> SubmitOutcome {
        match self.begin(input).await {
            Admission::Ignored => SubmitOutcome::Ignored,
            Admission::Busy => SubmitOutcome::Busy,
            Admission::Accepted(turn) => self.complete(turn).await,
        }
    }

    /// Accepts `input` as the next turn without sending it.
    ///
    /// On acceptance the question is already in the conversation and the
    /// loading flag is set, so a second call before [`complete`](Self::complete)
    /// returns [`Admission::Busy`].
    pub async fn begin(&self, input: &str) -> Admission {
        let question = input.trim();
        if question.is_empty() {
            return Admission::Ignored;
        }

        let blog_id = self.collection.id().await;

        let mut state = self.state.write().await;
        if state.loading {
            tracing::debug!("Submission rejected while a turn is in flight");
            return Admission::Busy;
        }

        let history: Vec<ChatMessage> = state
            .messages
            .iter()
            .map(DisplayMessage::to_chat_message)
            .collect();

        state.messages.push(DisplayMessage::human(question));
        state.error = None;
        state.loading = true;

        Admission::Accepted(PendingTurn {
            question: question.to_string(),
            blog_id,
            chat_history: if history.is_empty() {
                None
            } else {
                Some(history)
            },
            epoch: state.epoch,
        })
    }

    /// Sends an accepted turn and settles the conversation with the result.
    ///
    /// The state lock is released while the request is in flight so views
    /// can render the echoed question and the loading indicator.
    pub async fn complete(&self, turn: PendingTurn) -> SubmitOutcome {
        let PendingTurn {
            question,
            blog_id,
            chat_history,
            epoch,
        } = turn;

        tracing::info!(
            blog_id = %blog_id,
            history_len = chat_history.as_ref().map_or(0, Vec::len),
            "Sending chat turn"
        );

        let result = self
            .api
            .send_chat(ChatRequest {
                blog_id,
                question: question.clone(),
                chat_history,
            })
            .await;

        let mut state = self.state.write().await;
        if state.epoch != epoch {
            tracing::debug!("Dropping chat response for a reset conversation");
            return SubmitOutcome::Discarded;
        }
        state.loading = false;

        match result {
            Ok(response) => {
                let message = AiMessage {
                    settlement: Settlement::from_response(&response.message_id, &question),
                    content: response.answer,
                    sources: response.sources,
                };
                state.messages.push(DisplayMessage::Ai(message.clone()));
                let index = state.messages.len() - 1;
                tracing::info!(index, sources = message.sources.len(), "Chat turn settled");
                SubmitOutcome::Answered { index, message }
            }
            Err(err) => {
                tracing::warn!(error = %err, "Chat turn failed");
                let message = err
                    .user_message()
                    .unwrap_or_else(|| text::UNKNOWN_ERROR.to_string());
                state.error = Some(message.clone());
                SubmitOutcome::Failed { message }
            }
        }
    }

    /// Clears the conversation, the error slot and the loading flag.
    ///
    /// A turn still in flight completes on the network but its response is
    /// discarded.
    pub async fn reset(&self) {
        let mut state = self.state.write().await;
        state.messages.clear();
        state.error = None;
        state.loading = false;
        state.epoch += 1;
        tracing::info!(epoch = state.epoch, "Conversation reset");
    }

    pub async fn snapshot(&self) -> ConversationSnapshot {
        let state = self.state.read().await;
        ConversationSnapshot {
            messages: state.messages.clone(),
            loading: state.loading,
            error: state.error.clone(),
        }
    }

    pub async fn messages(&self) -> Vec<DisplayMessage> {
        self.state.read().await.messages.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }

    pub async fn error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }

    /// The `n`-th answer of the conversation, counting from 1.
    pub async fn answer(&self, n: usize) -> Option<AiMessage> {
        if n == 0 {
            return None;
        }
        self.state
            .read()
            .await
            .messages
            .iter()
            .filter_map(DisplayMessage::as_ai)
            .nth(n - 1)
            .cloned()
    }
}
