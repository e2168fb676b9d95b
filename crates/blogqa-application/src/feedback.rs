//! Per-answer feedback submission.
//!
//! Each answer moves `Idle -> Sending -> Done`, or back to `Idle` when the
//! request fails. `Done` is terminal. Entries are independent, so requests
//! for different answers may be in flight together.

use std::collections::HashMap;
use std::sync::Arc;

use blogqa_core::api::{FeedbackRequest, QaApi};
use blogqa_core::collection::SelectedCollection;
use blogqa_core::feedback::{FeedbackEntry, FeedbackState, Rating};
use blogqa_core::message::AiMessage;
use tokio::sync::RwLock;

/// Result of a rating attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackOutcome {
    /// The answer has no message id and cannot be rated.
    Unavailable,
    /// A request is in flight or the rating is already recorded.
    Ignored(FeedbackState),
    /// The service accepted the rating.
    Recorded(Rating),
    /// The request failed and the entry went back to idle.
    Reverted,
}

/// Feedback status of every rated answer, keyed by message id.
pub struct FeedbackTracker {
    api: Arc<dyn QaApi>,
    collection: SelectedCollection,
    entries: RwLock<HashMap<String, FeedbackEntry>>,
}

impl FeedbackTracker {
    pub fn new(api: Arc<dyn QaApi>, collection: SelectedCollection) -> Self {
        Self {
            api,
            collection,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Submits `rating` for `message`.
    ///
    /// The entry is set to `Sending` before the request goes out. Failures
    /// are not surfaced beyond the revert to `Idle`.
    pub async fn rate(&self, message: &AiMessage, rating: Rating) -> FeedbackOutcome {
        let Some((message_id, question)) = message.feedback_target() else {
            return FeedbackOutcome::Unavailable;
        };

        {
            let mut entries = self.entries.write().await;
            let current = entries.get(message_id).copied().unwrap_or_default();
            if !current.accepts_rating() {
                return FeedbackOutcome::Ignored(current.state);
            }
            entries.insert(message_id.to_string(), FeedbackEntry::sending(rating));
        }

        let blog_id = self.collection.id().await;
        tracing::info!(message_id, %rating, blog_id = %blog_id, "Sending feedback");

        let result = self
            .api
            .send_feedback(FeedbackRequest {
                message_id: message_id.to_string(),
                blog_id,
                question: question.to_string(),
                rating,
            })
            .await;

        let mut entries = self.entries.write().await;
        match result {
            Ok(()) => {
                entries.insert(message_id.to_string(), FeedbackEntry::done(rating));
                FeedbackOutcome::Recorded(rating)
            }
            Err(err) => {
                tracing::warn!(message_id, error = %err, "Feedback failed, reverting");
                entries.insert(message_id.to_string(), FeedbackEntry::idle());
                FeedbackOutcome::Reverted
            }
        }
    }

    /// Current entry for `message_id`; idle when never rated.
    pub async fn entry(&self, message_id: &str) -> FeedbackEntry {
        self.entries
            .read()
            .await
            .get(message_id)
            .copied()
            .unwrap_or_default()
    }

    /// Entry for an answer, `None` when the answer cannot be rated.
    pub async fn entry_for(&self, message: &AiMessage) -> Option<FeedbackEntry> {
        let (message_id, _) = message.feedback_target()?;
        Some(self.entry(message_id).await)
    }
}
