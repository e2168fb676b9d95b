//! Feedback types for rating answers.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Thumbs up or thumbs down.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Rating {
    Up,
    Down,
}

impl Rating {
    pub fn emoji(self) -> &'static str {
        match self {
            Rating::Up => "👍",
            Rating::Down => "👎",
        }
    }
}

/// Submission status of feedback for one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackState {
    /// Nothing submitted, or the last attempt failed.
    #[default]
    Idle,
    /// A request is in flight.
    Sending,
    /// The service accepted the rating. Terminal.
    Done,
}

/// Feedback status keyed by message id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub state: FeedbackState,
    /// Present while `Sending` and once `Done`.
    pub rating: Option<Rating>,
}

impl FeedbackEntry {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn sending(rating: Rating) -> Self {
        Self {
            state: FeedbackState::Sending,
            rating: Some(rating),
        }
    }

    pub fn done(rating: Rating) -> Self {
        Self {
            state: FeedbackState::Done,
            rating: Some(rating),
        }
    }

    /// Rating controls are usable only in the idle state.
    pub fn accepts_rating(&self) -> bool {
        self.state == FeedbackState::Idle
    }
}
