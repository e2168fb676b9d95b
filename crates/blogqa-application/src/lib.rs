//! Client-side orchestration: chat turns, feedback and the admin dashboard.

pub mod chat;
pub mod dashboard;
pub mod feedback;

#[cfg(test)]
mod test_support;

pub use chat::{Admission, ChatSession, ConversationSnapshot, PendingTurn, SubmitOutcome};
pub use dashboard::{Dashboard, DashboardState, StatCard, load_dashboard};
pub use feedback::{FeedbackOutcome, FeedbackTracker};
