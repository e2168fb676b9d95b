//! Domain types shared by every blogqa crate.

pub mod api;
pub mod collection;
pub mod config;
pub mod error;
pub mod feedback;
pub mod message;
pub mod stats;
pub mod text;

// Re-export common types
pub use api::{ChatRequest, ChatResponse, FeedbackRequest, QaApi};
pub use collection::{Collection, CollectionCatalog, SelectedCollection};
pub use config::ClientConfig;
pub use error::{BlogQaError, Result};
pub use feedback::{FeedbackEntry, FeedbackState, Rating};
pub use message::{AiMessage, ChatMessage, DisplayMessage, Role, Settlement, Source};
pub use stats::{AdminStats, DailyQueryCount, FeedbackScore, HealthStatus, TopQuestion};
