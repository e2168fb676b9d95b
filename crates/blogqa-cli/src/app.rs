use std::sync::Arc;

use anyhow::{Context, Result};
use blogqa_application::{ChatSession, FeedbackTracker};
use blogqa_core::api::QaApi;
use blogqa_core::collection::SelectedCollection;
use blogqa_core::config::ClientConfig;
use blogqa_interaction::HttpQaApi;

/// Services shared by every command.
pub struct AppContext {
    pub config: ClientConfig,
    pub api: Arc<dyn QaApi>,
    pub collection: SelectedCollection,
}

impl AppContext {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let catalog = config.catalog().context("Invalid collection catalog")?;
        let collection = SelectedCollection::new(catalog, &config.default_collection);
        let api: Arc<dyn QaApi> = Arc::new(HttpQaApi::from_config(&config));

        Ok(Self {
            config,
            api,
            collection,
        })
    }

    /// Applies a `--collection` flag, if any.
    pub async fn select_collection(&self, id: Option<&str>) -> Result<()> {
        if let Some(id) = id {
            self.collection.select(id).await?;
        }
        Ok(())
    }

    pub fn chat_session(&self) -> ChatSession {
        ChatSession::new(Arc::clone(&self.api), self.collection.clone())
    }

    pub fn feedback_tracker(&self) -> FeedbackTracker {
        FeedbackTracker::new(Arc::clone(&self.api), self.collection.clone())
    }
}
