//! Blog collections and the shared collection selection.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::error::{BlogQaError, Result};

/// An independently indexed corpus of blog content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// Identifier sent as `blog_id`.
    pub id: String,
    /// Human-readable name.
    pub label: String,
    /// Public site of the blog.
    #[serde(default)]
    pub site_url: Option<String>,
}

impl Collection {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            site_url: None,
        }
    }

    pub fn with_site_url(mut self, url: impl Into<String>) -> Self {
        self.site_url = Some(url.into());
        self
    }
}

/// Ordered list of known collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionCatalog {
    collections: Vec<Collection>,
}

impl CollectionCatalog {
    /// Builds a catalog. An empty list is rejected.
    pub fn new(collections: Vec<Collection>) -> Result<Self> {
        if collections.is_empty() {
            return Err(BlogQaError::config("at least one collection is required"));
        }
        Ok(Self { collections })
    }

    /// Catalog of the two blogs served by the default deployment.
    pub fn builtin() -> Self {
        Self {
            collections: builtin_collections(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn first(&self) -> &Collection {
        // Non-empty by construction.
        &self.collections[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Collection> {
        self.collections.iter()
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}

pub(crate) fn builtin_collections() -> Vec<Collection> {
    vec![
        Collection::new("blog-v2", "IT Blog").with_site_url("https://blog-v2.advenoh.pe.kr"),
        Collection::new("investment", "Investment Blog")
            .with_site_url("https://investment.advenoh.pe.kr"),
    ]
}

/// The collection questions are currently asked against.
///
/// Clones share the same selection. Readers take a snapshot at the moment
/// they need it; `select` is the only writer.
#[derive(Debug, Clone)]
pub struct SelectedCollection {
    catalog: Arc<CollectionCatalog>,
    current: Arc<RwLock<String>>,
}

impl SelectedCollection {
    /// Starts on `initial`, or on the first catalog entry if `initial` is
    /// unknown.
    pub fn new(catalog: CollectionCatalog, initial: &str) -> Self {
        let start = if catalog.contains(initial) {
            initial.to_string()
        } else {
            tracing::warn!(
                collection = initial,
                "Unknown default collection, using {}",
                catalog.first().id
            );
            catalog.first().id.clone()
        };

        Self {
            catalog: Arc::new(catalog),
            current: Arc::new(RwLock::new(start)),
        }
    }

    pub fn catalog(&self) -> &CollectionCatalog {
        &self.catalog
    }

    /// Identifier of the selected collection.
    pub async fn id(&self) -> String {
        self.current.read().await.clone()
    }

    /// The selected collection.
    pub async fn current(&self) -> Collection {
        let id = self.current.read().await;
        self.catalog
            .get(&id)
            .cloned()
            .unwrap_or_else(|| self.catalog.first().clone())
    }

    /// Switches the selection. Unknown ids are rejected.
    pub async fn select(&self, id: &str) -> Result<Collection> {
        let collection = self
            .catalog
            .get(id)
            .cloned()
            .ok_or_else(|| BlogQaError::validation(format!("Unknown collection: {id}")))?;

        *self.current.write().await = collection.id.clone();
        tracing::info!(collection = %collection.id, "Collection selected");
        Ok(collection)
    }
}
