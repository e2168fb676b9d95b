//! Client configuration.
//!
//! Resolution order, later wins: built-in defaults, `config.toml`
//! (`~/.config/blogqa/config.toml` unless a path is given), the
//! `BLOGQA_API_URL` environment variable, then explicit overrides from the
//! command line.
//!
//! ```toml
//! api_url = "http://localhost:8080"
//! default_collection = "blog-v2"
//!
//! [[collection]]
//! id = "blog-v2"
//! label = "IT Blog"
//! site_url = "https://blog-v2.advenoh.pe.kr"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::collection::{Collection, CollectionCatalog, builtin_collections};
use crate::error::{BlogQaError, Result};

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_COLLECTION: &str = "blog-v2";
pub const API_URL_ENV: &str = "BLOGQA_API_URL";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the Q&A service.
    pub api_url: String,
    /// Collection selected at startup.
    pub default_collection: String,
    #[serde(rename = "collection")]
    pub collections: Vec<Collection>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            default_collection: DEFAULT_COLLECTION.to_string(),
            collections: builtin_collections(),
        }
    }
}

impl ClientConfig {
    /// Returns `<config_dir>/blogqa/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("blogqa").join("config.toml"))
    }

    /// Loads the config file at `path`, or the default location when `None`,
    /// then applies the environment override.
    ///
    /// An explicit `path` must exist; only the default location may be
    /// absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) if !path.exists() => {
                return Err(BlogQaError::config(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            Some(path) => Self::load_from(path)?,
            None => match Self::default_path() {
                Some(path) => Self::load_from(&path)?,
                None => Self::default(),
            },
        };
        Ok(config.with_env_override(std::env::var(API_URL_ENV).ok()))
    }

    /// Reads a TOML config file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| {
            BlogQaError::config(format!(
                "Failed to parse configuration file at {}: {}",
                path.display(),
                e
            ))
        })?;

        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Applies a `BLOGQA_API_URL` value. Blank values are ignored.
    pub fn with_env_override(self, value: Option<String>) -> Self {
        match value {
            Some(url) if !url.trim().is_empty() => self.with_api_url(url),
            _ => self,
        }
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Base URL without a trailing slash.
    pub fn api_base(&self) -> &str {
        self.api_url.trim().trim_end_matches('/')
    }

    pub fn catalog(&self) -> Result<CollectionCatalog> {
        CollectionCatalog::new(self.collections.clone())
    }
}
