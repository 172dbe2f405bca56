//! External completion sources
//!
//! History and bookmarks live in the host browser and are not available on
//! every platform; `Capabilities` records which ones may be queried.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::SourceError;
use crate::settings::SettingsStore;

/// A titled page returned by history or bookmark lookups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRef {
    pub title: String,
    pub url: String,
}

impl PageRef {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

#[async_trait]
pub trait HistorySource: Send + Sync {
    async fn query(&self, text: &str) -> Result<Vec<PageRef>, SourceError>;
}

#[async_trait]
pub trait BookmarkSource: Send + Sync {
    async fn query(&self, text: &str) -> Result<Vec<PageRef>, SourceError>;
}

/// Names of search engines matching a query
#[async_trait]
pub trait SearchEngineSource: Send + Sync {
    async fn query(&self, text: &str) -> Result<Vec<String>, SourceError>;
}

/// Host platform features the engine may rely on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Capabilities {
    pub history: bool,
    pub bookmarks: bool,
}

impl Capabilities {
    /// Neither history nor bookmarks, as on mobile hosts
    pub fn minimal() -> Self {
        Self {
            history: false,
            bookmarks: false,
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            history: true,
            bookmarks: true,
        }
    }
}

/// Every source the engine can consult
#[derive(Clone)]
pub struct CompletionSources {
    pub search_engines: Arc<dyn SearchEngineSource>,
    pub history: Option<Arc<dyn HistorySource>>,
    pub bookmarks: Option<Arc<dyn BookmarkSource>>,
}

impl CompletionSources {
    pub fn new(search_engines: Arc<dyn SearchEngineSource>) -> Self {
        Self {
            search_engines,
            history: None,
            bookmarks: None,
        }
    }

    pub fn with_history(mut self, history: Arc<dyn HistorySource>) -> Self {
        self.history = Some(history);
        self
    }

    pub fn with_bookmarks(mut self, bookmarks: Arc<dyn BookmarkSource>) -> Self {
        self.bookmarks = Some(bookmarks);
        self
    }
}

/// Engine names from the current settings, prefix-matched in configured order
pub struct ConfiguredEngines {
    settings: Arc<dyn SettingsStore>,
}

impl ConfiguredEngines {
    pub fn new(settings: Arc<dyn SettingsStore>) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl SearchEngineSource for ConfiguredEngines {
    async fn query(&self, text: &str) -> Result<Vec<String>, SourceError> {
        let settings = self.settings.get().await?;
        Ok(settings
            .search
            .names()
            .filter(|name| name.starts_with(text))
            .map(str::to_string)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{MemorySettings, Settings};
    use vixen_navigation::SearchEngines;

    #[tokio::test]
    async fn test_configured_engines_prefix() {
        let settings = Settings {
            search: SearchEngines::new(
                "google",
                [
                    ("google", "https://google.com/search?q={}"),
                    ("yahoo", "https://yahoo.com/search?q={}"),
                    ("github", "https://github.com/search?q={}"),
                ],
            )
            .unwrap(),
            ..Default::default()
        };
        let source = ConfiguredEngines::new(Arc::new(MemorySettings::new(settings)));

        assert_eq!(source.query("g").await.unwrap(), vec!["google", "github"]);
        assert_eq!(source.query("").await.unwrap().len(), 3);
        assert!(source.query("bing").await.unwrap().is_empty());
    }

    #[test]
    fn test_capabilities_deserialize() {
        let caps: Capabilities = serde_json::from_str(r#"{"history": false}"#).unwrap();
        assert!(!caps.history);
        assert!(caps.bookmarks);
    }
}
