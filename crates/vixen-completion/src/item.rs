//! Completion items and groups

use serde::{Deserialize, Serialize};

pub const CONSOLE_COMMAND_GROUP: &str = "Console Command";
pub const SEARCH_ENGINES_GROUP: &str = "Search Engines";
pub const HISTORY_GROUP: &str = "History";
pub const BOOKMARKS_GROUP: &str = "Bookmarks";
pub const BUFFERS_GROUP: &str = "Buffers";
pub const PROPERTIES_GROUP: &str = "Properties";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionItem {
    /// Text shown in the suggestion list
    pub caption: String,
    /// Text placed in the console when the item is chosen
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CompletionItem {
    pub fn new(caption: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            content: content.into(),
            url: None,
            icon: None,
            description: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_icon(mut self, icon: Option<String>) -> Self {
        self.icon = icon;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionGroup {
    pub name: String,
    pub items: Vec<CompletionItem>,
}

impl CompletionGroup {
    /// A group, or nothing when `items` is empty
    pub fn non_empty(name: impl Into<String>, items: Vec<CompletionItem>) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        Some(Self {
            name: name.into(),
            items,
        })
    }

    /// Zero or one group, as returned by single-source queries
    pub fn single(name: impl Into<String>, items: Vec<CompletionItem>) -> Vec<Self> {
        Self::non_empty(name, items).into_iter().collect()
    }

    pub fn captions(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.caption.as_str()).collect()
    }
}
