//! Tab reference

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabRef {
    pub id: i64,
    /// Zero-based position in the window
    pub index: usize,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub fav_icon_url: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub pinned: bool,
}

impl TabRef {
    pub fn new(id: i64, index: usize, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id,
            index,
            title: title.into(),
            url: url.into(),
            fav_icon_url: None,
            active: false,
            pinned: false,
        }
    }

    /// Case-insensitive substring match on URL or title
    pub fn matches_text(&self, text: &str) -> bool {
        let needle = text.to_lowercase();
        self.url.to_lowercase().contains(&needle) || self.title.to_lowercase().contains(&needle)
    }

    /// Get display title (with fallback to URL)
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.url
        } else {
            &self.title
        }
    }
}
