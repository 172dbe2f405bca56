//! Tab query collaborator

use async_trait::async_trait;

use crate::tab::TabRef;
use crate::Result;

/// Enumerates tabs of the current window.
#[async_trait]
pub trait TabQuery: Send + Sync {
    /// All tabs in window order
    async fn get_all(&self) -> Result<Vec<TabRef>>;

    /// Id of the tab that was selected before the current one
    async fn last_selected_id(&self) -> Result<Option<i64>>;

    /// Tabs whose URL or title contains `text`
    async fn query_by_text(&self, text: &str, exclude_pinned: bool) -> Result<Vec<TabRef>>;
}
