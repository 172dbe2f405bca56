//! In-memory tab list
//!
//! Keeps tabs in window order along with the previously selected tab, and
//! answers `TabQuery` lookups from that snapshot.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::error::TabError;
use crate::query::TabQuery;
use crate::tab::TabRef;
use crate::Result;

#[derive(Debug, Default)]
struct TabListState {
    tabs: Vec<TabRef>,
    last_selected_id: Option<i64>,
    next_id: i64,
}

impl TabListState {
    fn reindex(&mut self) {
        for (index, tab) in self.tabs.iter_mut().enumerate() {
            tab.index = index;
        }
    }

    fn position(&self, tab_id: i64) -> Result<usize> {
        self.tabs
            .iter()
            .position(|t| t.id == tab_id)
            .ok_or(TabError::NotFound(tab_id))
    }
}

pub struct TabList {
    state: Arc<RwLock<TabListState>>,
}

impl TabList {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(TabListState {
                next_id: 1,
                ..Default::default()
            })),
        }
    }

    /// Build from an existing snapshot; indices are reassigned by position.
    pub fn from_tabs(tabs: Vec<TabRef>) -> Self {
        let next_id = tabs.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let mut state = TabListState {
            tabs,
            last_selected_id: None,
            next_id,
        };
        state.reindex();
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Append a new background tab
    pub fn open(&self, title: impl Into<String>, url: impl Into<String>) -> TabRef {
        let mut state = self.state.write();
        let id = state.next_id;
        state.next_id += 1;
        let index = state.tabs.len();
        let tab = TabRef::new(id, index, title, url);
        state.tabs.push(tab.clone());

        tracing::debug!(tab_id = id, url = %tab.url, "Opened tab");

        tab
    }

    /// Select a tab, remembering the previously active one
    pub fn activate(&self, tab_id: i64) -> Result<TabRef> {
        let mut state = self.state.write();
        let pos = state.position(tab_id)?;

        let previous = state.tabs.iter().find(|t| t.active).map(|t| t.id);
        if let Some(previous) = previous.filter(|id| *id != tab_id) {
            state.last_selected_id = Some(previous);
        }

        for tab in state.tabs.iter_mut() {
            tab.active = tab.id == tab_id;
        }

        tracing::debug!(tab_id, last_selected = ?state.last_selected_id, "Activated tab");

        Ok(state.tabs[pos].clone())
    }

    pub fn set_pinned(&self, tab_id: i64, pinned: bool) -> Result<TabRef> {
        let mut state = self.state.write();
        let pos = state.position(tab_id)?;
        state.tabs[pos].pinned = pinned;
        Ok(state.tabs[pos].clone())
    }

    pub fn close(&self, tab_id: i64) -> Result<()> {
        let mut state = self.state.write();
        let pos = state.position(tab_id)?;
        state.tabs.remove(pos);
        state.reindex();
        if state.last_selected_id == Some(tab_id) {
            state.last_selected_id = None;
        }

        tracing::debug!(tab_id, "Closed tab");

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.state.read().tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().tabs.is_empty()
    }
}

impl Default for TabList {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for TabList {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

#[async_trait]
impl TabQuery for TabList {
    async fn get_all(&self) -> Result<Vec<TabRef>> {
        Ok(self.state.read().tabs.clone())
    }

    async fn last_selected_id(&self) -> Result<Option<i64>> {
        Ok(self.state.read().last_selected_id)
    }

    async fn query_by_text(&self, text: &str, exclude_pinned: bool) -> Result<Vec<TabRef>> {
        Ok(self
            .state
            .read()
            .tabs
            .iter()
            .filter(|t| t.matches_text(text))
            .filter(|t| !(exclude_pinned && t.pinned))
            .cloned()
            .collect())
    }
}
