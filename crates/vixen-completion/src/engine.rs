//! Completion engine
//!
//! Answers the five console query shapes:
//! - console command names
//! - `open` targets from search engines, history and bookmarks
//! - buffer selectors (`3`, `%`, `#`, free text)
//! - tabs to delete, with or without pinned tabs
//! - `set` properties
//!
//! Sources for `open` are queried concurrently and joined; groups always
//! follow the configured source order.

use futures_util::future::{join_all, BoxFuture};
use std::sync::Arc;

use vixen_tabs::{TabQuery, TabRef};

use crate::commands::CommandRegistry;
use crate::error::{CompletionError, SourceError};
use crate::item::{CompletionGroup, CompletionItem, BUFFERS_GROUP};
use crate::properties::PropertyRegistry;
use crate::settings::{CompletionSource, SettingsStore};
use crate::sources::{BookmarkSource, Capabilities, CompletionSources, HistorySource, PageRef};
use crate::Result;

type SourceLookup<'a> =
    BoxFuture<'a, (CompletionSource, std::result::Result<Vec<CompletionItem>, SourceError>)>;

pub struct CompletionEngine {
    commands: Arc<CommandRegistry>,
    properties: Arc<PropertyRegistry>,
    settings: Arc<dyn SettingsStore>,
    tabs: Arc<dyn TabQuery>,
    sources: CompletionSources,
    capabilities: Capabilities,
}

impl CompletionEngine {
    pub fn new(
        settings: Arc<dyn SettingsStore>,
        tabs: Arc<dyn TabQuery>,
        sources: CompletionSources,
        capabilities: Capabilities,
    ) -> Self {
        Self {
            commands: Arc::new(CommandRegistry::builtin()),
            properties: Arc::new(PropertyRegistry::builtin()),
            settings,
            tabs,
            sources,
            capabilities,
        }
    }

    pub fn with_commands(mut self, commands: Arc<CommandRegistry>) -> Self {
        self.commands = commands;
        self
    }

    pub fn with_properties(mut self, properties: Arc<PropertyRegistry>) -> Self {
        self.properties = properties;
        self
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn query_console_command(&self, prefix: &str) -> Vec<CompletionGroup> {
        self.commands.complete(prefix)
    }

    pub fn query_set(&self, name: &str, keywords: &str) -> Vec<CompletionGroup> {
        self.properties.complete(name, keywords)
    }

    /// Completion for `open`, `tabopen` and `winopen`.
    ///
    /// A failing source is logged and left out; the other groups are still
    /// returned.
    pub async fn query_open(&self, name: &str, keywords: &str) -> Result<Vec<CompletionGroup>> {
        let settings = self
            .settings
            .get()
            .await
            .map_err(|e| CompletionError::Settings(e.to_string()))?;

        let mut lookups: Vec<SourceLookup<'_>> = Vec::new();
        for source in settings.properties.completion_sources() {
            match source {
                CompletionSource::SearchEngines => {
                    let engines = Arc::clone(&self.sources.search_engines);
                    lookups.push(Box::pin(async move {
                        let items = engines.query(keywords).await.map(|names| {
                            names
                                .into_iter()
                                .map(|engine| {
                                    let content = format!("{} {}", name, engine);
                                    CompletionItem::new(engine, content)
                                })
                                .collect::<Vec<_>>()
                        });
                        (source, items)
                    }));
                }
                CompletionSource::History => match self.history_source() {
                    Some(history) => lookups.push(Box::pin(async move {
                        let items = history
                            .query(keywords)
                            .await
                            .map(|pages| Self::page_items(name, pages));
                        (source, items)
                    })),
                    None => tracing::debug!("History completion unavailable on this host"),
                },
                CompletionSource::Bookmarks => match self.bookmark_source() {
                    Some(bookmarks) => lookups.push(Box::pin(async move {
                        let items = bookmarks
                            .query(keywords)
                            .await
                            .map(|pages| Self::page_items(name, pages));
                        (source, items)
                    })),
                    None => tracing::debug!("Bookmark completion unavailable on this host"),
                },
            }
        }

        let groups = join_all(lookups)
            .await
            .into_iter()
            .filter_map(|(source, result)| match result {
                Ok(items) => CompletionGroup::non_empty(source.group_name(), items),
                Err(e) => {
                    tracing::warn!(source = %source.code(), error = %e, "Completion source failed");
                    None
                }
            })
            .collect();

        Ok(groups)
    }

    /// Completion for `buffer`.
    ///
    /// `keywords` selects tabs by 1-based index, `%` (active tab), `#` (last
    /// selected tab) or free text. Any finite number is an index and is
    /// truncated to its leading integer, so `2.0` and `2.7` select tab 2.
    pub async fn query_buffer(&self, name: &str, keywords: &str) -> Result<Vec<CompletionGroup>> {
        let last_id = self.tabs.last_selected_id().await?;
        let trimmed = keywords.trim();

        let tabs: Vec<TabRef> = if is_numeric_selector(trimmed) {
            let all = self.tabs.get_all().await?;
            leading_integer(trimmed)
                .and_then(|number| number.checked_sub(1))
                .and_then(|index| usize::try_from(index).ok())
                .and_then(|index| all.into_iter().nth(index))
                .into_iter()
                .collect()
        } else if trimmed == "%" {
            let all = self.tabs.get_all().await?;
            all.into_iter().filter(|t| t.active).take(1).collect()
        } else if trimmed == "#" {
            match last_id {
                Some(id) => {
                    let all = self.tabs.get_all().await?;
                    all.into_iter().filter(|t| t.id == id).take(1).collect()
                }
                None => Vec::new(),
            }
        } else {
            self.tabs.query_by_text(keywords, false).await?
        };

        let items = tabs
            .into_iter()
            .map(|tab| {
                let flag = if tab.active {
                    '%'
                } else if Some(tab.id) == last_id {
                    '#'
                } else {
                    ' '
                };
                CompletionItem::new(
                    format!("{}: {} {}", tab.index + 1, flag, tab.display_title()),
                    format!("{} {}", name, tab.display_title()),
                )
                .with_url(tab.url)
                .with_icon(tab.fav_icon_url)
            })
            .collect();

        Ok(CompletionGroup::single(BUFFERS_GROUP, items))
    }

    /// Completion for `bdelete`; pinned tabs are not offered.
    pub async fn query_bdelete(&self, name: &str, keywords: &str) -> Result<Vec<CompletionGroup>> {
        self.query_tabs(name, true, keywords).await
    }

    /// Completion for `bdelete!`; pinned tabs are offered too.
    pub async fn query_bdelete_force(
        &self,
        name: &str,
        keywords: &str,
    ) -> Result<Vec<CompletionGroup>> {
        self.query_tabs(name, false, keywords).await
    }

    async fn query_tabs(
        &self,
        name: &str,
        exclude_pinned: bool,
        keywords: &str,
    ) -> Result<Vec<CompletionGroup>> {
        let tabs = self.tabs.query_by_text(keywords, exclude_pinned).await?;
        let items = tabs
            .into_iter()
            .map(|tab| {
                CompletionItem::new(
                    tab.display_title(),
                    format!("{} {}", name, tab.display_title()),
                )
                .with_url(tab.url)
                .with_icon(tab.fav_icon_url)
            })
            .collect();
        Ok(CompletionGroup::single(BUFFERS_GROUP, items))
    }

    fn history_source(&self) -> Option<Arc<dyn HistorySource>> {
        if !self.capabilities.history {
            return None;
        }
        self.sources.history.clone()
    }

    fn bookmark_source(&self) -> Option<Arc<dyn BookmarkSource>> {
        if !self.capabilities.bookmarks {
            return None;
        }
        self.sources.bookmarks.clone()
    }

    fn page_items(name: &str, pages: Vec<PageRef>) -> Vec<CompletionItem> {
        pages
            .into_iter()
            .map(|page| {
                let caption = if page.title.is_empty() {
                    page.url.clone()
                } else {
                    page.title
                };
                CompletionItem::new(caption, format!("{} {}", name, page.url)).with_url(page.url)
            })
            .collect()
    }
}

fn is_numeric_selector(selector: &str) -> bool {
    selector
        .parse::<f64>()
        .map(|number| number.is_finite())
        .unwrap_or(false)
}

/// Optional sign and the digits that follow it; `None` when there are none
fn leading_integer(selector: &str) -> Option<i64> {
    let sign = usize::from(selector.starts_with(['+', '-']));
    let end = selector[sign..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(selector.len(), |i| i + sign);
    selector[..end].parse().ok()
}
