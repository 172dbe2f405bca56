//! Console facade
//!
//! Two paths share one set of settings:
//! - typing: `complete` picks the query shape from the command word
//! - submission: `submit` turns a full line into an action

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use vixen_completion::{
    BookmarkSource, Capabilities, CompletionEngine, CompletionGroup, CompletionSources,
    ConfiguredEngines, HistorySource, MemorySettings, PropertyError, PropertyRegistry,
    PropertyValue,
};
use vixen_navigation::{search_url, CommandLine, ConsoleCommand};
use vixen_tabs::TabQuery;

use crate::config::Config;
use crate::Result;

/// Where a resolved URL should be opened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disposition {
    CurrentTab,
    NewTab,
    NewWindow,
}

/// Outcome of submitting a console line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Submission {
    /// Navigate to a resolved URL
    Navigate { url: String, disposition: Disposition },
    /// A property was assigned
    SetProperty { name: String, value: PropertyValue },
    /// A command the host executes itself (tab and window operations)
    Command { line: CommandLine },
}

pub struct Console {
    settings: MemorySettings,
    properties: Arc<PropertyRegistry>,
    engine: CompletionEngine,
}

impl Console {
    pub fn new(config: Config, tabs: Arc<dyn TabQuery>) -> Self {
        Self::with_sources(config, tabs, None, None)
    }

    pub fn with_sources(
        config: Config,
        tabs: Arc<dyn TabQuery>,
        history: Option<Arc<dyn HistorySource>>,
        bookmarks: Option<Arc<dyn BookmarkSource>>,
    ) -> Self {
        let settings = MemorySettings::new(config.settings);
        let properties = Arc::new(PropertyRegistry::builtin());

        let mut sources =
            CompletionSources::new(Arc::new(ConfiguredEngines::new(Arc::new(settings.clone()))));
        if let Some(history) = history {
            sources = sources.with_history(history);
        }
        if let Some(bookmarks) = bookmarks {
            sources = sources.with_bookmarks(bookmarks);
        }

        let engine = CompletionEngine::new(
            Arc::new(settings.clone()),
            tabs,
            sources,
            config.capabilities,
        )
        .with_properties(Arc::clone(&properties));

        let search = settings.snapshot().search;
        tracing::info!(
            default_engine = %search.default_name(),
            history = config.capabilities.history,
            bookmarks = config.capabilities.bookmarks,
            "Console initialized"
        );

        Self {
            settings,
            properties,
            engine,
        }
    }

    pub fn settings(&self) -> &MemorySettings {
        &self.settings
    }

    pub fn engine(&self) -> &CompletionEngine {
        &self.engine
    }

    pub fn capabilities(&self) -> Capabilities {
        self.engine.capabilities()
    }

    /// Resolve free text to a destination URL with the current engines
    pub fn resolve_command_url(&self, input: &str) -> String {
        search_url(input, &self.settings.snapshot().search)
    }

    /// Resolve a submitted console line.
    ///
    /// `set` assignments are applied to the live settings before returning.
    pub fn submit(&self, line: &str) -> Result<Submission> {
        let line = CommandLine::parse(line)?;

        let disposition = match line.command {
            ConsoleCommand::Open => Some(Disposition::CurrentTab),
            ConsoleCommand::TabOpen => Some(Disposition::NewTab),
            ConsoleCommand::WinOpen => Some(Disposition::NewWindow),
            _ => None,
        };

        if let Some(disposition) = disposition {
            let url = self.resolve_command_url(&line.args);
            tracing::debug!(command = %line.command, url = %url, "Resolved navigation");
            return Ok(Submission::Navigate { url, disposition });
        }

        if line.command == ConsoleCommand::Set {
            let (name, value) = self.properties.parse_set_option(&line.args)?;
            let def = self
                .properties
                .get(&name)
                .ok_or_else(|| PropertyError::Unknown(name.clone()))?;
            self.settings.set_property(def, value.clone())?;
            return Ok(Submission::SetProperty { name, value });
        }

        Ok(Submission::Command { line })
    }

    /// Suggestions for a partially typed console line
    pub async fn complete(&self, line: &str) -> Result<Vec<CompletionGroup>> {
        let line = line.trim_start();
        let (word, keywords) = match line.split_once(char::is_whitespace) {
            Some((word, keywords)) => (word, keywords.trim_start()),
            None => return Ok(self.engine.query_console_command(line)),
        };

        let (name, force) = match word.strip_suffix('!') {
            Some(name) => (name, true),
            None => (word, false),
        };

        let groups = match ConsoleCommand::from_name(name) {
            Some(ConsoleCommand::Open | ConsoleCommand::TabOpen | ConsoleCommand::WinOpen) => {
                self.engine.query_open(word, keywords).await?
            }
            Some(ConsoleCommand::Buffer) => self.engine.query_buffer(word, keywords).await?,
            Some(ConsoleCommand::BDelete | ConsoleCommand::BDeletes) if force => {
                self.engine.query_bdelete_force(word, keywords).await?
            }
            Some(ConsoleCommand::BDelete | ConsoleCommand::BDeletes) => {
                self.engine.query_bdelete(word, keywords).await?
            }
            Some(ConsoleCommand::Set) => self.engine.query_set(word, keywords),
            _ => Vec::new(),
        };

        Ok(groups)
    }
}
