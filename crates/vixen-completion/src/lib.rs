//! Vixen Completion
//!
//! Suggestions for the console while the user types. Registries for command
//! names and properties are static; tabs, history, bookmarks and settings are
//! read from collaborators on every query.

mod commands;
mod engine;
mod error;
mod item;
mod properties;
mod settings;
mod sources;

pub use commands::{CommandDoc, CommandRegistry};
pub use engine::CompletionEngine;
pub use error::{CompletionError, PropertyError, SourceError};
pub use item::{
    CompletionGroup, CompletionItem, BOOKMARKS_GROUP, BUFFERS_GROUP, CONSOLE_COMMAND_GROUP,
    HISTORY_GROUP, PROPERTIES_GROUP, SEARCH_ENGINES_GROUP,
};
pub use properties::{PropertyDef, PropertyRegistry, PropertyType, PropertyValue};
pub use settings::{CompletionSource, MemorySettings, Properties, Settings, SettingsStore};
pub use sources::{
    BookmarkSource, Capabilities, CompletionSources, ConfiguredEngines, HistorySource, PageRef,
    SearchEngineSource,
};

pub type Result<T> = std::result::Result<T, CompletionError>;
