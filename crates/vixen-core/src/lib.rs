//! Vixen Core
//!
//! The console's command-resolution and completion core. Settings, tabs,
//! history and bookmarks belong to the host; this layer only reads them.

mod config;
mod console;
mod error;

pub use config::Config;
pub use console::{Console, Disposition, Submission};
pub use error::CoreError;

// Re-export core components
pub use vixen_completion::{
    BookmarkSource, Capabilities, CompletionEngine, CompletionGroup, CompletionItem,
    CompletionSource, HistorySource, MemorySettings, PageRef, PropertyValue, Settings,
    SettingsStore,
};
pub use vixen_navigation::{
    normalize_url, search_url, CommandLine, ConsoleCommand, NavigationError, SearchEngines,
};
pub use vixen_tabs::{TabError, TabList, TabQuery, TabRef};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
