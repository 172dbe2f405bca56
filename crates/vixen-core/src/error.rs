//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Navigation error: {0}")]
    Navigation(#[from] vixen_navigation::NavigationError),

    #[error("Tab error: {0}")]
    Tab(#[from] vixen_tabs::TabError),

    #[error("Completion error: {0}")]
    Completion(#[from] vixen_completion::CompletionError),

    #[error("Property error: {0}")]
    Property(#[from] vixen_completion::PropertyError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
