//! Navigation error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Invalid search configuration: {0}")]
    InvalidConfig(String),

    #[error("Search engine not found: {0}")]
    EngineNotFound(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Empty command line")]
    EmptyCommand,
}
