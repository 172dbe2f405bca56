//! Completion error types

use thiserror::Error;

use crate::properties::PropertyType;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompletionError {
    #[error("Settings unavailable: {0}")]
    Settings(String),

    #[error("Tab error: {0}")]
    Tab(#[from] vixen_tabs::TabError),
}

/// Failure reported by an external completion source
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("{0} lookup is not supported on this platform")]
    Unsupported(&'static str),

    #[error("{source_name} lookup failed: {message}")]
    Failed {
        source_name: &'static str,
        message: String,
    },
}

/// Rejected `set` argument or property assignment
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PropertyError {
    #[error("Unknown property: {0}")]
    Unknown(String),

    #[error("Property {name} expects a {expected} value")]
    TypeMismatch { name: String, expected: PropertyType },

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}
