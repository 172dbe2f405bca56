//! Tab error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TabError {
    #[error("Tab not found: {0}")]
    NotFound(i64),

    #[error("Tab query failed: {0}")]
    Unavailable(String),
}
