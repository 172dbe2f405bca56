//! Vixen Tabs
//!
//! Read-only view of the browser's open tabs as consumed by the console.
//! The host owns tab lifecycle; the console only enumerates and filters.

mod error;
mod list;
mod query;
mod tab;

pub use error::TabError;
pub use list::TabList;
pub use query::TabQuery;
pub use tab::TabRef;

pub type Result<T> = std::result::Result<T, TabError>;
