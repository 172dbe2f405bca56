//! Vixen Navigation
//!
//! Turns console text into destinations:
//! - `search_url` decides between a direct address and a search query
//! - `SearchEngines` expands engine templates with an encoded query
//! - `CommandLine` splits a console line into command, force flag and arguments

mod command;
mod encoding;
mod error;
mod search;
mod urls;

pub use command::{CommandLine, ConsoleCommand};
pub use encoding::encode_component;
pub use error::NavigationError;
pub use search::{SearchEngines, QUERY_PLACEHOLDER};
pub use urls::{is_address, normalize_url, search_url, SUPPORTED_SCHEMES};

pub type Result<T> = std::result::Result<T, NavigationError>;
