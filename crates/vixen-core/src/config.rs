//! Console configuration
//!
//! Loaded once from a JSON document:
//!
//! ```json
//! {
//!   "settings": {
//!     "search": { "default": "google", "engines": { "google": "https://google.com/search?q={}" } },
//!     "properties": { "complete": "sbh" }
//!   },
//!   "capabilities": { "history": true, "bookmarks": true }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use vixen_completion::{Capabilities, Settings};

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub settings: Settings,
    pub capabilities: Capabilities,
}

impl Config {
    /// Parse and validate a configuration document.
    ///
    /// A default engine missing from `engines` is reported here, before any
    /// URL is resolved.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| CoreError::Config(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&contents)?;
        tracing::info!(path = %path.as_ref().display(), "Loaded console configuration");
        Ok(config)
    }

    /// Load `path`, falling back to defaults when the file does not exist
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        match std::fs::metadata(path.as_ref()) {
            Ok(_) => Self::load(path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(
                    path = %path.as_ref().display(),
                    "No console configuration found, using defaults"
                );
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// `<platform config dir>/vixen/settings.json`, relative to the working
    /// directory when the platform has no config dir
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_default()
            .join("vixen")
            .join("settings.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let config = Config::from_json(
            r#"{
                "settings": {
                    "search": {
                        "default": "yahoo",
                        "engines": {
                            "google": "https://google.com/search?q={}",
                            "yahoo": "https://yahoo.com/search?q={}"
                        }
                    }
                },
                "capabilities": { "bookmarks": false }
            }"#,
        )
        .unwrap();
        assert_eq!(config.settings.search.default_name(), "yahoo");
        assert!(config.capabilities.history);
        assert!(!config.capabilities.bookmarks);
        assert_eq!(config.settings.properties.complete, "sbh");
    }

    #[test]
    fn test_missing_default_engine_is_config_error() {
        let result = Config::from_json(
            r#"{"settings": {"search": {"default": "bing", "engines": {"google": "https://g.com/?q={}"}}}}"#,
        );
        match result {
            Err(CoreError::Config(message)) => assert!(message.contains("bing")),
            other => panic!("Expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_default_path() {
        let path = Config::default_path();
        assert!(path.ends_with(Path::new("vixen").join("settings.json")));
        if let Some(dir) = dirs::config_dir() {
            assert!(path.starts_with(dir));
        }
    }

    #[test]
    fn test_json_roundtrip_keeps_engine_order() {
        let config = Config::default();
        let parsed = Config::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let path = std::env::temp_dir().join("vixen-missing-config-for-test.json");
        let config = Config::load_or_default(&path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("vixen-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"settings": {"properties": {"complete": "h"}}}"#).unwrap();
        let config = Config::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.settings.properties.complete, "h");
    }
}
