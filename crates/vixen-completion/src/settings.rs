//! Console settings as seen by the completion engine

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use vixen_navigation::SearchEngines;

use crate::error::{PropertyError, SourceError};
use crate::item::{BOOKMARKS_GROUP, HISTORY_GROUP, SEARCH_ENGINES_GROUP};
use crate::properties::{
    PropertyDef, PropertyType, PropertyValue, DEFAULT_COLORSCHEME, DEFAULT_COMPLETE,
    DEFAULT_HINTCHARS,
};

/// Source consulted by `open`-style completion, keyed by a one-letter code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionSource {
    /// `s`
    SearchEngines,
    /// `h`
    History,
    /// `b`
    Bookmarks,
}

impl CompletionSource {
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            's' => Some(CompletionSource::SearchEngines),
            'h' => Some(CompletionSource::History),
            'b' => Some(CompletionSource::Bookmarks),
            _ => None,
        }
    }

    pub fn code(&self) -> char {
        match self {
            CompletionSource::SearchEngines => 's',
            CompletionSource::History => 'h',
            CompletionSource::Bookmarks => 'b',
        }
    }

    pub fn group_name(&self) -> &'static str {
        match self {
            CompletionSource::SearchEngines => SEARCH_ENGINES_GROUP,
            CompletionSource::History => HISTORY_GROUP,
            CompletionSource::Bookmarks => BOOKMARKS_GROUP,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Properties {
    pub hintchars: String,
    pub smoothscroll: bool,
    /// Completion source codes in display order, e.g. `sbh`
    pub complete: String,
    pub colorscheme: String,
    pub autofocus: bool,
    /// Values of registry properties without a dedicated field
    #[serde(flatten)]
    pub extra: BTreeMap<String, PropertyValue>,
}

impl Properties {
    /// Configured completion sources in order; unknown codes are skipped.
    pub fn completion_sources(&self) -> Vec<CompletionSource> {
        self.complete
            .chars()
            .filter_map(|code| {
                let source = CompletionSource::from_code(code);
                if source.is_none() {
                    tracing::debug!(code = %code, "Ignoring unknown completion source code");
                }
                source
            })
            .collect()
    }

    /// Assign the property declared by `def`.
    ///
    /// The value must have the declared type. Properties without a field of
    /// their own are stored in `extra`.
    pub fn set(&mut self, def: &PropertyDef, value: PropertyValue) -> Result<(), PropertyError> {
        let mismatch = |expected| PropertyError::TypeMismatch {
            name: def.name.clone(),
            expected,
        };

        if value.property_type() != def.property_type {
            return Err(mismatch(def.property_type));
        }

        match (def.name.as_str(), value) {
            ("hintchars", PropertyValue::String(v)) => self.hintchars = v,
            ("complete", PropertyValue::String(v)) => self.complete = v,
            ("colorscheme", PropertyValue::String(v)) => self.colorscheme = v,
            ("smoothscroll", PropertyValue::Boolean(v)) => self.smoothscroll = v,
            ("autofocus", PropertyValue::Boolean(v)) => self.autofocus = v,
            ("hintchars" | "complete" | "colorscheme", _) => {
                return Err(mismatch(PropertyType::String))
            }
            ("smoothscroll" | "autofocus", _) => return Err(mismatch(PropertyType::Boolean)),
            (name, value) => {
                self.extra.insert(name.to_string(), value);
            }
        }
        Ok(())
    }
}

impl Default for Properties {
    fn default() -> Self {
        Self {
            hintchars: DEFAULT_HINTCHARS.to_string(),
            smoothscroll: false,
            complete: DEFAULT_COMPLETE.to_string(),
            colorscheme: DEFAULT_COLORSCHEME.to_string(),
            autofocus: true,
            extra: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub search: SearchEngines,
    pub properties: Properties,
}

/// Supplies the current settings on every query.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn get(&self) -> Result<Settings, SourceError>;
}

/// Settings held in memory and replaceable at runtime
pub struct MemorySettings {
    settings: Arc<RwLock<Settings>>,
}

impl MemorySettings {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(RwLock::new(settings)),
        }
    }

    pub fn snapshot(&self) -> Settings {
        self.settings.read().clone()
    }

    pub fn replace(&self, settings: Settings) {
        *self.settings.write() = settings;
    }

    /// Apply a property assignment to the live settings
    pub fn set_property(&self, def: &PropertyDef, value: PropertyValue) -> Result<(), PropertyError> {
        self.settings.write().properties.set(def, value)?;
        tracing::info!(property = %def.name, "Property updated");
        Ok(())
    }
}

impl Default for MemorySettings {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl Clone for MemorySettings {
    fn clone(&self) -> Self {
        Self {
            settings: Arc::clone(&self.settings),
        }
    }
}

#[async_trait]
impl SettingsStore for MemorySettings {
    async fn get(&self) -> Result<Settings, SourceError> {
        Ok(self.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::PropertyRegistry;

    #[test]
    fn test_completion_sources_order() {
        let properties = Properties {
            complete: "hxbs".to_string(),
            ..Default::default()
        };
        assert_eq!(
            properties.completion_sources(),
            vec![
                CompletionSource::History,
                CompletionSource::Bookmarks,
                CompletionSource::SearchEngines,
            ]
        );
    }

    #[test]
    fn test_deserialize_partial_settings() {
        let json = r#"{
            "search": {
                "default": "yahoo",
                "engines": {
                    "google": "https://google.com/search?q={}",
                    "yahoo": "https://yahoo.com/search?q={}"
                }
            },
            "properties": { "complete": "bh" }
        }"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.search.default_name(), "yahoo");
        assert_eq!(settings.properties.complete, "bh");
        assert_eq!(settings.properties.hintchars, DEFAULT_HINTCHARS);
        assert!(settings.properties.autofocus);
    }

    #[test]
    fn test_properties_set() {
        let registry = PropertyRegistry::builtin();
        let def = |name| registry.get(name).unwrap();
        let mut properties = Properties::default();
        properties
            .set(def("autofocus"), PropertyValue::Boolean(false))
            .unwrap();
        assert!(!properties.autofocus);
        properties
            .set(def("complete"), PropertyValue::String("h".to_string()))
            .unwrap();
        assert_eq!(properties.complete, "h");

        assert_eq!(
            properties.set(def("autofocus"), PropertyValue::String("yes".to_string())),
            Err(PropertyError::TypeMismatch {
                name: "autofocus".to_string(),
                expected: PropertyType::Boolean,
            })
        );
    }

    #[test]
    fn test_properties_set_follows_registry() {
        let registry = PropertyRegistry::new(vec![
            PropertyDef::new("scrollstep", "scroll step", PropertyValue::Number(64)),
            PropertyDef::new("autofocus", "focus on load", PropertyValue::String("page".into())),
        ]);
        let mut properties = Properties::default();

        let (name, value) = registry.parse_set_option("scrollstep=32").unwrap();
        properties.set(registry.get(&name).unwrap(), value).unwrap();
        assert_eq!(
            properties.extra.get("scrollstep"),
            Some(&PropertyValue::Number(32))
        );

        assert!(matches!(
            properties.set(
                registry.get("scrollstep").unwrap(),
                PropertyValue::Boolean(true)
            ),
            Err(PropertyError::TypeMismatch { .. })
        ));
        assert!(matches!(
            properties.set(
                registry.get("autofocus").unwrap(),
                PropertyValue::String("page".to_string())
            ),
            Err(PropertyError::TypeMismatch { .. })
        ));
        assert!(properties.autofocus);
    }

    #[test]
    fn test_extra_properties_roundtrip() {
        let json = r#"{ "complete": "s", "scrollstep": 32 }"#;
        let properties: Properties = serde_json::from_str(json).unwrap();
        assert_eq!(properties.complete, "s");
        assert_eq!(
            properties.extra.get("scrollstep"),
            Some(&PropertyValue::Number(32))
        );
        let value = serde_json::to_value(&properties).unwrap();
        assert_eq!(value["scrollstep"], 32);
    }

    #[tokio::test]
    async fn test_memory_settings_shared() {
        let store = MemorySettings::default();
        let handle = store.clone();
        let registry = PropertyRegistry::builtin();
        handle
            .set_property(
                registry.get("smoothscroll").unwrap(),
                PropertyValue::Boolean(true),
            )
            .unwrap();
        assert!(store.get().await.unwrap().properties.smoothscroll);
    }
}
