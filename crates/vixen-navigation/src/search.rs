//! Search engine registry
//!
//! A default engine name plus an ordered mapping of engine name to URL
//! template. Templates carry exactly one `{}` placeholder which is replaced by
//! the encoded query.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::encoding::encode_component;
use crate::error::NavigationError;
use crate::Result;

/// Placeholder token substituted with the encoded query
pub const QUERY_PLACEHOLDER: &str = "{}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSearchEngines", into = "RawSearchEngines")]
pub struct SearchEngines {
    default_index: usize,
    engines: Vec<(String, String)>,
}

impl SearchEngines {
    /// Build a validated registry.
    ///
    /// Fails with `InvalidConfig` when the default engine is missing from
    /// `engines`, a name is empty, duplicated or contains whitespace, or a
    /// template does not contain exactly one placeholder.
    pub fn new<I, N, T>(default: &str, engines: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, T)>,
        N: Into<String>,
        T: Into<String>,
    {
        let engines: Vec<(String, String)> = engines
            .into_iter()
            .map(|(name, template)| (name.into(), template.into()))
            .collect();

        for (i, (name, template)) in engines.iter().enumerate() {
            if name.is_empty() {
                return Err(NavigationError::InvalidConfig(
                    "engine name cannot be empty".to_string(),
                ));
            }
            if name.chars().any(char::is_whitespace) {
                return Err(NavigationError::InvalidConfig(format!(
                    "engine name contains whitespace: {:?}",
                    name
                )));
            }
            if engines[..i].iter().any(|(other, _)| other == name) {
                return Err(NavigationError::InvalidConfig(format!(
                    "duplicate engine name: {}",
                    name
                )));
            }
            if template.matches(QUERY_PLACEHOLDER).count() != 1 {
                return Err(NavigationError::InvalidConfig(format!(
                    "template of {} must contain exactly one {}",
                    name, QUERY_PLACEHOLDER
                )));
            }
        }

        let default_index = engines
            .iter()
            .position(|(name, _)| name == default)
            .ok_or_else(|| {
                NavigationError::InvalidConfig(format!(
                    "default engine {} is not defined in engines",
                    default
                ))
            })?;

        Ok(Self {
            default_index,
            engines,
        })
    }

    pub fn default_name(&self) -> &str {
        &self.engines[self.default_index].0
    }

    /// Engine names in configured order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.engines.iter().map(|(name, _)| name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.template(name).is_some()
    }

    pub fn template(&self, name: &str) -> Option<&str> {
        self.engines
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, template)| template.as_str())
    }

    /// Resolve `query` with the default engine
    pub fn resolve(&self, query: &str) -> String {
        let (name, template) = &self.engines[self.default_index];
        tracing::debug!(engine = %name, "Resolving query with default engine");
        Self::expand(template, query)
    }

    /// Resolve `query` with the engine called `name`
    pub fn resolve_named(&self, name: &str, query: &str) -> Result<String> {
        let template = self
            .template(name)
            .ok_or_else(|| NavigationError::EngineNotFound(name.to_string()))?;
        tracing::debug!(engine = %name, "Resolving query with named engine");
        Ok(Self::expand(template, query))
    }

    fn expand(template: &str, query: &str) -> String {
        template.replacen(QUERY_PLACEHOLDER, &encode_component(query), 1)
    }
}

impl Default for SearchEngines {
    fn default() -> Self {
        Self {
            default_index: 0,
            engines: vec![
                ("google", "https://google.com/search?q={}"),
                ("yahoo", "https://search.yahoo.com/search?p={}"),
                ("bing", "https://www.bing.com/search?q={}"),
                ("duckduckgo", "https://duckduckgo.com/?q={}"),
                ("twitter", "https://twitter.com/search?q={}"),
                ("wikipedia", "https://en.wikipedia.org/w/index.php?search={}"),
            ]
            .into_iter()
            .map(|(name, template)| (name.to_string(), template.to_string()))
            .collect(),
        }
    }
}

/// Persisted shape: `{ "default": "...", "engines": { name: template } }`
#[derive(Serialize, Deserialize)]
struct RawSearchEngines {
    default: String,
    engines: OrderedEngines,
}

impl TryFrom<RawSearchEngines> for SearchEngines {
    type Error = NavigationError;

    fn try_from(raw: RawSearchEngines) -> Result<Self> {
        SearchEngines::new(&raw.default, raw.engines.0)
    }
}

impl From<SearchEngines> for RawSearchEngines {
    fn from(engines: SearchEngines) -> Self {
        Self {
            default: engines.default_name().to_string(),
            engines: OrderedEngines(engines.engines),
        }
    }
}

/// Engine map that keeps document order
struct OrderedEngines(Vec<(String, String)>);

impl Serialize for OrderedEngines {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, template) in &self.0 {
            map.serialize_entry(name, template)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for OrderedEngines {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct EnginesVisitor;

        impl<'de> Visitor<'de> for EnginesVisitor {
            type Value = OrderedEngines;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of engine name to URL template")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut engines = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, template)) = access.next_entry::<String, String>()? {
                    engines.push((name, template));
                }
                Ok(OrderedEngines(engines))
            }
        }

        deserializer.deserialize_map(EnginesVisitor)
    }
}
