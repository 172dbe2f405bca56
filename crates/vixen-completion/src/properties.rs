//! Settable properties
//!
//! Each property has a name, a value type, a description and a default.
//! Boolean properties complete as both `name` and `noname`.

use serde::{Deserialize, Serialize};

use crate::error::PropertyError;
use crate::item::{CompletionGroup, CompletionItem, PROPERTIES_GROUP};

pub const DEFAULT_HINTCHARS: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DEFAULT_COMPLETE: &str = "sbh";
pub const DEFAULT_COLORSCHEME: &str = "system";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Boolean,
    String,
    Number,
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PropertyType::Boolean => "boolean",
            PropertyType::String => "string",
            PropertyType::Number => "number",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Boolean(bool),
    Number(i64),
    String(String),
}

impl PropertyValue {
    pub fn property_type(&self) -> PropertyType {
        match self {
            PropertyValue::Boolean(_) => PropertyType::Boolean,
            PropertyValue::Number(_) => PropertyType::Number,
            PropertyValue::String(_) => PropertyType::String,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDef {
    pub name: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub description: String,
    pub default: PropertyValue,
}

impl PropertyDef {
    pub fn new(name: &str, description: &str, default: PropertyValue) -> Self {
        Self {
            name: name.to_string(),
            property_type: default.property_type(),
            description: description.to_string(),
            default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PropertyRegistry {
    defs: Vec<PropertyDef>,
}

impl PropertyRegistry {
    pub fn new(defs: Vec<PropertyDef>) -> Self {
        Self { defs }
    }

    pub fn builtin() -> Self {
        Self::new(vec![
            PropertyDef::new(
                "hintchars",
                "hint characters on follow mode",
                PropertyValue::String(DEFAULT_HINTCHARS.to_string()),
            ),
            PropertyDef::new(
                "smoothscroll",
                "smooth scroll",
                PropertyValue::Boolean(false),
            ),
            PropertyDef::new(
                "complete",
                "which are completed at the open page",
                PropertyValue::String(DEFAULT_COMPLETE.to_string()),
            ),
            PropertyDef::new(
                "colorscheme",
                "color scheme of the console",
                PropertyValue::String(DEFAULT_COLORSCHEME.to_string()),
            ),
            PropertyDef::new(
                "autofocus",
                "focus on the page after it loads",
                PropertyValue::Boolean(true),
            ),
        ])
    }

    pub fn defs(&self) -> &[PropertyDef] {
        &self.defs
    }

    pub fn get(&self, name: &str) -> Option<&PropertyDef> {
        self.defs.iter().find(|def| def.name == name)
    }

    /// Prefix completion over expanded property captions.
    ///
    /// `command` is the console command the items are completed for; each
    /// item's content is `"<command> <caption>"`.
    pub fn complete(&self, command: &str, keywords: &str) -> Vec<CompletionGroup> {
        let items = self
            .defs
            .iter()
            .flat_map(|def| Self::candidates(command, def))
            .filter(|item| item.caption.starts_with(keywords))
            .collect();
        CompletionGroup::single(PROPERTIES_GROUP, items)
    }

    fn candidates(command: &str, def: &PropertyDef) -> Vec<CompletionItem> {
        let item = |caption: String, description: String| {
            CompletionItem::new(caption.as_str(), format!("{} {}", command, caption))
                .with_description(description)
        };

        match def.property_type {
            PropertyType::Boolean => vec![
                item(def.name.clone(), format!("Enable {}", def.description)),
                item(format!("no{}", def.name), format!("Disable {}", def.description)),
            ],
            _ => vec![item(def.name.clone(), format!("Set {}", def.description))],
        }
    }

    /// Parse the argument of a `set` command.
    ///
    /// - `name` turns a boolean on
    /// - `noname` turns a boolean off
    /// - `name=value` assigns a string or number
    pub fn parse_set_option(&self, args: &str) -> Result<(String, PropertyValue), PropertyError> {
        let args = args.trim();

        if let Some((name, value)) = args.split_once('=') {
            let def = self
                .get(name)
                .ok_or_else(|| PropertyError::Unknown(name.to_string()))?;
            let value = match def.property_type {
                PropertyType::String => PropertyValue::String(value.to_string()),
                PropertyType::Number => value.parse().map(PropertyValue::Number).map_err(|_| {
                    PropertyError::InvalidValue {
                        name: name.to_string(),
                        value: value.to_string(),
                    }
                })?,
                PropertyType::Boolean => {
                    return Err(PropertyError::TypeMismatch {
                        name: name.to_string(),
                        expected: PropertyType::Boolean,
                    })
                }
            };
            return Ok((def.name.clone(), value));
        }

        let (def, enabled) = match self.get(args) {
            Some(def) => (def, true),
            None => {
                let def = args
                    .strip_prefix("no")
                    .and_then(|name| self.get(name))
                    .ok_or_else(|| PropertyError::Unknown(args.to_string()))?;
                (def, false)
            }
        };

        if def.property_type != PropertyType::Boolean {
            return Err(PropertyError::TypeMismatch {
                name: def.name.clone(),
                expected: def.property_type,
            });
        }

        Ok((def.name.clone(), PropertyValue::Boolean(enabled)))
    }
}

impl Default for PropertyRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_expansion() {
        let registry = PropertyRegistry::builtin();
        let groups = registry.complete("set", "no");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, PROPERTIES_GROUP);
        assert_eq!(groups[0].captions(), vec!["nosmoothscroll", "noautofocus"]);
        assert_eq!(groups[0].items[1].content, "set noautofocus");
        assert_eq!(
            groups[0].items[1].description.as_deref(),
            Some("Disable focus on the page after it loads")
        );
    }

    #[test]
    fn test_declaration_order() {
        let registry = PropertyRegistry::builtin();
        let groups = registry.complete("set", "");
        assert_eq!(
            groups[0].captions(),
            vec![
                "hintchars",
                "smoothscroll",
                "nosmoothscroll",
                "complete",
                "colorscheme",
                "autofocus",
                "noautofocus",
            ]
        );
        assert_eq!(
            groups[0].items[0].description.as_deref(),
            Some("Set hint characters on follow mode")
        );
        assert_eq!(
            groups[0].items[1].description.as_deref(),
            Some("Enable smooth scroll")
        );
    }

    #[test]
    fn test_no_match() {
        let registry = PropertyRegistry::builtin();
        assert!(registry.complete("set", "zzz").is_empty());
    }

    #[test]
    fn test_parse_set_boolean() {
        let registry = PropertyRegistry::builtin();
        assert_eq!(
            registry.parse_set_option("noautofocus").unwrap(),
            ("autofocus".to_string(), PropertyValue::Boolean(false))
        );
        assert_eq!(
            registry.parse_set_option(" smoothscroll ").unwrap(),
            ("smoothscroll".to_string(), PropertyValue::Boolean(true))
        );
    }

    #[test]
    fn test_parse_set_string() {
        let registry = PropertyRegistry::builtin();
        assert_eq!(
            registry.parse_set_option("hintchars=asdf").unwrap(),
            ("hintchars".to_string(), PropertyValue::String("asdf".to_string()))
        );
    }

    #[test]
    fn test_parse_set_number() {
        let registry = PropertyRegistry::new(vec![PropertyDef::new(
            "scrollstep",
            "scroll step",
            PropertyValue::Number(64),
        )]);
        assert_eq!(
            registry.parse_set_option("scrollstep=32").unwrap(),
            ("scrollstep".to_string(), PropertyValue::Number(32))
        );
        assert!(matches!(
            registry.parse_set_option("scrollstep=fast"),
            Err(PropertyError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_parse_set_errors() {
        let registry = PropertyRegistry::builtin();
        assert_eq!(
            registry.parse_set_option("unknown"),
            Err(PropertyError::Unknown("unknown".to_string()))
        );
        assert!(matches!(
            registry.parse_set_option("hintchars"),
            Err(PropertyError::TypeMismatch { .. })
        ));
        assert!(matches!(
            registry.parse_set_option("nohintchars"),
            Err(PropertyError::TypeMismatch { .. })
        ));
        assert!(matches!(
            registry.parse_set_option("smoothscroll=yes"),
            Err(PropertyError::TypeMismatch { .. })
        ));
    }
}
