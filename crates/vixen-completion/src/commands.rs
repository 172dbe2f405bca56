//! Console command registry
//!
//! Static table of command names with a one-line reference each, used for
//! prefix completion of the first word on the console.

use crate::item::{CompletionGroup, CompletionItem, CONSOLE_COMMAND_GROUP};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDoc {
    pub name: String,
    pub reference: String,
}

#[derive(Debug, Clone)]
pub struct CommandRegistry {
    docs: Vec<CommandDoc>,
}

impl CommandRegistry {
    /// Build a registry; later duplicates of a name are ignored.
    pub fn new<I, N, R>(docs: I) -> Self
    where
        I: IntoIterator<Item = (N, R)>,
        N: Into<String>,
        R: Into<String>,
    {
        let mut unique: Vec<CommandDoc> = Vec::new();
        for (name, reference) in docs {
            let name = name.into();
            if unique.iter().any(|doc| doc.name == name) {
                tracing::warn!(command = %name, "Duplicate command doc ignored");
                continue;
            }
            unique.push(CommandDoc {
                name,
                reference: reference.into(),
            });
        }
        Self { docs: unique }
    }

    pub fn builtin() -> Self {
        Self::new([
            ("set", "Set a value of the property"),
            ("open", "Open a URL or search by keywords in current tab"),
            ("tabopen", "Open a URL or search by keywords in new tab"),
            ("winopen", "Open a URL or search by keywords in new window"),
            ("buffer", "Select tabs by matched keywords"),
            ("bdelete", "Close a certain tab matched by keywords"),
            ("bdeletes", "Close all tabs matched by keywords"),
            ("quit", "Close the current tab"),
            ("q", "Close the current tab"),
            ("quitall", "Close all tabs"),
            ("qa", "Close all tabs"),
            ("addbookmark", "Add current page to bookmarks"),
            ("help", "Open help in new tab"),
        ])
    }

    pub fn get(&self, name: &str) -> Option<&CommandDoc> {
        self.docs.iter().find(|doc| doc.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.docs.iter().map(|doc| doc.name.as_str())
    }

    /// Case-sensitive prefix match over command names, in table order
    pub fn complete(&self, prefix: &str) -> Vec<CompletionGroup> {
        let items = self
            .docs
            .iter()
            .filter(|doc| doc.name.starts_with(prefix))
            .map(|doc| {
                CompletionItem::new(doc.name.as_str(), doc.name.as_str())
                    .with_description(doc.reference.as_str())
            })
            .collect();
        CompletionGroup::single(CONSOLE_COMMAND_GROUP, items)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
