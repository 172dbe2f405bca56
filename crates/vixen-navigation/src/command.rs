//! Console command lines
//!
//! A line is `<command>[!] [args]`:
//! - `tabopen yahoo an apple`: open a search in a new tab
//! - `bdelete! github`: close a tab, pinned tabs included
//! - `set noautofocus`: change a property

use serde::{Deserialize, Serialize};

use crate::error::NavigationError;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleCommand {
    /// Open a URL or search in the current tab
    Open,
    /// Open a URL or search in a new tab
    TabOpen,
    /// Open a URL or search in a new window
    WinOpen,
    /// Select a tab
    Buffer,
    /// Close one matching tab
    BDelete,
    /// Close all matching tabs
    BDeletes,
    Quit,
    QuitAll,
    AddBookmark,
    Set,
    Help,
}

impl ConsoleCommand {
    /// Look up a command by its full name or alias
    pub fn from_name(name: &str) -> Option<Self> {
        let command = match name {
            "o" | "open" => ConsoleCommand::Open,
            "t" | "tabopen" => ConsoleCommand::TabOpen,
            "w" | "winopen" => ConsoleCommand::WinOpen,
            "b" | "buffer" => ConsoleCommand::Buffer,
            "bd" | "bdel" | "bdelete" => ConsoleCommand::BDelete,
            "bdeletes" => ConsoleCommand::BDeletes,
            "q" | "quit" => ConsoleCommand::Quit,
            "qa" | "quitall" => ConsoleCommand::QuitAll,
            "addbookmark" => ConsoleCommand::AddBookmark,
            "set" => ConsoleCommand::Set,
            "help" => ConsoleCommand::Help,
            _ => return None,
        };
        Some(command)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ConsoleCommand::Open => "open",
            ConsoleCommand::TabOpen => "tabopen",
            ConsoleCommand::WinOpen => "winopen",
            ConsoleCommand::Buffer => "buffer",
            ConsoleCommand::BDelete => "bdelete",
            ConsoleCommand::BDeletes => "bdeletes",
            ConsoleCommand::Quit => "quit",
            ConsoleCommand::QuitAll => "quitall",
            ConsoleCommand::AddBookmark => "addbookmark",
            ConsoleCommand::Set => "set",
            ConsoleCommand::Help => "help",
        }
    }

    /// Commands whose arguments resolve to a destination URL
    pub fn opens_url(&self) -> bool {
        matches!(
            self,
            ConsoleCommand::Open | ConsoleCommand::TabOpen | ConsoleCommand::WinOpen
        )
    }
}

impl std::fmt::Display for ConsoleCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandLine {
    pub command: ConsoleCommand,
    /// Set by a trailing `!` on the command word
    pub force: bool,
    /// Arguments after the command word, trimmed
    pub args: String,
}

impl CommandLine {
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        if line.is_empty() {
            return Err(NavigationError::EmptyCommand);
        }

        let (word, args) = match line.split_once(char::is_whitespace) {
            Some((word, args)) => (word, args.trim()),
            None => (line, ""),
        };

        let (name, force) = match word.strip_suffix('!') {
            Some(name) => (name, true),
            None => (word, false),
        };

        let command = ConsoleCommand::from_name(name)
            .ok_or_else(|| NavigationError::UnknownCommand(word.to_string()))?;

        Ok(Self {
            command,
            force,
            args: args.to_string(),
        })
    }
}
