//! Command inventory and the phrase table that selects among them
//!
//! `CommandTable` is built once at startup and only read afterwards.

use std::path::PathBuf;

/// Every action the assistant can perform
///
/// Variants carrying arguments use `None` for "use the default", which is
/// what an exact phrase from the table produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the default browser at `url` (or the default search page)
    OpenBrowser { url: Option<String> },
    /// Start the platform text editor
    OpenNotepad,
    /// Start the platform calculator
    OpenCalculator,
    /// List the first entries of `directory` (or the working directory)
    ListFiles { directory: Option<PathBuf> },
    /// Create or overwrite `filename` with `content`
    CreateFile {
        filename: Option<String>,
        content: String,
    },
    GetTime,
    GetDate,
    SystemInfo,
    /// Always refused
    Shutdown,
    Help,
}

impl Command {
    /// Canonical phrase for this command
    pub fn key(&self) -> &'static str {
        match self {
            Command::OpenBrowser { .. } => "open browser",
            Command::OpenNotepad => "open notepad",
            Command::OpenCalculator => "open calculator",
            Command::ListFiles { .. } => "list files",
            Command::CreateFile { .. } => "create file",
            Command::GetTime => "get time",
            Command::GetDate => "get date",
            Command::SystemInfo => "system info",
            Command::Shutdown => "shutdown",
            Command::Help => "help",
        }
    }
}

/// Immutable mapping from normalized phrase to command
#[derive(Debug, Clone)]
pub struct CommandTable {
    entries: Vec<(&'static str, Command)>,
}

impl CommandTable {
    /// The table every assistant ships with, in help-listing order
    pub fn standard() -> Self {
        let commands = vec![
            Command::OpenBrowser { url: None },
            Command::OpenNotepad,
            Command::OpenCalculator,
            Command::ListFiles { directory: None },
            Command::CreateFile {
                filename: None,
                content: String::new(),
            },
            Command::GetTime,
            Command::GetDate,
            Command::SystemInfo,
            Command::Shutdown,
            Command::Help,
        ];

        Self {
            entries: commands.into_iter().map(|c| (c.key(), c)).collect(),
        }
    }

    /// Exact lookup; `phrase` must already be normalized
    pub fn get(&self, phrase: &str) -> Option<&Command> {
        self.entries
            .iter()
            .find(|(key, _)| *key == phrase)
            .map(|(_, command)| command)
    }

    /// Keys in registration order
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::standard()
    }
}
