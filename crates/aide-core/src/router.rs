//! Input normalization and command selection
//!
//! Selection order: exact phrase, then the `open browser ` prefix, then the
//! `create file ` prefix. Nothing else matches; ambiguous input is rejected
//! rather than guessed.

use crate::commands::{Command, CommandTable};

pub const OPEN_BROWSER_PREFIX: &str = "open browser ";
pub const CREATE_FILE_PREFIX: &str = "create file ";

/// Trim and lowercase
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Pick the command for a raw line of input, if any
///
/// Prefix matching ignores ASCII case but the argument keeps the case the
/// user typed.
pub fn resolve(table: &CommandTable, input: &str) -> Option<Command> {
    if let Some(command) = table.get(&normalize(input)) {
        return Some(command.clone());
    }

    let trimmed = input.trim();

    if let Some(url) = strip_prefix_ignore_ascii_case(trimmed, OPEN_BROWSER_PREFIX) {
        return Some(Command::OpenBrowser {
            url: Some(url.trim_start().to_string()),
        });
    }

    if let Some(filename) = strip_prefix_ignore_ascii_case(trimmed, CREATE_FILE_PREFIX) {
        return Some(Command::CreateFile {
            filename: Some(filename.trim_start().to_string()),
            content: String::new(),
        });
    }

    None
}

fn strip_prefix_ignore_ascii_case<'a>(input: &'a str, prefix: &str) -> Option<&'a str> {
    let head = input.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&input[prefix.len()..])
    } else {
        None
    }
}
