//! Directory listing and file creation

use std::fs;
use std::path::Path;

use crate::errors::{AssistantError, Result};

/// At most this many entries are listed
pub const LIST_LIMIT: usize = 10;

pub const DEFAULT_DIRECTORY: &str = ".";

/// List the first `LIST_LIMIT` entries of `directory`, sorted by name
///
/// # Errors
///
/// Returns `AssistantError::ListFiles` if the directory cannot be read.
pub fn list_files(directory: Option<&Path>) -> Result<String> {
    let directory = directory.unwrap_or_else(|| Path::new(DEFAULT_DIRECTORY));
    let fail = |e: std::io::Error| AssistantError::ListFiles {
        directory: directory.display().to_string(),
        reason: e.to_string(),
    };

    let mut names = fs::read_dir(directory)
        .map_err(fail)?
        .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(fail)?;
    names.sort();
    names.truncate(LIST_LIMIT);

    Ok(format!(
        "Files in {}: {}",
        directory.display(),
        names.join(", ")
    ))
}

/// Create or overwrite `filename` with `content`
///
/// # Errors
///
/// Returns `AssistantError::MissingArgument` for an empty name and
/// `AssistantError::CreateFile` if the write fails.
pub fn create_file(filename: &str, content: &str) -> Result<String> {
    if filename.is_empty() {
        return Err(AssistantError::MissingArgument {
            action: "creating file",
            argument: "filename",
        });
    }

    fs::write(filename, content).map_err(|e| AssistantError::CreateFile {
        filename: filename.to_string(),
        reason: e.to_string(),
    })?;

    Ok(format!("File '{}' created successfully", filename))
}
