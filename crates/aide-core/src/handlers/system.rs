//! Platform reporting and the refused shutdown

use crate::errors::{AssistantError, Result};

pub const SHUTDOWN_REFUSAL: &str =
    "System shutdown requires manual confirmation (security feature)";

/// Describe an OS family and identifier pair
pub fn describe(family: &str, os: &str) -> Result<String> {
    if family.is_empty() || os.is_empty() {
        return Err(AssistantError::SystemInfo {
            reason: "operating system could not be identified".to_string(),
        });
    }
    Ok(format!("System: {}\nPlatform: {}", family, os))
}

/// OS family and identifier of the running build
pub fn system_info() -> Result<String> {
    describe(std::env::consts::FAMILY, std::env::consts::OS)
}

/// Never shuts anything down
pub fn shutdown() -> String {
    SHUTDOWN_REFUSAL.to_string()
}
