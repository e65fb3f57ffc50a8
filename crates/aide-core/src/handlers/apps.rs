//! Browser and desktop application launching

use crate::errors::{AssistantError, Result};
use crate::launcher::Launcher;
use crate::platform::PlatformProfile;

pub const DEFAULT_URL: &str = "https://www.google.com";

/// Hand `url` (or `DEFAULT_URL`) to the platform's URL opener
///
/// # Errors
///
/// Returns `AssistantError::BrowserLaunch` if the opener cannot be spawned.
pub fn open_browser(
    launcher: &dyn Launcher,
    platform: &PlatformProfile,
    url: Option<&str>,
) -> Result<String> {
    let url = url.unwrap_or(DEFAULT_URL);
    launcher
        .spawn(platform.url_opener, &[url])
        .map_err(|e| AssistantError::BrowserLaunch {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
    Ok(format!("Opening browser with {}", url))
}

/// # Errors
///
/// Returns `AssistantError::ApplicationLaunch` if the editor cannot be spawned.
pub fn open_notepad(launcher: &dyn Launcher, platform: &PlatformProfile) -> Result<String> {
    launch(launcher, platform.text_editor, "notepad")?;
    Ok(platform.text_editor_reply.to_string())
}

/// # Errors
///
/// Returns `AssistantError::ApplicationLaunch` if the calculator cannot be spawned.
pub fn open_calculator(launcher: &dyn Launcher, platform: &PlatformProfile) -> Result<String> {
    launch(launcher, platform.calculator, "calculator")?;
    Ok("Calculator opened".to_string())
}

fn launch(launcher: &dyn Launcher, program: &str, app: &str) -> Result<()> {
    launcher
        .spawn(program, &[])
        .map_err(|e| AssistantError::ApplicationLaunch {
            app: app.to_string(),
            reason: e.to_string(),
        })
}
