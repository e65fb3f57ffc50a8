//! The assistant: command table plus the handlers it dispatches to
//!
//! ## Contract
//!
//! `route()` never fails and never panics on user input. Every handler
//! failure comes back as an `AssistantError` from `dispatch()` and is
//! rendered to its user-facing text by `route()`.
//!
//! ## Example
//!
//! ```
//! use aide_core::Assistant;
//!
//! let assistant = Assistant::new("Helper");
//! assert_eq!(
//!     assistant.route("SHUTDOWN"),
//!     "System shutdown requires manual confirmation (security feature)"
//! );
//! ```

use std::time::Instant;

use crate::commands::{Command, CommandTable};
use crate::core_types::{RequestContext, SessionId};
use crate::errors::{AssistantError, Result};
use crate::handlers::{apps, clock, files, system};
use crate::launcher::{Launcher, SystemLauncher};
use crate::platform::{self, PlatformProfile};
use crate::router;
use crate::{log_op_end, log_op_error, log_op_start};

pub const DEFAULT_NAME: &str = "Assistant";

/// Phrase-driven desktop helper
pub struct Assistant {
    name: String,
    table: CommandTable,
    platform: &'static PlatformProfile,
    launcher: Box<dyn Launcher>,
}

impl Assistant {
    /// Assistant for the current platform that spawns real processes
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_launcher(name, Box::new(SystemLauncher))
    }

    /// Assistant that launches programs through `launcher`
    pub fn with_launcher(name: impl Into<String>, launcher: Box<dyn Launcher>) -> Self {
        Self {
            name: name.into(),
            table: CommandTable::standard(),
            platform: platform::current(),
            launcher,
        }
    }

    /// Override the platform profile (used to exercise other OS rows)
    pub fn with_platform(mut self, platform: &'static PlatformProfile) -> Self {
        self.platform = platform;
        self
    }

    /// Display label
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table(&self) -> &CommandTable {
        &self.table
    }

    pub fn platform(&self) -> &PlatformProfile {
        self.platform
    }

    /// Route a line and render the outcome as text
    pub fn route(&self, input: &str) -> String {
        self.route_with_context(input, &RequestContext::new())
    }

    pub fn route_with_context(&self, input: &str, ctx: &RequestContext) -> String {
        match self.dispatch_with_context(input, ctx) {
            Ok(reply) => reply,
            Err(err) => err.to_string(),
        }
    }

    /// Route a line, keeping the failure category
    ///
    /// # Errors
    ///
    /// Returns `AssistantError::UnrecognizedCommand` when nothing matches,
    /// or the handler's own error.
    pub fn dispatch(&self, input: &str) -> Result<String> {
        self.dispatch_with_context(input, &RequestContext::new())
    }

    /// # Errors
    ///
    /// See [`Assistant::dispatch`].
    pub fn dispatch_with_context(&self, input: &str, ctx: &RequestContext) -> Result<String> {
        let started = Instant::now();
        let session_id = ctx
            .session_id
            .as_ref()
            .map(SessionId::as_str)
            .unwrap_or("-");
        log_op_start!(
            "route",
            request_id = %ctx.request_id,
            session_id = session_id,
        );

        let Some(command) = router::resolve(&self.table, input) else {
            let err = AssistantError::UnrecognizedCommand {
                input: input.trim().to_string(),
            };
            log_op_error!(
                "route",
                &err,
                duration_ms = elapsed_ms(started),
                request_id = %ctx.request_id,
            );
            return Err(err);
        };

        match self.execute(&command) {
            Ok(reply) => {
                log_op_end!(
                    "route",
                    duration_ms = elapsed_ms(started),
                    request_id = %ctx.request_id,
                    command = command.key(),
                );
                Ok(reply)
            }
            Err(err) => {
                log_op_error!(
                    "route",
                    &err,
                    duration_ms = elapsed_ms(started),
                    request_id = %ctx.request_id,
                    command = command.key(),
                );
                Err(err)
            }
        }
    }

    /// Run one resolved command
    ///
    /// # Errors
    ///
    /// Returns the handler's `AssistantError`.
    pub fn execute(&self, command: &Command) -> Result<String> {
        let launcher = self.launcher.as_ref();
        match command {
            Command::OpenBrowser { url } => {
                apps::open_browser(launcher, self.platform, url.as_deref())
            }
            Command::OpenNotepad => apps::open_notepad(launcher, self.platform),
            Command::OpenCalculator => apps::open_calculator(launcher, self.platform),
            Command::ListFiles { directory } => files::list_files(directory.as_deref()),
            Command::CreateFile { filename, content } => {
                files::create_file(filename.as_deref().unwrap_or_default(), content)
            }
            Command::GetTime => Ok(clock::get_time()),
            Command::GetDate => Ok(clock::get_date()),
            Command::SystemInfo => system::system_info(),
            Command::Shutdown => Ok(system::shutdown()),
            Command::Help => Ok(self.help()),
        }
    }

    /// Every command phrase, one per line, in table order
    pub fn help(&self) -> String {
        let mut text = String::from("Available Commands:");
        for key in self.table.keys() {
            text.push_str("\n  - ");
            text.push_str(key);
        }
        text
    }
}

impl Default for Assistant {
    fn default() -> Self {
        Self::new(DEFAULT_NAME)
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
