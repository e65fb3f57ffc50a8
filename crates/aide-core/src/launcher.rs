//! Process launch seam
//!
//! Handlers that start desktop programs go through `Launcher` so the
//! router can be exercised without spawning anything real.

use std::io;
use std::process::{Command, Stdio};

/// Start a program without waiting for it
pub trait Launcher {
    /// Spawn `program` with `args`.
    ///
    /// # Errors
    ///
    /// Returns the OS error when the program cannot be started (missing
    /// executable, permission denied).
    fn spawn(&self, program: &str, args: &[&str]) -> io::Result<()>;
}

/// Launcher that spawns real child processes
///
/// The child is detached from the assistant's standard streams and never
/// waited on, so the prompt comes back immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn spawn(&self, program: &str, args: &[&str]) -> io::Result<()> {
        tracing::debug!(program, ?args, "spawning");
        Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_child| ())
    }
}
