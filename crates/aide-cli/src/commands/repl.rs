//! Interactive prompt command

use std::io;
use std::process::ExitCode;

use aide_core::Assistant;

use crate::session::{run_session, TerminalSource};

/// Run the interactive loop on the current terminal
pub fn execute(assistant: &Assistant) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut source = TerminalSource::new()?;
    let mut stdout = io::stdout();

    let outcome = run_session(assistant, &mut source, &mut stdout)?;
    tracing::debug!(?outcome, "session finished");

    Ok(ExitCode::SUCCESS)
}
