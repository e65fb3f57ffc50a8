//! One-shot command
//!
//! Usage: aide exec <WORDS>...

use std::process::ExitCode;

use aide_core::Assistant;
use clap::Args;

#[derive(Debug, Args)]
pub struct ExecArgs {
    /// Phrase to run, e.g. `get time` or `create file notes.txt`
    #[arg(required = true, num_args = 1..)]
    pub words: Vec<String>,
}

/// Route the phrase once and print the reply
///
/// Exits with failure when the phrase is not recognized or its handler
/// reported an error; the reply is printed either way.
pub fn execute(
    assistant: &Assistant,
    args: ExecArgs,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let phrase = args.words.join(" ");

    match assistant.dispatch(&phrase) {
        Ok(reply) => {
            println!("{}", reply);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            println!("{}", err);
            Ok(ExitCode::FAILURE)
        }
    }
}
