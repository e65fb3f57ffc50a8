//! aide CLI
//!
//! Interactive prompt (default) or one-shot execution of a single phrase.

use std::process::ExitCode;

use aide_core::logging_facility::{self, Profile};
use aide_core::Assistant;
use clap::{Parser, Subcommand, ValueEnum};

mod commands;
mod session;

#[derive(Debug, Parser)]
#[command(name = "aide")]
#[command(about = "aide - phrase-driven desktop assistant", long_about = None)]
struct Cli {
    /// Name the assistant uses to prefix its replies
    #[arg(long, global = true, default_value = aide_core::assistant::DEFAULT_NAME)]
    name: String,

    /// Logging profile (logs go to stderr; RUST_LOG overrides the level)
    #[arg(long, global = true, value_enum, default_value_t = LogProfile::Quiet)]
    log: LogProfile,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogProfile {
    Quiet,
    Development,
    Production,
}

impl From<LogProfile> for Profile {
    fn from(value: LogProfile) -> Self {
        match value {
            LogProfile::Quiet => Profile::Quiet,
            LogProfile::Development => Profile::Development,
            LogProfile::Production => Profile::Production,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the interactive prompt (the default)
    Repl,
    /// Run a single phrase and exit
    Exec(commands::exec::ExecArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging_facility::init(cli.log.into());

    let assistant = Assistant::new(cli.name);

    let result = match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => commands::repl::execute(&assistant),
        Commands::Exec(args) => commands::exec::execute(&assistant, args),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
