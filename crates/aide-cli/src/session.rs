//! Interactive loop
//!
//! Reads one line at a time, routes it, prints the reply. The loop ends on
//! `exit`, on Ctrl-C and at end of input. A panic while routing a line is
//! reported inline and the loop carries on.

use std::any::Any;
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use aide_core::core_types::{RequestContext, SessionId};
use aide_core::errors::{ExError, ExErrorKind};
use aide_core::{log_op_end, log_op_error, log_op_start, Assistant};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use thiserror::Error;

/// Typing this (any case) ends the session
pub const EXIT_WORD: &str = "exit";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("terminal error: {0}")]
    Readline(#[from] ReadlineError),

    #[error("output error: {0}")]
    Io(#[from] io::Error),
}

/// What one blocking read produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    Interrupted,
    Eof,
}

/// How the session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Exited,
    Interrupted,
    EndOfInput,
}

/// Where lines come from
pub trait LineSource {
    /// Block until the user enters a line.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` when the terminal cannot be read.
    fn read_line(&mut self, prompt: &str) -> Result<Input, SessionError>;

    /// Record an accepted line for recall
    fn remember(&mut self, _line: &str) {}
}

/// rustyline-backed source with in-memory history
pub struct TerminalSource {
    editor: DefaultEditor,
}

impl TerminalSource {
    /// # Errors
    ///
    /// Returns `SessionError::Readline` if the terminal cannot be set up.
    pub fn new() -> Result<Self, SessionError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for TerminalSource {
    fn read_line(&mut self, prompt: &str) -> Result<Input, SessionError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Input::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
            Err(ReadlineError::Eof) => Ok(Input::Eof),
            Err(e) => Err(e.into()),
        }
    }

    fn remember(&mut self, line: &str) {
        if let Err(e) = self.editor.add_history_entry(line) {
            tracing::debug!(error = %e, "history entry dropped");
        }
    }
}

/// Run the read-route-print loop until the user leaves
///
/// # Errors
///
/// Returns `SessionError` only for terminal or output failures; command
/// failures are printed as replies.
pub fn run_session<W: Write>(
    assistant: &Assistant,
    source: &mut dyn LineSource,
    out: &mut W,
) -> Result<Outcome, SessionError> {
    let name = assistant.name();
    let prompt = format!("{}> ", name);
    let session_id = SessionId::new();
    let started = Instant::now();
    log_op_start!("session", session_id = %session_id);

    writeln!(
        out,
        "\n{} initialized. Type 'help' for available commands or '{}' to quit.\n",
        name, EXIT_WORD
    )?;
    out.flush()?;

    let outcome = loop {
        let line = match source.read_line(&prompt)? {
            Input::Line(line) => line,
            Input::Interrupted => {
                writeln!(out, "\n{}: Shutdown initiated by user.", name)?;
                break Outcome::Interrupted;
            }
            Input::Eof => {
                writeln!(out, "{}: Goodbye!", name)?;
                break Outcome::EndOfInput;
            }
        };

        let line = line.trim();
        if line.to_lowercase() == EXIT_WORD {
            writeln!(out, "{}: Goodbye!", name)?;
            break Outcome::Exited;
        }
        if line.is_empty() {
            continue;
        }
        source.remember(line);

        let ctx = RequestContext::new().with_session_id(session_id.clone());
        let line_started = Instant::now();
        match panic::catch_unwind(AssertUnwindSafe(|| assistant.route_with_context(line, &ctx))) {
            Ok(reply) => writeln!(out, "{}: {}\n", name, reply)?,
            Err(payload) => {
                let detail = panic_detail(payload.as_ref());
                let err = ExError::new(ExErrorKind::Internal)
                    .with_op("route")
                    .with_request_id(ctx.request_id.clone())
                    .with_message(detail.clone());
                log_op_error!(
                    "route",
                    err,
                    duration_ms = line_started.elapsed().as_millis() as u64,
                    request_id = %ctx.request_id,
                );
                writeln!(out, "{}: An error occurred: {}\n", name, detail)?;
            }
        }
        out.flush()?;
    };

    out.flush()?;
    log_op_end!(
        "session",
        duration_ms = started.elapsed().as_millis() as u64,
        session_id = %session_id,
        outcome = ?outcome,
    );
    Ok(outcome)
}

fn panic_detail(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown failure".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aide_core::Launcher;
    use std::collections::VecDeque;

    struct Scripted {
        inputs: VecDeque<Input>,
        prompts: Vec<String>,
        history: Vec<String>,
    }

    impl Scripted {
        fn lines(lines: &[&str]) -> Self {
            Self::inputs(lines.iter().map(|l| Input::Line(l.to_string())).collect())
        }

        fn inputs(inputs: Vec<Input>) -> Self {
            Self {
                inputs: inputs.into(),
                prompts: Vec::new(),
                history: Vec::new(),
            }
        }
    }

    impl LineSource for Scripted {
        fn read_line(&mut self, prompt: &str) -> Result<Input, SessionError> {
            self.prompts.push(prompt.to_string());
            Ok(self.inputs.pop_front().unwrap_or(Input::Eof))
        }

        fn remember(&mut self, line: &str) {
            self.history.push(line.to_string());
        }
    }

    struct PanickingLauncher;

    impl Launcher for PanickingLauncher {
        fn spawn(&self, _: &str, _: &[&str]) -> io::Result<()> {
            panic!("launcher exploded")
        }
    }

    fn run(assistant: &Assistant, source: &mut Scripted) -> (Outcome, String) {
        let mut out = Vec::new();
        let outcome = run_session(assistant, source, &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_greets_and_exits() {
        let assistant = Assistant::new("Jarvis");
        let mut source = Scripted::lines(&["EXIT"]);

        let (outcome, out) = run(&assistant, &mut source);

        assert_eq!(outcome, Outcome::Exited);
        assert!(out.contains(
            "Jarvis initialized. Type 'help' for available commands or 'exit' to quit."
        ));
        assert!(out.ends_with("Jarvis: Goodbye!\n"));
        assert_eq!(source.prompts, vec!["Jarvis> "]);
    }

    #[test]
    fn test_replies_are_prefixed() {
        let assistant = Assistant::new("Jarvis");
        let mut source = Scripted::lines(&["shutdown", "exit"]);

        let (_, out) = run(&assistant, &mut source);

        assert!(out.contains(
            "Jarvis: System shutdown requires manual confirmation (security feature)\n\n"
        ));
        assert_eq!(source.history, vec!["shutdown"]);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let assistant = Assistant::new("A");
        let mut source = Scripted::lines(&["", "   ", "exit"]);

        let (outcome, out) = run(&assistant, &mut source);

        assert_eq!(outcome, Outcome::Exited);
        assert!(!out.contains("not recognized"));
        assert!(source.history.is_empty());
        assert_eq!(source.prompts.len(), 3);
    }

    #[test]
    fn test_unrecognized_keeps_running() {
        let assistant = Assistant::new("A");
        let mut source = Scripted::lines(&["dance", "exit"]);

        let (outcome, out) = run(&assistant, &mut source);

        assert_eq!(outcome, Outcome::Exited);
        assert!(out.contains(
            "A: Command not recognized. Type 'help' for available commands.\n"
        ));
    }

    #[test]
    fn test_interrupt_ends_session() {
        let assistant = Assistant::new("A");
        let mut source = Scripted::inputs(vec![Input::Interrupted, Input::Line("help".into())]);

        let (outcome, out) = run(&assistant, &mut source);

        assert_eq!(outcome, Outcome::Interrupted);
        assert!(out.ends_with("\nA: Shutdown initiated by user.\n"));
        assert!(!out.contains("Available Commands"));
    }

    #[test]
    fn test_end_of_input_says_goodbye() {
        let assistant = Assistant::new("A");
        let mut source = Scripted::inputs(vec![]);

        let (outcome, out) = run(&assistant, &mut source);

        assert_eq!(outcome, Outcome::EndOfInput);
        assert!(out.ends_with("A: Goodbye!\n"));
    }

    #[test]
    fn test_panic_while_routing_is_contained() {
        let assistant = Assistant::with_launcher("A", Box::new(PanickingLauncher));
        let mut source = Scripted::lines(&["open calculator", "shutdown", "exit"]);

        let (outcome, out) = run(&assistant, &mut source);

        assert_eq!(outcome, Outcome::Exited);
        assert!(out.contains("A: An error occurred: launcher exploded\n"));
        assert!(out.contains("A: System shutdown requires manual confirmation"));
    }

    #[test]
    fn test_panic_detail_fallback() {
        let payload: Box<dyn Any + Send> = Box::new(42_u8);
        assert_eq!(panic_detail(payload.as_ref()), "unknown failure");
    }
}
