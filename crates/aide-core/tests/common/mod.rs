#![allow(dead_code)]

use aide_core::{Assistant, Launcher};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;

/// One recorded `Launcher::spawn` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCall {
    pub program: String,
    pub args: Vec<String>,
}

/// Launcher that records calls instead of spawning
#[derive(Clone, Default)]
pub struct RecordingLauncher {
    calls: Rc<RefCell<Vec<LaunchCall>>>,
}

impl RecordingLauncher {
    pub fn calls(&self) -> Vec<LaunchCall> {
        self.calls.borrow().clone()
    }
}

impl Launcher for RecordingLauncher {
    fn spawn(&self, program: &str, args: &[&str]) -> io::Result<()> {
        self.calls.borrow_mut().push(LaunchCall {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        });
        Ok(())
    }
}

/// Assistant wired to a fresh recorder; the returned handle shares its log
pub fn recording_assistant() -> (Assistant, RecordingLauncher) {
    let launcher = RecordingLauncher::default();
    let assistant = Assistant::with_launcher("Test", Box::new(launcher.clone()));
    (assistant, launcher)
}
