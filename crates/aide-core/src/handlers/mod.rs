//! Handlers behind each command
//!
//! Every handler either returns the reply text or an `AssistantError`
//! describing what went wrong; none of them panic or print.

pub mod apps;
pub mod clock;
pub mod files;
pub mod system;
