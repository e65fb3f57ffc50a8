//! aide core - phrase-driven desktop assistant
//!
//! This crate provides everything behind the `aide` prompt:
//! - The immutable command table and the router that selects from it
//! - Handlers for browser/app launching, file listing and creation,
//!   clock reads, and platform reporting
//! - A platform capability table mapping OS identifiers to executables
//! - The error and structured logging facilities
//!
//! ```
//! use aide_core::Assistant;
//!
//! let assistant = Assistant::new("Assistant");
//! assert!(assistant.route("help").contains("get time"));
//! ```

pub mod assistant;
pub mod commands;
pub mod errors;
pub mod handlers;
pub mod launcher;
pub mod logging_facility;
pub mod platform;
pub mod router;

pub use aide_core_types as core_types;

// Re-export commonly used types
pub use assistant::Assistant;
pub use commands::{Command, CommandTable};
pub use errors::{AssistantError, ExError, ExErrorKind, Result};
pub use launcher::{Launcher, SystemLauncher};
pub use platform::PlatformProfile;
