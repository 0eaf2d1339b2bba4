//! Interactive circulation-desk engine for biblio.
//!
//! Provides a plain-text command interface over a [`biblio_core::Library`]:
//! a small verb-first grammar for registering books and members, lending
//! and returning, and reading status reports. The session returns response
//! strings and performs no I/O; the caller owns the input and output
//! channel.

/// Command parsing for desk input.
pub mod command;
/// Error types for the desk engine.
pub mod error;
/// Circulation-desk session management.
pub mod session;

pub use command::{Command, parse_command};
pub use error::{DeskError, DeskResult};
pub use session::DeskSession;
