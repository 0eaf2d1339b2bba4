//! Error types for the desk engine.

use biblio_core::LibraryError;
use thiserror::Error;

/// Result type for desk operations.
pub type DeskResult<T> = Result<T, DeskError>;

/// Errors that can occur at the circulation desk.
#[derive(Debug, Error)]
pub enum DeskError {
    /// No catalogued book matches the given title.
    #[error("no book titled \"{0}\" in the catalogue")]
    UnknownTitle(String),

    /// Several catalogued books share the given title; the desk grammar
    /// refers to books by title alone and cannot tell them apart.
    #[error("several books share the title \"{0}\"")]
    AmbiguousTitle(String),

    /// The input did not parse as a desk command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A library operation was rejected.
    #[error(transparent)]
    Library(#[from] LibraryError),
}
