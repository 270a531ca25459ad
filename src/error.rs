//! Error types for the pagecheck library.

use std::io;
use thiserror::Error;

/// Result type alias for pagecheck operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur before or while loading a document for validation.
///
/// These are the unrecoverable configuration/input tier: they abort before
/// any tree traversal. Content findings (inconsistent text, invalid or
/// non-contained coordinates) are never raised as `Error`; they are
/// collected into a [`crate::ValidationReport`] instead.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading a document file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error (de)serializing a document.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The strictness level is not one of strict, lax, fix, off.
    #[error("strictness level '{0}' not implemented")]
    UnknownStrictness(String),

    /// The text selection strategy is not implemented.
    #[error("text selection strategy '{0}' not implemented")]
    UnknownStrategy(String),

    /// A points string could not be parsed into coordinates.
    #[error("invalid points string: {0}")]
    InvalidPoints(String),
}
