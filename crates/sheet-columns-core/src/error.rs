//! Error types for sheet-columns-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sheet-columns-core
///
/// The cursor operations of [`ColumnSequence`](crate::ColumnSequence) never
/// fail. These errors come from parsing labels and from the bounded walk.
#[derive(Debug, Error)]
pub enum Error {
    /// Column letters could not be parsed
    #[error("Invalid column label: {0}")]
    InvalidLabel(String),

    /// Walk target normalizes to something no column label can match
    #[error("Invalid walk target: {0:?}")]
    InvalidTarget(String),

    /// Walk target sorts before the position the cursor is sitting on
    #[error("Target {target} is behind the cursor (next column: {current})")]
    TargetBehindCursor { target: String, current: String },

    /// Bounded walk gave up before reaching its target
    #[error("Target {target} not reached within {limit} columns")]
    WalkLimitExceeded { target: String, limit: u64 },

    /// Ordinal of a column label does not fit in a u64
    #[error("Column ordinal overflows u64: {0}")]
    OrdinalOverflow(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
