//! Errors raised by shape constructors and board operations.

use thiserror::Error;

/// Errors that can occur while building shapes or mutating a board.
///
/// None of these are transient; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// A required value was missing or outside its accepted range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A shape was constructed with dimensions that break its invariant.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// The operation needs a selection (or a non-empty board) and there is none.
    #[error("invalid state: {0}")]
    InvalidState(String),
}
