//! Error types for the quiz.
//!
//! [`Rejection`] is the recoverable case: a line the player typed that
//! is not an acceptable number. It is shown to the player and the read
//! is retried. [`GameError`] covers the stream conditions the game
//! cannot recover from.

use std::io;
use thiserror::Error;

/// Why a line of input was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Invalid input: {input:?} is not an integer. Enter an integer between {low} and {high} inclusive")]
    NotAnInteger { input: String, low: i64, high: i64 },

    #[error("Invalid input: {value} is out of range. Enter an integer between {low} and {high} inclusive")]
    OutOfRange { value: i64, low: i64, high: i64 },
}

#[derive(Debug, Error)]
pub enum GameError {
    /// Standard input reached end of file.
    #[error("input closed")]
    InputClosed,

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl GameError {
    /// End of input ends the session normally.
    pub fn is_shutdown(&self) -> bool {
        matches!(self, GameError::InputClosed)
    }
}
