//! Error types for the tic-tac-toe crate

use thiserror::Error;

use crate::tictactoe::Player;

/// Main error type for the crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("position {position} is out of bounds (must be 0-8)")]
    InvalidPosition { position: usize },

    #[error("cell {position} is already occupied")]
    CellOccupied { position: usize },

    #[error("game already over: {winner} has won")]
    GameAlreadyOver { winner: Player },

    #[error("history index {target} is out of range (history has {len} entries)")]
    CursorOutOfRange { target: usize, len: usize },

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid command '{input}': {reason}")]
    InvalidCommand { input: String, reason: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "perform I/O".to_string(),
            source,
        }
    }
}

impl Error {
    pub(crate) fn invalid_command(input: &str, reason: impl Into<String>) -> Self {
        Error::InvalidCommand {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
