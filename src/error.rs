//! Error types for the checkers engine
//!
//! Rule violations during `apply` are not errors: they come back as an
//! [`Outcome`](crate::rules::Outcome) with `applied == false`. The variants
//! here cover caller mistakes and driver-level failures.

use thiserror::Error;

use crate::board::{Pos, Side};

/// Errors raised by the engine and its drivers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckersError {
    /// Coordinates outside the 8x8 board
    #[error("Position out of bounds: ({row}, {col}) (must be 0-7)")]
    OutOfBounds { row: i32, col: i32 },

    /// A decision was requested for a side that cannot act
    #[error("{side} has no legal action")]
    NoLegalActions { side: Side },

    /// A decision was requested after the game ended
    #[error("Game is over: {winner} won")]
    GameOver { winner: Side },

    /// The attempted action is not legal in the current position
    #[error("Illegal action from {from}")]
    IllegalAction { from: Pos },

    /// Input arrived while the other side is to move
    #[error("Not your turn")]
    NotYourTurn,

    /// Input arrived while a search is outstanding
    #[error("AI is thinking")]
    AiThinking,

    /// Text input could not be parsed
    #[error("Invalid notation: {0:?}")]
    InvalidNotation(String),

    /// The background search thread went away
    #[error("AI worker disconnected")]
    WorkerDisconnected,
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, CheckersError>;
