//! Error types for the chess core.
//!
//! The search itself is a closed computation and has no recoverable failure
//! modes. Errors only arise at the edges: parsing FEN or user input, and
//! callers asking for a move in a position that is already decided.

use crate::game_repr::{Color, GameState};
use thiserror::Error;

/// Errors surfaced by board setup, players and the turn controller.
#[derive(Error, Debug)]
pub enum ChessError {
    /// The FEN string could not be parsed
    #[error("Invalid FEN '{fen}': {reason}")]
    InvalidFen { fen: String, reason: String },

    /// A square name such as "e4" could not be parsed
    #[error("Invalid square '{0}'")]
    InvalidSquare(String),

    /// A move that is not legal in the current position
    #[error("Illegal move {mv} for {color:?}")]
    IllegalMove { mv: String, color: Color },

    /// Move selection was requested for a side that is checkmated or stalemated
    #[error("{color:?} has no legal moves ({state:?})")]
    GameOver { color: Color, state: GameState },

    /// The interactive input stream ended before a move was entered
    #[error("Input closed before a move was entered")]
    InputClosed,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for chess operations
pub type Result<T> = std::result::Result<T, ChessError>;
