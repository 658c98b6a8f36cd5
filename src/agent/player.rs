//! Player trait and associated types for chess game agents.
//!
//! A player is anything that can produce a move for a side on a given board:
//! a human typing coordinates or the search engine. The turn controller in
//! [`crate::game`] composes two players and never needs to know which is which.
//!
//! # Design Philosophy
//!
//! The `Player` trait focuses on **behavior** rather than construction.
//! `HumanPlayer` needs an input and an output stream, `AIPlayer` needs a
//! search configuration, so the trait does not define a constructor.
//!
//! # Synchronous Design
//!
//! `get_move()` blocks until a move is available. For the AI that means the
//! whole search runs on the calling thread, there is no cancellation.
//!
//! # Examples
//!
//! ```rust
//! use minimax_chess::agent::{AIPlayer, Difficulty, Player, TurnContext};
//! use minimax_chess::game_repr::{Color, Position};
//!
//! let mut ai = AIPlayer::with_difficulty(Difficulty::Easy);
//! let board = Position::default();
//! let mv = ai.get_move(&board, Color::White, &TurnContext { search_depth: 1 }).unwrap();
//! assert!(board.is_move_legal(mv));
//! ```

use crate::error::Result;
use crate::game_repr::{Color, Move, Position};

/// Result of a completed chess game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// Black was checkmated
    WhiteWins,
    /// White was checkmated
    BlackWins,
    /// The player to move has no legal moves but is not in check
    Stalemate,
}

impl GameResult {
    /// Create a GameResult from the winning color
    pub fn from_winner(winner: Color) -> Self {
        match winner {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }
}

/// Per-turn settings supplied by the turn controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnContext {
    /// Current look-ahead in plies, adjustable while the game runs
    pub search_depth: u8,
}

/// Trait for entities that can provide chess moves.
///
/// Only `get_move()` must be implemented. The notification hooks default to
/// doing nothing.
pub trait Player {
    /// Request the next move for `color` on `board`.
    ///
    /// The returned move should be legal, the turn controller validates it
    /// again before applying it. Errors mean the player cannot provide a move
    /// at all (input closed, game already over).
    fn get_move(&mut self, board: &Position, color: Color, ctx: &TurnContext) -> Result<Move>;

    /// Called after the opponent's move has been applied
    fn opponent_moved(&mut self, _mv: Move) {}

    /// Called once when the game reaches checkmate or stalemate
    fn game_ended(&mut self, _result: GameResult) {}

    fn name(&self) -> &str {
        "Player"
    }
}
