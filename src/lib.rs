//! Chess rules and a minimax opponent.
//!
//! - [`game_repr`]: board, pieces, legal move generation, check detection
//! - [`agent`]: the [`Player`](agent::Player) interface, a text-input human
//!   player and the search-backed AI
//! - [`agent::ai`]: move ordering, evaluation and alpha-beta search
//! - [`game`]: the turn controller composing two players
//! - [`move_log`]: where applied moves are reported

pub mod agent;
pub mod error;
pub mod game;
pub mod game_repr;
pub mod move_log;

pub use error::{ChessError, Result};
pub use game::Game;
pub use move_log::{MoveHistory, MoveLog};
