//! AIPlayer - the search engine behind the [`Player`] interface
//!
//! The player owns a [`SearchEngine`] and, every turn, adopts the search depth
//! handed in through the [`TurnContext`] before searching. The move it returns
//! is only chosen, applying it is the turn controller's job.

use super::search::{SearchConfig, SearchEngine, SearchResult};
use crate::agent::player::{GameResult, Player, TurnContext};
use crate::error::Result;
use crate::game_repr::{Color, Move, Position};

/// AI difficulty levels that map to search depth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    /// Depth 2
    Easy,
    /// Depth 3, the default look-ahead
    Medium,
    /// Depth 4
    Hard,
}

impl Difficulty {
    /// Number of plies (half-moves) to search
    pub fn max_depth(&self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn config(&self) -> SearchConfig {
        SearchConfig::with_depth(self.max_depth())
    }
}

/// AI Player that uses minimax with alpha-beta pruning
pub struct AIPlayer {
    engine: SearchEngine,
    name: String,
    /// Statistics of the most recent search
    last_search: Option<SearchResult>,
}

impl AIPlayer {
    pub fn new(config: SearchConfig, name: String) -> Self {
        Self {
            engine: SearchEngine::new(config),
            name,
            last_search: None,
        }
    }

    /// Player named after its difficulty, e.g. "AI (Medium)"
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self::new(difficulty.config(), format!("AI ({})", difficulty.name()))
    }

    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }

    pub fn last_search(&self) -> Option<&SearchResult> {
        self.last_search.as_ref()
    }
}

impl Player for AIPlayer {
    fn get_move(&mut self, board: &Position, color: Color, ctx: &TurnContext) -> Result<Move> {
        self.engine.set_depth(ctx.search_depth);

        let result = self.engine.choose_move(board, color)?;
        log::info!(
            "[{}] {} (score {}, depth {}, {} nodes, {} cutoffs, {}ms)",
            self.name,
            result.best_move,
            result.score,
            result.depth,
            result.nodes_searched,
            result.cutoffs,
            result.time_ms
        );

        let best_move = result.best_move;
        self.last_search = Some(result);
        Ok(best_move)
    }

    fn game_ended(&mut self, result: GameResult) {
        log::debug!("[{}] game over: {:?}", self.name, result);
    }

    fn name(&self) -> &str {
        &self.name
    }
}
