// Minimax search with alpha-beta pruning
//
// Every node works on its own copy of the board. Scores are always taken from
// the side that started the search: that side maximizes, its opponent
// minimizes. Only the root records the move to play.

use std::time::Instant;

use super::evaluation::{EvalWeights, Evaluator};
use super::move_ordering::generate_ordered_moves;
use crate::error::{ChessError, Result};
use crate::game_repr::{Color, Move, Position};
use crate::move_log::MoveLog;

/// Search depth used when nothing else is configured
pub const DEFAULT_SEARCH_DEPTH: u8 = 3;

/// Breadth limit that keeps deeper searches tractable when enabled
pub const DEFAULT_MAX_MOVES_PER_PLY: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies to look ahead, at least 1
    pub depth: u8,
    /// Keep only the best N ordered moves at every ply, `None` searches all.
    /// A limit of 0 is treated as 1.
    pub max_moves_per_ply: Option<usize>,
    pub weights: EvalWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
            max_moves_per_ply: None,
            weights: EvalWeights::default(),
        }
    }
}

impl SearchConfig {
    pub fn with_depth(depth: u8) -> Self {
        Self {
            depth: depth.max(1),
            ..Self::default()
        }
    }

    pub fn max_moves_per_ply(mut self, max: Option<usize>) -> Self {
        self.max_moves_per_ply = max.map(|n| n.max(1));
        self
    }
}

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub best_move: Move,
    /// Score of `best_move` from the searching side's point of view
    pub score: i32,
    pub depth: u8,
    pub nodes_searched: u64,
    pub cutoffs: u64,
    pub time_ms: u64,
}

pub struct SearchEngine {
    config: SearchConfig,
    evaluator: Evaluator,

    // Per-search state, reset by `choose_move`
    perspective: Color,
    root_depth: u8,
    best_move: Option<Move>,
    nodes: u64,
    cutoffs: u64,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        let evaluator = Evaluator::new(config.weights.clone());
        Self {
            config,
            evaluator,
            perspective: Color::White,
            root_depth: 0,
            best_move: None,
            nodes: 0,
            cutoffs: 0,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    pub fn depth(&self) -> u8 {
        self.config.depth
    }

    /// Change the look-ahead for subsequent searches, clamped to at least 1
    pub fn set_depth(&mut self, depth: u8) {
        self.config.depth = depth.max(1);
    }

    /// Pick the best move for `side` without touching `board`.
    ///
    /// Fails with [`ChessError::GameOver`] when `side` has no legal moves:
    /// callers are expected to check for mate and stalemate first.
    pub fn choose_move(&mut self, board: &Position, side: Color) -> Result<SearchResult> {
        let state = board.game_state(side);
        if state.is_over() {
            return Err(ChessError::GameOver { color: side, state });
        }

        let start = Instant::now();
        self.perspective = side;
        self.root_depth = self.config.depth.max(1);
        self.best_move = None;
        self.nodes = 0;
        self.cutoffs = 0;

        let score = self.minimax(board, self.root_depth, i32::MIN, i32::MAX, side);
        let best_move = self
            .best_move
            .ok_or(ChessError::GameOver { color: side, state })?;

        let result = SearchResult {
            best_move,
            score,
            depth: self.root_depth,
            nodes_searched: self.nodes,
            cutoffs: self.cutoffs,
            time_ms: start.elapsed().as_millis() as u64,
        };

        log::debug!(
            "search {:?} depth {} score {} nodes {} cutoffs {} time {}ms best {}",
            side,
            result.depth,
            result.score,
            result.nodes_searched,
            result.cutoffs,
            result.time_ms,
            result.best_move
        );

        Ok(result)
    }

    /// Choose a move, apply it to the live board and report it to `log`
    pub fn play(
        &mut self,
        board: &mut Position,
        side: Color,
        log: &mut dyn MoveLog,
    ) -> Result<SearchResult> {
        let result = self.choose_move(board, side)?;
        board.play_move(result.best_move, log);
        Ok(result)
    }

    fn minimax(&mut self, board: &Position, depth: u8, mut alpha: i32, mut beta: i32, mover: Color) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            return self.evaluator.evaluate(board, self.perspective);
        }

        let maximizing = mover == self.perspective;
        let moves = generate_ordered_moves(
            board,
            mover,
            self.perspective,
            self.config.max_moves_per_ply,
        );

        // Mate or stalemate reached inside the tree
        if moves.is_empty() {
            return self.evaluator.evaluate(board, self.perspective)
                + self.evaluator.score_game_over(board, mover, self.perspective);
        }

        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for &mv in &moves {
            let mut child = *board;
            child.apply_move(mv);
            let score = self.minimax(&child, depth - 1, alpha, beta, mover.opposite());

            if maximizing {
                if score > best {
                    best = score;
                    if depth == self.root_depth {
                        self.best_move = Some(mv);
                    }
                }
                alpha = alpha.max(best);
                if best >= beta {
                    self.cutoffs += 1;
                    log::trace!("beta cutoff at depth {} after {}", depth, mv);
                    break;
                }
            } else {
                if score < best {
                    best = score;
                }
                beta = beta.min(best);
                if best <= alpha {
                    self.cutoffs += 1;
                    log::trace!("alpha cutoff at depth {} after {}", depth, mv);
                    break;
                }
            }
        }

        best
    }
}
