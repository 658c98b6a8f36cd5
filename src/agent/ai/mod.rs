// AI Agent - Minimax with Alpha-Beta Pruning
//
// Key features:
// - Deterministic (same position and settings always give the same move)
// - Fixed-depth minimax from the searching side's point of view
// - MVV-LVA move ordering with an optional per-ply breadth limit
// - Material plus centre-control evaluation

mod ai_player;
pub mod evaluation;
pub mod move_ordering;
pub mod search;

#[cfg(test)]
mod tests;

pub use ai_player::{AIPlayer, Difficulty};

// Re-export useful types
pub use evaluation::{EvalWeights, Evaluator};
pub use search::{SearchConfig, SearchEngine, SearchResult};
