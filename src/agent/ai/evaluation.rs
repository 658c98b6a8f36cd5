// Static position evaluation
// Scores are in centipawns from a fixed side's point of view (positive = good for that side)

use crate::game_repr::{Color, Position, Square, Type};

/// Centre squares d4, e4, d5, e5
pub const CENTRE_SQUARES: [Square; 4] = [
    Square::new(3, 3),
    Square::new(4, 3),
    Square::new(3, 4),
    Square::new(4, 4),
];

/// Tunable evaluation constants.
///
/// The king is valued far above everything else so that losing it outweighs
/// any other material swing. `checkmate` and `stalemate` are only used when a
/// search node runs out of moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalWeights {
    pub pawn: i32,
    pub knight: i32,
    pub bishop: i32,
    pub rook: i32,
    pub queen: i32,
    pub king: i32,
    /// Bonus for any piece standing on a centre square
    pub centre_bonus: i32,
    pub checkmate: i32,
    /// Score of a stalemate for the evaluating side, 0 treats it as neutral
    pub stalemate: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            pawn: 100,
            knight: 320,
            bishop: 330,
            rook: 500,
            queen: 900,
            king: 20_000,
            centre_bonus: 20,
            checkmate: 100_000,
            stalemate: 0,
        }
    }
}

impl EvalWeights {
    pub fn piece_value(&self, piece_type: Type) -> i32 {
        match piece_type {
            Type::Pawn => self.pawn,
            Type::Knight => self.knight,
            Type::Bishop => self.bishop,
            Type::Rook => self.rook,
            Type::Queen => self.queen,
            Type::King => self.king,
            Type::None => 0,
        }
    }
}

/// Material plus centre-control evaluator
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    weights: EvalWeights,
}

impl Evaluator {
    pub fn new(weights: EvalWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &EvalWeights {
        &self.weights
    }

    /// Static score of `pos` for `perspective`. Pure: never touches the board.
    pub fn evaluate(&self, pos: &Position, perspective: Color) -> i32 {
        self.material_score(pos, perspective) + self.positional_score(pos, perspective)
    }

    /// Sum of piece values, own pieces added and enemy pieces subtracted
    pub fn material_score(&self, pos: &Position, perspective: Color) -> i32 {
        pos.position
            .iter()
            .filter(|piece| !piece.is_none())
            .map(|piece| {
                let value = self.weights.piece_value(piece.piece_type);
                if piece.color == perspective {
                    value
                } else {
                    -value
                }
            })
            .sum()
    }

    /// Centre occupation bonus, any piece kind counts
    pub fn positional_score(&self, pos: &Position, perspective: Color) -> i32 {
        CENTRE_SQUARES
            .iter()
            .map(|&sq| pos.get(sq))
            .filter(|piece| !piece.is_none())
            .map(|piece| {
                if piece.color == perspective {
                    self.weights.centre_bonus
                } else {
                    -self.weights.centre_bonus
                }
            })
            .sum()
    }

    /// Adjustment for a node where `mover` has no legal moves.
    ///
    /// A mated mover is a loss for whichever side it is, a stalemate scores
    /// the configured stalemate value for `perspective`.
    pub fn score_game_over(&self, pos: &Position, mover: Color, perspective: Color) -> i32 {
        if pos.is_in_check(mover) {
            if mover == perspective {
                -self.weights.checkmate
            } else {
                self.weights.checkmate
            }
        } else {
            self.weights.stalemate
        }
    }
}
