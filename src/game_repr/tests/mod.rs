use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Parse a square name, panicking on typos in test setups
pub fn sq(name: &str) -> Square {
    name.parse().expect("valid square name")
}

pub fn mv(from: &str, to: &str) -> Move {
    Move::new(sq(from), sq(to))
}

pub fn empty_board() -> Position {
    Position::empty()
}

pub fn place_piece(pos: &mut Position, square: &str, color: Color, piece_type: Type) {
    pos.set(sq(square), Piece::new(color, piece_type));
}

/// Helper function to check if a move exists in the move list
pub fn has_move(moves: &[Move], from: &str, to: &str) -> bool {
    moves.contains(&mv(from, to))
}

/// Helper function to count moves of a specific type
pub fn count_move_type(pos: &Position, moves: &[Move], move_type: MoveType) -> usize {
    moves
        .iter()
        .filter(|&&m| pos.move_type(m) == move_type)
        .count()
}

// ==================== TEST MODULES ====================

mod pawn_movement;
mod perft;
