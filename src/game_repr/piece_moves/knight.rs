use super::super::{MoveList, Position, Square};
use super::KNIGHT_OFFSETS;

impl Position {
    /// Generate knight moves into a provided buffer
    pub fn knight_moves_into(&self, from: Square, moves: &mut MoveList) {
        self.step_moves_into(from, &KNIGHT_OFFSETS, moves);
    }

    pub fn knight_moves(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        self.knight_moves_into(from, &mut moves);
        moves
    }
}
