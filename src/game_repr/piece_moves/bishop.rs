use super::super::{MoveList, Position, Square};
use super::DIAGONAL;

impl Position {
    /// Generate bishop moves into a provided buffer
    pub fn bishop_moves_into(&self, from: Square, moves: &mut MoveList) {
        self.ray_moves_into(from, &DIAGONAL, moves);
    }

    pub fn bishop_moves(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        self.bishop_moves_into(from, &mut moves);
        moves
    }
}
