use super::super::{MoveList, Position, Square};
use super::ORTHOGONAL;

impl Position {
    /// Generate rook moves into a provided buffer
    pub fn rook_moves_into(&self, from: Square, moves: &mut MoveList) {
        self.ray_moves_into(from, &ORTHOGONAL, moves);
    }

    pub fn rook_moves(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        self.rook_moves_into(from, &mut moves);
        moves
    }
}
