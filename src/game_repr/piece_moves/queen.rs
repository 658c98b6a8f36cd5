use super::super::{MoveList, Position, Square};

impl Position {
    /// Generate queen moves into a provided buffer
    pub fn queen_moves_into(&self, from: Square, moves: &mut MoveList) {
        self.bishop_moves_into(from, moves);
        self.rook_moves_into(from, moves);
    }

    pub fn queen_moves(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        self.queen_moves_into(from, &mut moves);
        moves
    }
}
