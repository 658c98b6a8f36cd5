use super::super::{Move, MoveList, Position, Square, Type};

impl Position {
    /// Generate pawn moves into a provided buffer.
    ///
    /// Promotion is not a separate move: a pawn landing on the far rank is
    /// turned into a queen when the move is applied.
    pub fn pawn_moves_into(&self, from: Square, moves: &mut MoveList) {
        let color = self.get(from).color;
        let enemy = color.opposite();
        let forward = color.forward();

        // pushes
        if let Some(one) = from.offset(0, forward) {
            if self.is_empty(one) {
                moves.push(Move::new(from, one));

                if from.rank == color.pawn_rank() {
                    if let Some(two) = from.offset(0, 2 * forward) {
                        if self.is_empty(two) {
                            moves.push(Move::new(from, two));
                        }
                    }
                }
            }
        }

        // captures, including en passant onto the square behind a pawn
        // that double-stepped on the previous ply
        for side in [-1, 1] {
            let target = match from.offset(side, forward) {
                Some(sq) => sq,
                None => continue,
            };

            if self.is_occupied_by(target, enemy) {
                moves.push(Move::new(from, target));
            } else if self.is_empty(target) {
                let passed = from.offset(side, 0).map(|sq| self.get(sq));
                if let Some(victim) = passed {
                    if victim.is_kind(enemy, Type::Pawn) && victim.en_passant {
                        moves.push(Move::new(from, target));
                    }
                }
            }
        }
    }

    pub fn pawn_moves(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        self.pawn_moves_into(from, &mut moves);
        moves
    }
}
