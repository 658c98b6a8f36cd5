use super::super::{Move, MoveList, Position, Square, Type};
use super::KING_OFFSETS;

impl Position {
    /// Generate king moves, castling included, into a provided buffer.
    ///
    /// Castling needs an unmoved king on its home square, an unmoved rook of
    /// the same color in the corner, empty squares between them, and a king
    /// that is neither in check nor passing over an attacked square.
    pub fn king_moves_into(&self, from: Square, moves: &mut MoveList) {
        self.step_moves_into(from, &KING_OFFSETS, moves);

        let king = self.get(from);
        let color = king.color;
        let home = Square::new(4, color.back_rank());

        if king.has_moved || from != home {
            return;
        }

        // Can't castle out of check
        if self.is_in_check(color) {
            return;
        }

        let opponent = color.opposite();

        // (rook file, files that must be empty, files the king crosses, king target file)
        let sides: [(u8, &[u8], [u8; 2], u8); 2] = [
            (7, &[5, 6], [5, 6], 6),
            (0, &[1, 2, 3], [3, 2], 2),
        ];

        for (rook_file, between, crossed, target_file) in sides {
            let rook = self.get(Square::new(rook_file, home.rank));
            if !rook.is_kind(color, Type::Rook) || rook.has_moved {
                continue;
            }

            let path_clear = between
                .iter()
                .all(|&file| self.is_empty(Square::new(file, home.rank)));
            if !path_clear {
                continue;
            }

            let king_safe = crossed
                .iter()
                .all(|&file| !self.is_square_attacked(Square::new(file, home.rank), opponent));
            if king_safe {
                moves.push(Move::new(from, Square::new(target_file, home.rank)));
            }
        }
    }

    pub fn king_moves(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        self.king_moves_into(from, &mut moves);
        moves
    }
}
