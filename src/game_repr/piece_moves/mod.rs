//! Pseudo-legal move generation, one file per piece kind.
//!
//! Everything here follows piece movement shapes only. Filtering out moves
//! that leave the mover's king in check happens in `Position::legal_moves_into`.

mod bishop;
mod king;
mod knight;
mod pawn;
mod queen;
mod rook;

use super::{Move, MoveList, Position, Square, Type};

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

pub(crate) const ORTHOGONAL: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

pub(crate) const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

impl Position {
    /// Generate pseudo-legal moves for the piece on `from` into `moves`.
    /// The buffer is NOT cleared first.
    pub fn pseudo_legal_moves_into(&self, from: Square, moves: &mut MoveList) {
        match self.get(from).piece_type {
            Type::Pawn => self.pawn_moves_into(from, moves),
            Type::Knight => self.knight_moves_into(from, moves),
            Type::Bishop => self.bishop_moves_into(from, moves),
            Type::Rook => self.rook_moves_into(from, moves),
            Type::Queen => self.queen_moves_into(from, moves),
            Type::King => self.king_moves_into(from, moves),
            Type::None => {}
        }
    }

    /// Cast rays from `from`, stopping at the first occupied square.
    /// An enemy blocker is included as a capture, a friendly one is not.
    fn ray_moves_into(&self, from: Square, directions: &[(i8, i8)], moves: &mut MoveList) {
        let color = self.get(from).color;

        for &(df, dr) in directions {
            let mut current = from;
            while let Some(next) = current.offset(df, dr) {
                let target = self.get(next);
                if target.is_none() {
                    moves.push(Move::new(from, next));
                } else {
                    if target.color != color {
                        moves.push(Move::new(from, next));
                    }
                    break;
                }
                current = next;
            }
        }
    }

    /// Moves onto fixed offsets that are on the board and not friendly-occupied
    fn step_moves_into(&self, from: Square, offsets: &[(i8, i8)], moves: &mut MoveList) {
        let color = self.get(from).color;

        for &(df, dr) in offsets {
            if let Some(target) = from.offset(df, dr) {
                if !self.is_occupied_by(target, color) {
                    moves.push(Move::new(from, target));
                }
            }
        }
    }
}
