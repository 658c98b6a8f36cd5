use std::fmt;

use smallvec::SmallVec;

use super::Square;

/// Move list used by generation, ordering and search
pub type MoveList = SmallVec<[Move; 64]>;

/// How a move changes the board beyond relocating one piece.
///
/// Moves themselves carry no flags: the kind is inferred from the position
/// the move is played in, see [`Position::move_type`](super::Position::move_type).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveType {
    Normal,
    EnPassant,
    Promotion,
    Castling,
}

/// A move from one square to another.
///
/// `score` is ordering metadata written by the move orderer. It takes no part
/// in equality: two moves are the same move when `from` and `to` match.
#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub score: i32,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Move {
        Self { from, to, score: 0 }
    }

    /// Parse coordinate notation: "e2e4", "e2-e4" or "e2 e4"
    pub fn parse(s: &str) -> Option<Move> {
        let squares: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect();
        if squares.len() != 4 || !squares.is_ascii() {
            return None;
        }
        let from = squares[0..2].parse().ok()?;
        let to = squares[2..4].parse().ok()?;
        Some(Move::new(from, to))
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Eq for Move {}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}
