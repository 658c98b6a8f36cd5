use std::fmt;
use std::str::FromStr;

use crate::error::ChessError;

/// Board coordinate.
///
/// `file` 0..=7 is a..h, `rank` 0..=7 is 1..8. Rank 0 is White's back rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub file: u8,
    pub rank: u8,
}

impl Square {
    pub const fn new(file: u8, rank: u8) -> Self {
        debug_assert!(file < 8 && rank < 8);
        Self { file, rank }
    }

    /// Square offset by (`df`, `dr`), or `None` when it falls off the board
    pub fn offset(&self, df: i8, dr: i8) -> Option<Square> {
        let file = self.file as i8 + df;
        let rank = self.rank as i8 + dr;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square::new(file as u8, rank as u8))
        } else {
            None
        }
    }

    /// Mailbox index, rank-major (a1 = 0, h1 = 7, a8 = 56)
    pub fn index(&self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    pub fn from_index(idx: usize) -> Self {
        assert!(idx < 64, "square index out of range: {}", idx);
        Self::new((idx % 8) as u8, (idx / 8) as u8)
    }

    /// Iterate all 64 squares in mailbox order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(ChessError::InvalidSquare(s.to_string()));
        }
        let file = bytes[0].to_ascii_lowercase().wrapping_sub(b'a');
        let rank = bytes[1].wrapping_sub(b'1');
        if file < 8 && rank < 8 {
            Ok(Square::new(file, rank))
        } else {
            Err(ChessError::InvalidSquare(s.to_string()))
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, self.rank + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let sq: Square = "e4".parse().unwrap();
        assert_eq!(sq, Square::new(4, 3));
        assert_eq!(sq.to_string(), "e4");
        assert_eq!("a1".parse::<Square>().unwrap().index(), 0);
        assert_eq!("h8".parse::<Square>().unwrap().index(), 63);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("e".parse::<Square>().is_err());
        assert!("e44".parse::<Square>().is_err());
    }

    #[test]
    fn test_offset_stays_on_board() {
        let a1 = Square::new(0, 0);
        assert_eq!(a1.offset(-1, 0), None);
        assert_eq!(a1.offset(1, 2), Some(Square::new(1, 2)));
        assert_eq!(Square::new(7, 7).offset(1, 1), None);
    }
}
