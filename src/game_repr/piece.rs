#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Rank direction pawns of this color advance in
    pub fn forward(&self) -> i8 {
        match self {
            Self::White => 1,
            Self::Black => -1,
        }
    }

    /// Rank the pawns of this color start on
    pub fn pawn_rank(&self) -> u8 {
        match self {
            Self::White => 1,
            Self::Black => 6,
        }
    }

    /// Rank the king and rooks of this color start on
    pub fn back_rank(&self) -> u8 {
        match self {
            Self::White => 0,
            Self::Black => 7,
        }
    }

    /// Rank a pawn of this color promotes on
    pub fn promotion_rank(&self) -> u8 {
        self.opposite().back_rank()
    }
}

/// One board cell.
///
/// `color` is only meaningful when `piece_type` is not `Type::None`.
/// `has_moved` feeds castling rights, `en_passant` is set on a pawn that
/// double-stepped on the previous ply and lives for exactly one opponent ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub piece_type: Type,
    pub has_moved: bool,
    pub en_passant: bool,
}

impl Default for Piece {
    fn default() -> Self {
        Self::none()
    }
}

impl Piece {
    pub const fn none() -> Self {
        Self {
            color: Color::White,
            piece_type: Type::None,
            has_moved: false,
            en_passant: false,
        }
    }

    pub const fn new(color: Color, piece_type: Type) -> Self {
        Self {
            color,
            piece_type,
            has_moved: false,
            en_passant: false,
        }
    }

    pub fn is_none(&self) -> bool {
        self.piece_type == Type::None
    }

    pub fn is(&self, color: Color) -> bool {
        !self.is_none() && self.color == color
    }

    pub fn is_kind(&self, color: Color, piece_type: Type) -> bool {
        self.piece_type == piece_type && self.color == color
    }

    pub fn from_char(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let piece_type = match c.to_ascii_lowercase() {
            'p' => Type::Pawn,
            'n' => Type::Knight,
            'b' => Type::Bishop,
            'r' => Type::Rook,
            'q' => Type::Queen,
            'k' => Type::King,
            _ => return None,
        };

        Some(Self::new(color, piece_type))
    }

    pub fn to_char(&self) -> char {
        let c = match self.piece_type {
            Type::Pawn => 'p',
            Type::Knight => 'n',
            Type::Bishop => 'b',
            Type::Rook => 'r',
            Type::Queen => 'q',
            Type::King => 'k',
            Type::None => return '.',
        };

        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}
