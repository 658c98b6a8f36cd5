use std::fmt;

use super::piece_moves::{DIAGONAL, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONAL};
use super::*;
use crate::error::{ChessError, Result};
use crate::move_log::MoveLog;

/*
 * MODULE IS RESPONSIBLE FOR
 * GAME REPRESENTATION AND LOGIC
 */

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// State of the game from the point of view of the side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Normal,
    Check,
    Checkmate,
    Stalemate,
}

impl GameState {
    pub fn is_over(&self) -> bool {
        matches!(self, GameState::Checkmate | GameState::Stalemate)
    }
}

/// 8x8 board of [`Piece`] cells.
///
/// The search copies the whole board at every node, so this stays a plain
/// `Copy`-able array with no side tables to keep in sync.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Mailbox representation, indexed by [`Square::index`]
    pub position: [Piece; 64],
}

impl Default for Position {
    fn default() -> Self {
        Self::starting()
    }
}

impl Position {
    pub fn empty() -> Position {
        Position {
            position: [Piece::none(); 64],
        }
    }

    /// Standard starting layout
    pub fn starting() -> Position {
        const BACK_RANK: [Type; 8] = [
            Type::Rook,
            Type::Knight,
            Type::Bishop,
            Type::Queen,
            Type::King,
            Type::Bishop,
            Type::Knight,
            Type::Rook,
        ];

        let mut pos = Position::empty();
        for color in [Color::White, Color::Black] {
            for (file, &piece_type) in BACK_RANK.iter().enumerate() {
                pos.set(
                    Square::new(file as u8, color.back_rank()),
                    Piece::new(color, piece_type),
                );
                pos.set(
                    Square::new(file as u8, color.pawn_rank()),
                    Piece::new(color, Type::Pawn),
                );
            }
        }
        pos
    }

    pub fn get(&self, sq: Square) -> Piece {
        self.position[sq.index()]
    }

    pub fn set(&mut self, sq: Square, piece: Piece) {
        self.position[sq.index()] = piece;
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    pub fn is_occupied_by(&self, sq: Square, color: Color) -> bool {
        self.get(sq).is(color)
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| self.get(sq).is_kind(color, Type::King))
    }

    /// All occupied squares belonging to `color`, in mailbox order
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all()
            .map(move |sq| (sq, self.get(sq)))
            .filter(move |(_, piece)| piece.is(color))
    }

    /// Parse a FEN string into a position and the side to move.
    ///
    /// Only the placement field is required. Castling rights become
    /// `has_moved` flags on kings and rooks, an en passant target sets the
    /// flag on the pawn that just double-stepped. Move counters are ignored.
    pub fn parse_fen(fen: &str) -> Result<(Position, Color)> {
        let invalid = |reason: &str| ChessError::InvalidFen {
            fen: fen.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = fen.split_whitespace().collect();
        let placement = parts.first().ok_or_else(|| invalid("empty string"))?;

        let mut pos = Position::empty();
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(invalid("placement must have 8 ranks"));
        }

        for (row, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - row as u8;
            let mut file = 0u8;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if !(1..=8).contains(&skip) {
                        return Err(invalid("empty-square count out of range"));
                    }
                    file += skip as u8;
                } else {
                    let piece = Piece::from_char(c).ok_or_else(|| invalid("unknown piece"))?;
                    if file >= 8 {
                        return Err(invalid("rank has more than 8 files"));
                    }
                    pos.set(Square::new(file, rank), piece);
                    file += 1;
                }
                if file > 8 {
                    return Err(invalid("rank has more than 8 files"));
                }
            }
            if file != 8 {
                return Err(invalid("rank does not cover 8 files"));
            }
        }

        let side = match parts.get(1) {
            None | Some(&"w") => Color::White,
            Some(&"b") => Color::Black,
            Some(_) => return Err(invalid("side to move must be 'w' or 'b'")),
        };

        // Pieces off their home squares have necessarily moved
        for idx in 0..64 {
            let sq = Square::from_index(idx);
            let piece = &mut pos.position[idx];
            piece.has_moved = match piece.piece_type {
                Type::King => sq != Square::new(4, piece.color.back_rank()),
                Type::Rook => sq.rank != piece.color.back_rank() || (sq.file != 0 && sq.file != 7),
                Type::Pawn => sq.rank != piece.color.pawn_rank(),
                _ => false,
            };
        }

        if let Some(castling) = parts.get(2) {
            if castling.chars().any(|c| !"KQkq-".contains(c)) {
                return Err(invalid("bad castling field"));
            }
            for color in [Color::White, Color::Black] {
                let (king_side, queen_side) = match color {
                    Color::White => (castling.contains('K'), castling.contains('Q')),
                    Color::Black => (castling.contains('k'), castling.contains('q')),
                };
                let rank = color.back_rank();
                pos.mark_moved_unless(Square::new(7, rank), color, Type::Rook, king_side);
                pos.mark_moved_unless(Square::new(0, rank), color, Type::Rook, queen_side);
                pos.mark_moved_unless(Square::new(4, rank), color, Type::King, king_side || queen_side);
            }
        }

        if let Some(&target) = parts.get(3) {
            if target != "-" {
                let target: Square = target
                    .parse()
                    .map_err(|_| invalid("bad en passant square"))?;
                // The pawn that just moved sits one rank beyond the target,
                // seen from the side that moved it
                let mover = side.opposite();
                let pawn_sq = target
                    .offset(0, mover.forward())
                    .ok_or_else(|| invalid("bad en passant square"))?;
                let pawn = &mut pos.position[pawn_sq.index()];
                if !pawn.is_kind(mover, Type::Pawn) {
                    return Err(invalid("no pawn to capture en passant"));
                }
                pawn.en_passant = true;
            }
        }

        Ok((pos, side))
    }

    pub fn from_fen(fen: &str) -> Result<Position> {
        Self::parse_fen(fen).map(|(pos, _)| pos)
    }

    fn mark_moved_unless(&mut self, sq: Square, color: Color, piece_type: Type, has_right: bool) {
        let piece = &mut self.position[sq.index()];
        if piece.is_kind(color, piece_type) && !has_right {
            piece.has_moved = true;
        }
    }

    /// Turn-boundary maintenance: an en passant opportunity created by
    /// `color` expires once `color` is about to move again.
    pub fn clear_en_passant(&mut self, color: Color) {
        for piece in self.position.iter_mut() {
            if piece.is(color) {
                piece.en_passant = false;
            }
        }
    }

    /// Classify a move against this position
    pub fn move_type(&self, mv: Move) -> MoveType {
        let moving = self.get(mv.from);
        match moving.piece_type {
            Type::Pawn if mv.from.file != mv.to.file && self.is_empty(mv.to) => MoveType::EnPassant,
            Type::Pawn if mv.to.rank == moving.color.promotion_rank() => MoveType::Promotion,
            Type::King if (mv.to.file as i8 - mv.from.file as i8).abs() == 2 => MoveType::Castling,
            _ => MoveType::Normal,
        }
    }

    /// Apply a move in place.
    ///
    /// Handles every side effect: captures, en passant removal, the castling
    /// rook, forced queen promotion and the en passant flag bookkeeping. The
    /// move must come from this position's move generator.
    pub fn apply_move(&mut self, mv: Move) {
        let moving = self.get(mv.from);
        debug_assert!(!moving.is_none(), "no piece on {}", mv.from);
        let color = moving.color;

        self.clear_en_passant(color);

        match self.move_type(mv) {
            MoveType::EnPassant => {
                self.set(Square::new(mv.to.file, mv.from.rank), Piece::none());
            }
            MoveType::Castling => {
                let rank = mv.from.rank;
                let (rook_from, rook_to) = if mv.to.file > mv.from.file {
                    (Square::new(7, rank), Square::new(5, rank)) // Kingside: h -> f
                } else {
                    (Square::new(0, rank), Square::new(3, rank)) // Queenside: a -> d
                };
                let mut rook = self.get(rook_from);
                rook.has_moved = true;
                self.set(rook_to, rook);
                self.set(rook_from, Piece::none());
            }
            MoveType::Normal | MoveType::Promotion => {}
        }

        let mut piece = moving;
        piece.has_moved = true;
        piece.en_passant = piece.piece_type == Type::Pawn
            && mv.from.rank == color.pawn_rank()
            && (mv.to.rank as i8 - mv.from.rank as i8).abs() == 2;
        if piece.piece_type == Type::Pawn && mv.to.rank == color.promotion_rank() {
            piece.piece_type = Type::Queen;
        }

        self.set(mv.to, piece);
        self.set(mv.from, Piece::none());
    }

    /// Apply a move to the live board and report it to the move log
    pub fn play_move(&mut self, mv: Move, log: &mut dyn MoveLog) {
        self.apply_move(mv);
        log.record(&mv);
    }

    /// Would the mover's king be safe after `mv`? Checked on a private copy.
    fn keeps_king_safe(&self, mv: Move) -> bool {
        let color = self.get(mv.from).color;
        let mut scratch = *self;
        scratch.apply_move(mv);
        !scratch.is_in_check(color)
    }

    /// Generate legal moves for the piece on `from` into a provided buffer.
    /// The buffer is NOT cleared before adding moves.
    pub fn legal_moves_into(&self, from: Square, moves: &mut MoveList) {
        let mut pseudo = MoveList::new();
        self.pseudo_legal_moves_into(from, &mut pseudo);

        moves.extend(pseudo.into_iter().filter(|&mv| self.keeps_king_safe(mv)));
    }

    pub fn legal_moves(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        self.legal_moves_into(from, &mut moves);
        moves
    }

    /// Generate every legal move for `color` into a provided buffer
    pub fn all_legal_moves_into(&self, color: Color, moves: &mut MoveList) {
        for (sq, _) in self.pieces(color) {
            self.legal_moves_into(sq, moves);
        }
    }

    pub fn all_legal_moves(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        self.all_legal_moves_into(color, &mut moves);
        moves
    }

    pub fn has_legal_moves(&self, color: Color) -> bool {
        self.pieces(color).any(|(sq, _)| !self.legal_moves(sq).is_empty())
    }

    /// Full legality check: a piece on `from`, a generated destination, king left safe
    pub fn is_move_legal(&self, mv: Move) -> bool {
        if self.is_empty(mv.from) {
            return false;
        }
        let mut pseudo = MoveList::new();
        self.pseudo_legal_moves_into(mv.from, &mut pseudo);
        pseudo.contains(&mv) && self.keeps_king_safe(mv)
    }

    /// Checks if a square is under attack by any piece of the given color.
    ///
    /// Walks outward from `square` and looks for a piece of `by_color` that
    /// would reach it with its movement shape. Castling and en passant never
    /// attack, so this never recurses into move generation.
    pub fn is_square_attacked(&self, square: Square, by_color: Color) -> bool {
        let attacker = |sq: Option<Square>, kinds: &[Type]| {
            sq.map(|sq| self.get(sq))
                .map_or(false, |p| p.is(by_color) && kinds.contains(&p.piece_type))
        };

        // Pawns attack diagonally forward, so look one rank "behind" the square
        let back = -by_color.forward();
        if attacker(square.offset(-1, back), &[Type::Pawn])
            || attacker(square.offset(1, back), &[Type::Pawn])
        {
            return true;
        }

        if KNIGHT_OFFSETS
            .iter()
            .any(|&(df, dr)| attacker(square.offset(df, dr), &[Type::Knight]))
        {
            return true;
        }

        if KING_OFFSETS
            .iter()
            .any(|&(df, dr)| attacker(square.offset(df, dr), &[Type::King]))
        {
            return true;
        }

        let sliders: [(&[(i8, i8)], [Type; 2]); 2] = [
            (&ORTHOGONAL, [Type::Rook, Type::Queen]),
            (&DIAGONAL, [Type::Bishop, Type::Queen]),
        ];
        for (directions, kinds) in sliders {
            for &(df, dr) in directions {
                let mut current = square;
                while let Some(next) = current.offset(df, dr) {
                    let piece = self.get(next);
                    if !piece.is_none() {
                        if piece.is(by_color) && kinds.contains(&piece.piece_type) {
                            return true;
                        }
                        break;
                    }
                    current = next;
                }
            }
        }

        false
    }

    /// A side with no king on the board is never in check
    pub fn is_in_check(&self, color: Color) -> bool {
        self.king_square(color)
            .map_or(false, |sq| self.is_square_attacked(sq, color.opposite()))
    }

    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_legal_moves(color)
    }

    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_legal_moves(color)
    }

    pub fn is_game_over(&self, color: Color) -> bool {
        !self.has_legal_moves(color)
    }

    pub fn game_state(&self, color: Color) -> GameState {
        let in_check = self.is_in_check(color);
        let has_moves = self.has_legal_moves(color);
        match (in_check, has_moves) {
            (true, false) => GameState::Checkmate,
            (false, false) => GameState::Stalemate,
            (true, true) => GameState::Check,
            (false, true) => GameState::Normal,
        }
    }

    /// Count leaf nodes of the legal move tree to `depth` plies
    pub fn perft(&self, depth: u8, color: Color) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.all_legal_moves(color);
        if depth == 1 {
            return moves.len() as u64;
        }

        moves
            .iter()
            .map(|&mv| {
                let mut next = *self;
                next.apply_move(mv);
                next.perft(depth - 1, color.opposite())
            })
            .sum()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8u8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8u8 {
                write!(f, " {}", self.get(Square::new(file, rank)).to_char())?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Position")?;
        fmt::Display::fmt(self, f)
    }
}
