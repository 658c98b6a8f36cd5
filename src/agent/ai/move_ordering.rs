// Move ordering for alpha-beta: captures first, scored by MVV-LVA

use crate::game_repr::{Color, Move, MoveList, MoveType, Position, Type};

/// MVV-LVA scores indexed `[victim][attacker]`, both in P, N, B, R, Q, K order.
///
/// Row value grows with the victim, and within a row a cheaper attacker scores
/// higher: pawn takes queen is the best capture, queen takes pawn the worst.
/// A king attacker is valued like a queen.
pub const MVV_LVA: [[i32; 6]; 6] = [
    [15, 14, 13, 12, 11, 11], // victim P
    [25, 24, 23, 22, 21, 21], // victim N
    [35, 34, 33, 32, 31, 31], // victim B
    [45, 44, 43, 42, 41, 41], // victim R
    [55, 54, 53, 52, 51, 51], // victim Q
    [65, 64, 63, 62, 61, 61], // victim K
];

fn mvv_lva_index(piece_type: Type) -> Option<usize> {
    match piece_type {
        Type::Pawn => Some(0),
        Type::Knight => Some(1),
        Type::Bishop => Some(2),
        Type::Rook => Some(3),
        Type::Queen => Some(4),
        Type::King => Some(5),
        Type::None => None,
    }
}

/// Unsigned MVV-LVA score of a move, 0 for quiet moves
pub fn capture_score(pos: &Position, mv: Move) -> i32 {
    let attacker = pos.get(mv.from).piece_type;
    let victim = match pos.move_type(mv) {
        MoveType::EnPassant => Type::Pawn,
        _ => pos.get(mv.to).piece_type,
    };

    match (mvv_lva_index(victim), mvv_lva_index(attacker)) {
        (Some(v), Some(a)) => MVV_LVA[v][a],
        _ => 0,
    }
}

/// Write an ordering score into every move.
///
/// Scores are signed from `perspective`'s point of view: its own captures are
/// positive, the opponent's are negative.
pub fn value_moves(pos: &Position, moves: &mut [Move], perspective: Color) {
    for mv in moves.iter_mut() {
        let score = capture_score(pos, *mv);
        mv.score = if pos.get(mv.from).color == perspective {
            score
        } else {
            -score
        };
    }
}

/// Score and sort: descending on maximizing plies, ascending on minimizing ones.
/// The sort is stable, equal scores keep generation order.
pub fn order_moves(pos: &Position, moves: &mut [Move], perspective: Color, maximizing: bool) {
    value_moves(pos, moves, perspective);
    if maximizing {
        moves.sort_by(|a, b| b.score.cmp(&a.score));
    } else {
        moves.sort_by(|a, b| a.score.cmp(&b.score));
    }
}

/// Keep at most `max` moves. Run after ordering so the best ones survive.
pub fn crop_moves(moves: &mut MoveList, max: usize) {
    moves.truncate(max);
}

/// Generate, order and optionally crop all legal moves of `mover`.
///
/// The crop never empties a non-empty list, so an empty result always means
/// mate or stalemate.
pub fn generate_ordered_moves(
    pos: &Position,
    mover: Color,
    perspective: Color,
    limit: Option<usize>,
) -> MoveList {
    let mut moves = pos.all_legal_moves(mover);
    order_moves(pos, &mut moves, perspective, mover == perspective);
    if let Some(max) = limit {
        crop_moves(&mut moves, max.max(1));
    }
    moves
}
