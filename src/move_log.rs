//! Move recording collaborator.
//!
//! Every move applied to a live board is reported to a [`MoveLog`]. The log is
//! handed in explicitly by whoever owns the game, the core never reaches for
//! a global recorder.

use crate::game_repr::{Color, GameState, Move};

/// Receiver for applied moves
pub trait MoveLog {
    /// Called once per applied move, after the board has been updated
    fn record(&mut self, mv: &Move);

    /// Called by the turn controller with the state of the side about to move
    fn record_game_state(&mut self, color: Color, state: GameState) {
        match state {
            GameState::Normal => {}
            GameState::Check => log::info!("{:?} is in check", color),
            GameState::Checkmate => log::info!("{:?} is checkmated", color),
            GameState::Stalemate => log::info!("{:?} is stalemated", color),
        }
    }
}

/// Plain move list, handy when only the moves matter
impl MoveLog for Vec<Move> {
    fn record(&mut self, mv: &Move) {
        self.push(*mv);
    }
}

/// Full game record with logging of each move as it is played
#[derive(Debug, Clone)]
pub struct MoveHistory {
    moves: Vec<Move>,
    /// Side that played the first recorded move
    first_mover: Color,
}

impl Default for MoveHistory {
    fn default() -> Self {
        Self::starting_with(Color::White)
    }
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// History of a game whose first move is played by `first_mover`
    pub fn starting_with(first_mover: Color) -> Self {
        Self {
            moves: Vec::new(),
            first_mover,
        }
    }

    pub fn first_mover(&self) -> Color {
        self.first_mover
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn last(&self) -> Option<&Move> {
        self.moves.last()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Numbered notation of the move at `index`, "1. e2-e4" or "1. ... e7-e5"
    pub fn numbered(&self, index: usize) -> Option<String> {
        let mv = self.moves.get(index)?;
        // Plies counted as if White always moved first
        let ply = index + usize::from(self.first_mover == Color::Black);
        let dots = if ply % 2 == 1 { "... " } else { "" };
        Some(format!("{}. {}{}", ply / 2 + 1, dots, mv))
    }
}

impl MoveLog for MoveHistory {
    fn record(&mut self, mv: &Move) {
        self.moves.push(*mv);
        if let Some(line) = self.numbered(self.moves.len() - 1) {
            log::info!("{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::Position;

    #[test]
    fn test_history_records_in_order() {
        let mut pos = Position::default();
        let mut history = MoveHistory::new();

        let e4 = Move::parse("e2e4").unwrap();
        let e5 = Move::parse("e7e5").unwrap();
        pos.play_move(e4, &mut history);
        pos.play_move(e5, &mut history);

        assert_eq!(history.len(), 2);
        assert_eq!(history.moves(), &[e4, e5]);
        assert_eq!(history.last(), Some(&e5));

        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn test_numbering_from_white() {
        let mut pos = Position::default();
        let mut history = MoveHistory::new();
        pos.play_move(Move::parse("e2e4").unwrap(), &mut history);
        pos.play_move(Move::parse("e7e5").unwrap(), &mut history);
        pos.play_move(Move::parse("g1f3").unwrap(), &mut history);

        assert_eq!(history.numbered(0).as_deref(), Some("1. e2-e4"));
        assert_eq!(history.numbered(1).as_deref(), Some("1. ... e7-e5"));
        assert_eq!(history.numbered(2).as_deref(), Some("2. g1-f3"));
        assert_eq!(history.numbered(3), None);
    }

    #[test]
    fn test_numbering_when_black_moves_first() {
        let (mut pos, side) = Position::parse_fen("4k3/8/8/8/8/8/8/4K3 b - -").unwrap();
        let mut history = MoveHistory::starting_with(side);
        pos.play_move(Move::parse("e8d8").unwrap(), &mut history);
        pos.play_move(Move::parse("e1d1").unwrap(), &mut history);

        assert_eq!(history.first_mover(), Color::Black);
        assert_eq!(history.numbered(0).as_deref(), Some("1. ... e8-d8"));
        assert_eq!(history.numbered(1).as_deref(), Some("2. e1-d1"));
    }

    #[test]
    fn test_vec_as_move_log() {
        let mut pos = Position::default();
        let mut log: Vec<Move> = Vec::new();

        pos.play_move(Move::parse("g1f3").unwrap(), &mut log);
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].to_string(), "g1-f3");
    }
}
