//! Turn controller.
//!
//! [`Game`] owns the live board and composes two [`Player`]s. Each turn it
//! first asks the board for the state of the side to move; only when that
//! side can still move does it request, validate and apply a move.
//!
//! ```text
//! pre_turn (state of side to move) -> over? -> notify players, stop
//!                                   -> take_turn: get_move -> validate
//!                                      -> apply + record -> notify opponent
//!                                      -> pass the turn
//! ```

use crate::agent::ai::search::DEFAULT_SEARCH_DEPTH;
use crate::agent::player::{GameResult, Player, TurnContext};
use crate::error::{ChessError, Result};
use crate::game_repr::{Color, GameState, Move, Position};
use crate::move_log::{MoveHistory, MoveLog};

pub struct Game {
    board: Position,
    white: Box<dyn Player>,
    black: Box<dyn Player>,
    side_to_move: Color,
    /// Look-ahead handed to players each turn, adjustable between turns
    search_depth: u8,
    history: MoveHistory,
    result: Option<GameResult>,
}

impl Game {
    /// New game from the standard starting position, White to move
    pub fn new(white: Box<dyn Player>, black: Box<dyn Player>) -> Self {
        Self::from_position(Position::default(), Color::White, white, black)
    }

    pub fn from_position(
        board: Position,
        side_to_move: Color,
        white: Box<dyn Player>,
        black: Box<dyn Player>,
    ) -> Self {
        Self {
            board,
            white,
            black,
            side_to_move,
            search_depth: DEFAULT_SEARCH_DEPTH,
            history: MoveHistory::starting_with(side_to_move),
            result: None,
        }
    }

    pub fn with_search_depth(mut self, depth: u8) -> Self {
        self.search_depth = depth.max(1);
        self
    }

    pub fn board(&self) -> &Position {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn search_depth(&self) -> u8 {
        self.search_depth
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    pub fn increase_search_depth(&mut self) {
        self.search_depth = self.search_depth.saturating_add(1);
        log::info!("Search depth {}", self.search_depth);
    }

    /// Never goes below 1
    pub fn decrease_search_depth(&mut self) {
        self.search_depth = self.search_depth.saturating_sub(1).max(1);
        log::info!("Search depth {}", self.search_depth);
    }

    fn player_mut(&mut self, color: Color) -> &mut dyn Player {
        match color {
            Color::White => self.white.as_mut(),
            Color::Black => self.black.as_mut(),
        }
    }

    /// State of the side to move. Ends the game on mate or stalemate.
    pub fn pre_turn(&mut self) -> GameState {
        let side = self.side_to_move;
        let state = self.board.game_state(side);
        self.history.record_game_state(side, state);

        if state.is_over() && self.result.is_none() {
            let result = match state {
                GameState::Checkmate => GameResult::from_winner(side.opposite()),
                _ => GameResult::Stalemate,
            };
            log::info!("Game over after {} plies: {:?}", self.history.len(), result);
            self.result = Some(result);
            self.white.game_ended(result);
            self.black.game_ended(result);
        }

        state
    }

    /// Ask the side to move for a move, check it and play it.
    ///
    /// An illegal move leaves the board untouched and is returned as
    /// [`ChessError::IllegalMove`].
    pub fn take_turn(&mut self) -> Result<Move> {
        let side = self.side_to_move;
        if self.result.is_some() {
            return Err(ChessError::GameOver {
                color: side,
                state: self.board.game_state(side),
            });
        }

        let ctx = TurnContext {
            search_depth: self.search_depth,
        };
        let board = self.board;
        let mv = self.player_mut(side).get_move(&board, side, &ctx)?;

        if !self.board.get(mv.from).is(side) || !self.board.is_move_legal(mv) {
            return Err(ChessError::IllegalMove {
                mv: mv.to_string(),
                color: side,
            });
        }

        self.board.play_move(mv, &mut self.history);
        self.player_mut(side.opposite()).opponent_moved(mv);
        self.side_to_move = side.opposite();
        log::debug!("\n{}", self.board);

        Ok(mv)
    }

    /// Play until the game ends or `max_plies` moves have been made
    pub fn run(&mut self, max_plies: usize) -> Result<Option<GameResult>> {
        for _ in 0..max_plies {
            if self.pre_turn().is_over() {
                return Ok(self.result);
            }
            self.take_turn()?;
        }
        self.pre_turn();
        Ok(self.result)
    }
}
