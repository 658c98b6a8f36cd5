//! Human player that enters moves as text.
//!
//! Moves are read one per line in coordinate notation (`e2e4`, `e2-e4` or
//! `e2 e4`). Input that does not parse or is not legal on the current board
//! is reported on the output stream and the player is asked again. Promotion
//! needs no extra input, pawns always become queens.
//!
//! # Examples
//!
//! ```rust
//! use std::io::Cursor;
//! use minimax_chess::agent::{HumanPlayer, Player, TurnContext};
//! use minimax_chess::game_repr::{Color, Position};
//!
//! let mut player = HumanPlayer::new(Cursor::new("e2e4\n"), Vec::new(), "Alice".to_string());
//! let mv = player.get_move(&Position::default(), Color::White, &TurnContext { search_depth: 3 }).unwrap();
//! assert_eq!(mv.to_string(), "e2-e4");
//! ```

use std::io::{BufRead, Write};

use crate::agent::player::{GameResult, Player, TurnContext};
use crate::error::{ChessError, Result};
use crate::game_repr::{Color, Move, Position};

/// Human player reading moves from `input` and writing prompts to `output`
pub struct HumanPlayer<R: BufRead, W: Write> {
    input: R,
    output: W,
    name: String,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W, name: String) -> Self {
        Self {
            input,
            output,
            name,
        }
    }

    /// Consume the player, returning the output stream
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ChessError::InputClosed);
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn get_move(&mut self, board: &Position, color: Color, _ctx: &TurnContext) -> Result<Move> {
        loop {
            write!(self.output, "{} ({:?}) move: ", self.name, color)?;
            self.output.flush()?;

            let line = self.read_line()?;
            if line.is_empty() {
                continue;
            }

            let mv = match Move::parse(&line) {
                Some(mv) => mv,
                None => {
                    writeln!(self.output, "Could not read '{}', use e.g. e2e4", line)?;
                    continue;
                }
            };

            if !board.get(mv.from).is(color) || !board.is_move_legal(mv) {
                writeln!(self.output, "Illegal move {}", mv)?;
                continue;
            }

            return Ok(mv);
        }
    }

    fn opponent_moved(&mut self, mv: Move) {
        // Prompt output is best effort, a broken pipe only surfaces on the next read
        let _ = writeln!(self.output, "Opponent played {}", mv);
    }

    fn game_ended(&mut self, result: GameResult) {
        let _ = writeln!(self.output, "Game over: {:?}", result);
    }

    fn name(&self) -> &str {
        &self.name
    }
}
