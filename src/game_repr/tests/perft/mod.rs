use super::*;

// Published node counts for the standard perft suite

mod endgame;
mod kiwipete;
mod starting_position;

pub fn run_perft(fen: &str, depth: u8) -> u64 {
    let (pos, side) = Position::parse_fen(fen).unwrap();
    pos.perft(depth, side)
}
