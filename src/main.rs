use std::process::ExitCode;

use minimax_chess::agent::ai::search::DEFAULT_SEARCH_DEPTH;
use minimax_chess::agent::{AIPlayer, SearchConfig};
use minimax_chess::Game;

const MAX_PLIES: usize = 200;

/// AI vs AI self-play.
///
/// Usage: `minimax_chess [depth] [max plies]`. Set `RUST_LOG=debug` to see
/// search statistics and the board after every move.
fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let depth = match args.next().map(|s| s.parse::<u8>()) {
        None => DEFAULT_SEARCH_DEPTH,
        Some(Ok(depth)) if depth > 0 => depth,
        Some(_) => {
            log::error!("depth must be a positive number");
            return ExitCode::FAILURE;
        }
    };
    let max_plies = match args.next().map(|s| s.parse::<usize>()) {
        None => MAX_PLIES,
        Some(Ok(plies)) => plies,
        Some(Err(e)) => {
            log::error!("invalid ply limit: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let white = AIPlayer::new(SearchConfig::with_depth(depth), "White AI".to_string());
    let black = AIPlayer::new(SearchConfig::with_depth(depth), "Black AI".to_string());
    let mut game = Game::new(Box::new(white), Box::new(black)).with_search_depth(depth);

    match game.run(max_plies) {
        Ok(result) => {
            println!("{}", game.board());
            match result {
                Some(result) => println!("{:?} after {} plies", result, game.history().len()),
                None => println!("No result after {} plies", game.history().len()),
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
