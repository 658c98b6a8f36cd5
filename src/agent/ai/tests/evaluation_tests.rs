// Tests for the static evaluator

use crate::agent::ai::evaluation::{EvalWeights, Evaluator, CENTRE_SQUARES};
use crate::game_repr::{Color, Position};

fn fen(s: &str) -> Position {
    Position::from_fen(s).unwrap()
}

#[test]
fn test_starting_position_balanced() {
    let eval = Evaluator::default();
    let pos = Position::default();

    assert_eq!(eval.evaluate(&pos, Color::White), 0);
    assert_eq!(eval.evaluate(&pos, Color::Black), 0);
}

#[test]
fn test_material_queen_advantage() {
    // Black queen removed
    let eval = Evaluator::default();
    let pos = fen("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -");

    assert_eq!(eval.material_score(&pos, Color::White), eval.weights().queen);
    assert_eq!(eval.evaluate(&pos, Color::White), 900);
}

#[test]
fn test_perspective_flip() {
    let eval = Evaluator::default();
    let pos = fen("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq -");

    let white = eval.evaluate(&pos, Color::White);
    let black = eval.evaluate(&pos, Color::Black);
    assert_eq!(white, -black);
}

#[test]
fn test_centre_occupation_bonus() {
    let eval = Evaluator::default();
    let w = eval.weights().clone();

    let centre = fen("4k3/8/8/8/4N3/8/8/4K3 w - -");
    assert_eq!(eval.positional_score(&centre, Color::White), w.centre_bonus);
    assert_eq!(eval.evaluate(&centre, Color::White), w.knight + w.centre_bonus);

    let rim = fen("4k3/8/8/8/7N/8/8/4K3 w - -");
    assert_eq!(eval.positional_score(&rim, Color::White), 0);
    assert_eq!(eval.evaluate(&rim, Color::White), w.knight);
}

#[test]
fn test_centre_counts_every_piece_kind() {
    let eval = Evaluator::default();
    // White pawns on d4 and e4, Black pawn on d5 and a black king on e5
    let pos = fen("8/8/8/3pk3/3PP3/8/8/4K3 w - -");

    assert_eq!(CENTRE_SQUARES.len(), 4);
    assert_eq!(eval.positional_score(&pos, Color::White), 0);
}

#[test]
fn test_custom_weights() {
    let weights = EvalWeights {
        centre_bonus: 100,
        ..EvalWeights::default()
    };
    let eval = Evaluator::new(weights);
    let pos = fen("4k3/8/8/8/3P4/8/8/4K3 w - -");

    assert_eq!(eval.evaluate(&pos, Color::White), 200);
    assert_eq!(eval.evaluate(&pos, Color::Black), -200);
}

#[test]
fn test_evaluation_is_idempotent() {
    let eval = Evaluator::default();
    let pos = fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -");
    let before = pos;

    let first = eval.evaluate(&pos, Color::White);
    let second = eval.evaluate(&pos, Color::White);

    assert_eq!(first, second);
    assert_eq!(pos, before);
}

#[test]
fn test_king_outweighs_everything() {
    let eval = Evaluator::default();
    // Black has every piece but no king
    let pos = fen("rnbq1bnr/pppppppp/8/8/8/8/8/4K3 w - -");

    assert!(eval.material_score(&pos, Color::White) > 10_000);
}

#[test]
fn test_score_game_over() {
    let eval = Evaluator::default();
    let mate = eval.weights().checkmate;

    // Fool's mate, White is mated
    let mated = fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq -");
    assert!(mated.is_checkmate(Color::White));
    assert_eq!(eval.score_game_over(&mated, Color::White, Color::White), -mate);
    assert_eq!(eval.score_game_over(&mated, Color::White, Color::Black), mate);

    let stalemate = fen("k7/8/1Q6/8/8/8/8/K7 b - -");
    assert_eq!(
        eval.score_game_over(&stalemate, Color::Black, Color::White),
        eval.weights().stalemate
    );
}
