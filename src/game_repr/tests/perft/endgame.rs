use super::*;

// Rook and pawn endgame, rich in en passant and discovered checks
const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -";

#[test]
fn perft_endgame_depth_1() {
    assert_eq!(run_perft(POSITION_3, 1), 14);
}

#[test]
fn perft_endgame_depth_2() {
    assert_eq!(run_perft(POSITION_3, 2), 191);
}

#[test]
fn perft_endgame_depth_3() {
    assert_eq!(run_perft(POSITION_3, 3), 2_812);
}

#[test]
fn perft_endgame_depth_4() {
    assert_eq!(run_perft(POSITION_3, 4), 43_238);
}
