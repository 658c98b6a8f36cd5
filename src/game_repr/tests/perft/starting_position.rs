use super::*;

#[test]
fn perft_start_depth_1() {
    assert_eq!(run_perft(START_FEN, 1), 20);
}

#[test]
fn perft_start_depth_2() {
    assert_eq!(run_perft(START_FEN, 2), 400);
}

#[test]
fn perft_start_depth_3() {
    assert_eq!(run_perft(START_FEN, 3), 8_902);
}

#[test]
fn perft_start_depth_4() {
    assert_eq!(run_perft(START_FEN, 4), 197_281);
}
