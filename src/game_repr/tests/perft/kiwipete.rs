use super::*;

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -";

#[test]
fn perft_kiwipete_depth_1() {
    assert_eq!(run_perft(KIWIPETE, 1), 48);
}

#[test]
fn perft_kiwipete_depth_2() {
    assert_eq!(run_perft(KIWIPETE, 2), 2_039);
}

#[test]
fn perft_kiwipete_depth_3() {
    assert_eq!(run_perft(KIWIPETE, 3), 97_862);
}
