use criterion::{black_box, criterion_group, criterion_main, Criterion};
use minimax_chess::game_repr::{Color, Position};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -";

fn bench_perft_start_depth_4(c: &mut Criterion) {
    let pos = Position::default();
    c.bench_function("perft start depth 4", |b| {
        b.iter(|| black_box(pos.perft(4, Color::White)))
    });
}

fn bench_perft_kiwipete_depth_3(c: &mut Criterion) {
    let (pos, side) = Position::parse_fen(KIWIPETE).unwrap();
    c.bench_function("perft kiwipete depth 3", |b| {
        b.iter(|| black_box(pos.perft(3, side)))
    });
}

criterion_group!(benches, bench_perft_start_depth_4, bench_perft_kiwipete_depth_3);
criterion_main!(benches);
