use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use minimax_chess::agent::ai::search::DEFAULT_MAX_MOVES_PER_PLY;
use minimax_chess::agent::{SearchConfig, SearchEngine};
use minimax_chess::game_repr::Position;

const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq -";

fn bench_search_depths(c: &mut Criterion) {
    let (pos, side) = Position::parse_fen(MIDDLEGAME).unwrap();
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    for depth in [2u8, 3, 4] {
        group.bench_with_input(BenchmarkId::new("full width", depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut engine = SearchEngine::new(SearchConfig::with_depth(depth));
                black_box(engine.choose_move(&pos, side).unwrap())
            })
        });
    }

    group.bench_function("depth 4 top 20", |b| {
        b.iter(|| {
            let config = SearchConfig::with_depth(4).max_moves_per_ply(Some(DEFAULT_MAX_MOVES_PER_PLY));
            let mut engine = SearchEngine::new(config);
            black_box(engine.choose_move(&pos, side).unwrap())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_search_depths);
criterion_main!(benches);
