// Search performance benchmark
// Run with: cargo bench --bench search_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use caro_engine::agent::ai::{find_best_move, generate_candidates};
use caro_engine::agent::TranspositionTable;
use caro_engine::game_repr::{Board, Coord, Marker};

/// A developed middle-game position with both sides active.
fn midgame_board() -> Board {
    let mut board = Board::new(9);
    let moves = [
        (4, 4, Marker::X),
        (4, 5, Marker::O),
        (3, 3, Marker::X),
        (5, 5, Marker::O),
        (2, 2, Marker::X),
        (5, 4, Marker::O),
        (5, 3, Marker::X),
        (3, 5, Marker::O),
        (6, 4, Marker::X),
        (2, 5, Marker::O),
    ];
    for (row, col, marker) in moves {
        board.place(Coord::new(row, col), marker);
    }
    board
}

fn bench_candidate_generation(c: &mut Criterion) {
    let mut board = midgame_board();
    c.bench_function("generate_candidates midgame", |b| {
        b.iter(|| generate_candidates(black_box(&mut board), Marker::X))
    });
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_best_move midgame");
    group.sample_size(10);

    for depth in [1u8, 2, 3] {
        group.bench_function(format!("depth {depth}"), |b| {
            let mut board = midgame_board();
            b.iter(|| {
                // Fresh cache per iteration so every run does full work.
                let mut tt = TranspositionTable::new();
                find_best_move(black_box(&mut board), Marker::X, depth, &mut tt)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_candidate_generation, bench_search);
criterion_main!(benches);
