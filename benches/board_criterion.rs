use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use tempo_chess::game_state::board::Board;
use tempo_chess::game_state::chess_types::Square;
use tempo_chess::utils::algebraic::parse_move;

#[derive(Clone, Copy)]
struct MoveCase {
    name: &'static str,
    moves: &'static [&'static str],
}

const MOVE_CASES: &[MoveCase] = &[
    MoveCase {
        name: "quiet_pawn_pushes",
        moves: &["e2 e4", "e7 e5", "d2 d4", "d7 d5"],
    },
    MoveCase {
        name: "captures",
        moves: &["d1 d7", "e8 d7", "a1 a7", "h8 h2"],
    },
];

fn bench_piece_at(c: &mut Criterion) {
    let mut group = c.benchmark_group("piece_at");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));
    group.throughput(Throughput::Elements(64));

    let board = Board::standard();
    group.bench_function("standard_all_squares", |b| {
        b.iter(|| {
            let mut found = 0u32;
            for square in Square::all() {
                if black_box(&board).piece_at(square).is_some() {
                    found += 1;
                }
            }
            assert_eq!(found, 32);
            black_box(found)
        });
    });

    group.finish();
}

fn bench_apply_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_move");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for case in MOVE_CASES {
        let moves: Vec<_> = case
            .moves
            .iter()
            .map(|text| parse_move(text).expect("benchmark move should parse"))
            .collect();

        // Correctness guard before benchmarking.
        let mut warmup = Board::standard();
        for mv in &moves {
            warmup.apply_move(*mv).expect("benchmark move should apply");
        }

        group.throughput(Throughput::Elements(moves.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(case.name), &moves, |b, moves| {
            b.iter(|| {
                let mut board = Board::standard();
                for mv in moves {
                    board
                        .apply_move(black_box(*mv))
                        .expect("benchmark move should apply");
                }
                black_box(board)
            });
        });
    }

    group.finish();
}

fn bench_parse_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_move");
    for text in ["a8 to b6", "a8 b6"] {
        group.bench_with_input(BenchmarkId::from_parameter(text), text, |b, text| {
            b.iter(|| parse_move(black_box(text)).expect("benchmark move should parse"));
        });
    }
    group.finish();
}

criterion_group!(board_benches, bench_piece_at, bench_apply_move, bench_parse_move);
criterion_main!(board_benches);
