use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use damson_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use damson_chess::game_state::game_state::GameState;
use damson_chess::move_generation::perft::perft;
use damson_chess::search::alpha_beta::find_best_move;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
    expected_nodes: &'static [u64],
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        fen: STARTING_POSITION_FEN,
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        expected_nodes: &[48, 2039],
    },
    BenchCase {
        name: "rook_endgame",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        expected_nodes: &[14, 191, 2812],
    },
];

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in CASES {
        let game = GameState::from_fen(case.fen).expect("benchmark FEN should parse");

        for (depth_idx, &expected) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before timing.
            assert_eq!(
                perft(&game, depth).nodes,
                expected,
                "node mismatch for {} depth {}",
                case.name,
                depth
            );

            group.throughput(Throughput::Elements(expected));
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{}_d{}", case.name, depth)),
                &depth,
                |b, &depth| b.iter(|| black_box(perft(black_box(&game), depth).nodes)),
            );
        }
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let game = GameState::new_game();
    let mut group = c.benchmark_group("alpha_beta");
    group.sample_size(10);

    for depth in [2u8, 3] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| {
                find_best_move(
                    black_box(&game.board),
                    depth,
                    game.side_to_move,
                    game.castling_rights,
                    game.en_passant_square,
                )
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_perft, bench_search);
criterion_main!(benches);
