use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use mailbox_chess::game_state::chess_types::{GameState, Side};
use mailbox_chess::legal_destinations;
use mailbox_chess::move_generation::perft::perft;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    placement: &'static str,
    expected_nodes: &'static [u64],
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        placement: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "open_sliders",
        placement: "r3k2r/8/8/3Q4/8/2n5/8/R3K2R",
        expected_nodes: &[],
    },
];

fn bench_destinations(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_destinations");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for case in CASES {
        let game = GameState::from_placement(case.placement, Side::White)
            .expect("benchmark placement should parse");

        group.throughput(Throughput::Elements(64));
        group.bench_with_input(BenchmarkId::from_parameter(case.name), &game, |b, game| {
            b.iter(|| {
                let mut total = 0usize;
                for sq in 0u8..64 {
                    total += legal_destinations(black_box(game), black_box(sq)).len();
                }
                black_box(total)
            });
        });
    }

    group.finish();
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in CASES {
        let game = GameState::from_placement(case.placement, Side::White)
            .expect("benchmark placement should parse");

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let warmup = perft(&game, depth).expect("perft should run");
            assert_eq!(
                warmup.nodes, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{}_d{}", case.name, depth)),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let counts = perft(black_box(&game), black_box(depth))
                            .expect("perft benchmark run should succeed");
                        assert_eq!(counts.nodes, *expected);
                        black_box(counts.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(move_generation_benches, bench_destinations, bench_perft);
criterion_main!(move_generation_benches);
