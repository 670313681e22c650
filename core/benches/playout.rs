use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use jumpgrid_core::*;
use std::hint::black_box;

fn playout(c: &mut Criterion) {
    let mut group = c.benchmark_group("playout");

    for size in [8, 16, 32] {
        let layout = RandomLayoutGenerator::new(0xC0FFEE, size, 3)
            .generate()
            .expect("valid layout");

        for kind in StrategyKind::ALL {
            group.bench_with_input(
                BenchmarkId::new(kind.name(), size),
                &layout,
                |b, layout| {
                    b.iter(|| {
                        let mut strategy = kind.build(7);
                        black_box(play(Board::new(layout.clone()), &mut *strategy))
                    })
                },
            );
        }
    }

    group.finish();
}

fn probing(c: &mut Criterion) {
    let layout = RandomLayoutGenerator::new(42, 32, 4)
        .generate()
        .expect("valid layout");

    c.bench_function("probe/journal", |b| {
        let mut board = Board::new(layout.clone());
        b.iter(|| {
            for dir in Direction::ALL {
                black_box(board.future_mobility(dir));
            }
        })
    });

    c.bench_function("probe/detached", |b| {
        let board = Board::new(layout.clone());
        b.iter(|| {
            for dir in Direction::ALL {
                black_box(board.probe_detached(dir, |probed| probed.possible_moves().len()));
            }
        })
    });
}

criterion_group!(benches, playout, probing);
criterion_main!(benches);
