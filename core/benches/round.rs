use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use rollcraft_core::{BoardGenerator, CELL_COUNT, CellId, RandomBoardGenerator, RoundState};

fn bench_generate(c: &mut Criterion) {
    let mut generator = RandomBoardGenerator::from_seed(0xdead_beef);
    c.bench_function("generate_board", |b| {
        b.iter(|| black_box(generator.generate()))
    });
}

fn bench_full_round(c: &mut Criterion) {
    let mut generator = RandomBoardGenerator::from_seed(42);
    c.bench_function("reveal_until_resolved", |b| {
        b.iter(|| {
            let mut state = RoundState::new(generator.generate());
            for id in 0..CELL_COUNT as CellId {
                if state.reveal(black_box(id)).resolution().is_some() {
                    break;
                }
            }
            black_box(state.total_payout())
        })
    });
}

criterion_group!(benches, bench_generate, bench_full_round);
criterion_main!(benches);
