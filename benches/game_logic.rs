use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Bag, Board, GameState};
use blockfall::types::PieceKind;

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::with_seed(12345);

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            state.tick(black_box(16));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                board.fill_row_except(y, &[], PieceKind::I);
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut state = GameState::with_seed(12345);

    // Top-outs reset the board, so this runs indefinitely.
    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            state.hard_drop();
            state.drain_events();
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut state = GameState::with_seed(12345);

    c.bench_function("try_move", |b| {
        b.iter(|| {
            if !state.try_move(1) {
                while state.try_move(-1) {}
            }
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let mut state = GameState::with_seed(12345);

    c.bench_function("try_rotate", |b| {
        b.iter(|| {
            state.try_rotate(true);
            state.drain_events();
        })
    });
}

fn bench_bag(c: &mut Criterion) {
    let mut bag = Bag::with_seed(7);
    c.bench_function("bag_pop", |b| b.iter(|| black_box(bag.pop())));
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_hard_drop,
    bench_try_move,
    bench_try_rotate,
    bench_bag
);
criterion_main!(benches);
