use blockfall::core::{Board, GameSnapshot, GameState};
use blockfall::types::PieceKind;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start_new_game();

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            if !state.running() {
                state.start_new_game();
            }
            black_box(state.tick());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new(10, 20);
            // Fill bottom 4 rows
            for row in 16..20 {
                for col in 0..10 {
                    board.set(row, col, Some(PieceKind::I));
                }
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start_new_game();

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if !state.running() {
                state.start_new_game();
            }
            black_box(state.hard_drop());
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start_new_game();

    c.bench_function("try_move", |b| {
        b.iter(|| {
            state.try_move(black_box(1), 0);
            state.try_move(black_box(-1), 0);
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start_new_game();

    c.bench_function("try_rotate", |b| {
        b.iter(|| {
            black_box(state.try_rotate());
        })
    });
}

fn bench_ghost_row(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start_new_game();

    c.bench_function("ghost_row", |b| {
        b.iter(|| black_box(state.ghost_row()))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start_new_game();
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            black_box(&snap);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_hard_drop,
    bench_try_move,
    bench_try_rotate,
    bench_ghost_row,
    bench_snapshot
);
criterion_main!(benches);
