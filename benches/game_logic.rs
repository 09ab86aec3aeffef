use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetris_engine::core::{Board, GameState};
use tetris_engine::types::PieceKind;

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("soft_drop_tick", |b| {
        b.iter(|| {
            if state.game_over() {
                state.reset();
            }
            if state.current().is_none() {
                state.spawn_next();
            }
            black_box(state.soft_drop_tick());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let mut board = Board::new();
    // Fill bottom 4 rows
    for y in 16..20 {
        for x in 0..10 {
            board.set(x, y, Some(PieceKind::I));
        }
    }

    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let (cleared, count) = board.clear_full_lines();
            black_box((cleared, count));
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.try_move(0, 5);

    c.bench_function("try_rotate", |b| {
        b.iter(|| {
            black_box(state.try_rotate());
        })
    });
}

fn bench_ghost(c: &mut Criterion) {
    let state = GameState::new(12345);

    c.bench_function("ghost_position", |b| {
        b.iter(|| {
            black_box(state.ghost_position());
        })
    });
}

criterion_group!(benches, bench_tick, bench_line_clear, bench_rotate, bench_ghost);
criterion_main!(benches);
