use criterion::{black_box, criterion_group, criterion_main, Criterion};
use handblock::core::{Board, GameState, Snapshot};
use handblock::term::{FrameBuffer, GameView, Viewport};
use handblock::types::{Command, PieceColor};

fn bench_gravity_tick(c: &mut Criterion) {
    let mut state = GameState::new(10, 20, 12345).unwrap();

    c.bench_function("soft_drop", |b| {
        b.iter(|| {
            if state.game_over() {
                state = GameState::new(10, 20, 12345).unwrap();
            }
            black_box(state.apply(Command::SoftDrop));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new(10, 20).unwrap();
            // Fill bottom 4 rows
            for y in 16..20 {
                board.fill_row(y, PieceColor::Cyan);
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut state = GameState::new(10, 20, 12345).unwrap();

    c.bench_function("try_move", |b| {
        b.iter(|| {
            state.try_move(black_box(1), 0);
            state.try_move(black_box(-1), 0);
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let mut state = GameState::new(10, 20, 12345).unwrap();

    c.bench_function("try_rotate", |b| {
        b.iter(|| {
            state.try_rotate();
        })
    });
}

fn bench_snapshot_and_render(c: &mut Criterion) {
    let state = GameState::new(10, 20, 12345).unwrap();
    let view = GameView::default();
    let mut snap = Snapshot::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("snapshot_render_80x24", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(80, 24), &mut fb);
            black_box(fb.get(0, 0));
        })
    });
}

criterion_group!(
    benches,
    bench_gravity_tick,
    bench_line_clear,
    bench_try_move,
    bench_try_rotate,
    bench_snapshot_and_render
);
criterion_main!(benches);
