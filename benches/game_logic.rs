use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tick_tetris::core::{project_into, Board, DrawList, GameState, SimpleRng, Tetromino};
use tick_tetris::term::{FrameBuffer, GameView, Viewport};
use tick_tetris::types::{BlockType, GameColor, HeldKeys, LogicalKey};

fn stacked_board() -> Board {
    let mut board = Board::new();
    for y in 0..12 {
        for x in 0..10 {
            if (x + y) % 3 != 0 {
                board.set_cell(x, y, Some(GameColor::Green));
            }
        }
    }
    board
}

fn bench_step(c: &mut Criterion) {
    let mut state = GameState::new();
    let mut rng = SimpleRng::new(12345);
    let keys = HeldKeys::new().with(LogicalKey::SoftDrop);

    c.bench_function("step_frame", |b| {
        b.iter(|| {
            black_box(state.step(black_box(keys), &mut rng));
        })
    });
}

fn bench_sweep(c: &mut Criterion) {
    c.bench_function("sweep_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 0..4 {
                for x in 0..10 {
                    board.set_cell(x, y, Some(GameColor::Red));
                }
            }
            // Stacked rows need one sweep each.
            for _ in 0..4 {
                black_box(board.sweep_and_clear());
            }
        })
    });
}

fn bench_move_and_rotate(c: &mut Criterion) {
    let board = stacked_board();
    let mut piece = Tetromino::at(BlockType::T, 5, 16);

    c.bench_function("move_and_rotate", |b| {
        b.iter(|| {
            piece.move_left(&board);
            piece.rotate();
            piece.move_right(&board);
        })
    });
}

fn bench_project(c: &mut Criterion) {
    let board = stacked_board();
    let piece = Some(Tetromino::at(BlockType::I, 4, 18));
    let mut out = DrawList::new();

    c.bench_function("project_into", |b| {
        b.iter(|| {
            project_into(black_box(&board), piece, &mut out);
        })
    });
}

fn bench_rasterize(c: &mut Criterion) {
    let mut out = DrawList::new();
    project_into(&stacked_board(), Some(Tetromino::at(BlockType::I, 4, 18)), &mut out);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(80, 30);

    c.bench_function("rasterize_80x30", |b| {
        b.iter(|| {
            view.render_into(black_box(&out), None, Viewport::new(80, 30), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_step,
    bench_sweep,
    bench_move_and_rotate,
    bench_project,
    bench_rasterize
);
criterion_main!(benches);
