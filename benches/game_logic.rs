use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{next_kind, Board, ClearableLines, Session, SessionSnapshot};
use blockfall::types::{Intent, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut session = Session::new(12345);
    session.start();

    c.bench_function("session_tick_16ms", |b| {
        b.iter(|| {
            session.tick(black_box(16));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            board.clear_lines();
        })
    });
}

fn bench_selector(c: &mut Criterion) {
    // Mid-game board: a ragged stack across the bottom rows.
    let mut board = Board::new();
    for x in 0..10i8 {
        for y in 0..(x % 4) {
            board.set(x, 19 - y, Some(PieceKind::L));
        }
    }

    c.bench_function("select_next_kind", |b| {
        b.iter(|| {
            next_kind(black_box(&board), &ClearableLines);
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    c.bench_function("hard_drop_and_respawn", |b| {
        b.iter(|| {
            let mut session = Session::new(12345);
            session.start();
            session.apply(Intent::HardDrop);
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut session = Session::new(12345);
    session.start();

    c.bench_function("rotate_cw", |b| {
        b.iter(|| {
            session.apply(Intent::RotateCw);
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut session = Session::new(12345);
    session.start();
    let mut snapshot = SessionSnapshot::new();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            session.snapshot_into(black_box(&mut snapshot));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_selector,
    bench_hard_drop,
    bench_rotate,
    bench_snapshot
);
criterion_main!(benches);
