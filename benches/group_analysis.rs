//! Group analysis and placement validation on a full-size board.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use go_engine::core::{GameConfig, PlayerId, Point};
use go_engine::rules::{group_at, groups};
use go_engine::session::GameSession;

/// A 19x19 session filled with a dense checkerboard-ish pattern.
fn busy_session() -> GameSession {
    let mut session = GameSession::new(&GameConfig::default().with_size(19)).unwrap();
    for row in 0..19 {
        for col in 0..19 {
            if (row * 7 + col * 3) % 5 != 0 {
                let _ = session.place(Point::new(row, col));
            }
        }
    }
    session
}

fn bench_group_at(c: &mut Criterion) {
    let session = busy_session();
    let position = session.current_state().position().clone();
    let origin = position
        .iter()
        .find(|(_, color)| !color.is_empty())
        .map(|(p, _)| p)
        .unwrap();

    c.bench_function("group_at 19x19", |b| {
        b.iter(|| group_at(black_box(&position), black_box(origin)))
    });
    c.bench_function("groups 19x19", |b| b.iter(|| groups(black_box(&position))));
}

fn bench_try_place(c: &mut Criterion) {
    let session = busy_session();
    let rules = session.rules().clone();
    let state = session.current_state().clone();
    let history = session.history().clone();
    let player = PlayerId::new(0);

    c.bench_function("legal_points 19x19", |b| {
        b.iter(|| rules.legal_points(black_box(&state), player, &history))
    });
}

criterion_group!(benches, bench_group_at, bench_try_place);
criterion_main!(benches);
