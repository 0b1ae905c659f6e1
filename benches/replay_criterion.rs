use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use duel_chess::game_state::chess_game::ChessGame;
use duel_chess::history::replay::rebuild_to;

/// Ruy Lopez main line, long enough to make the rebuild cost visible.
const SCRIPTED_GAME: &[&str] = &[
    "e2e4", "e7e5", "g1f3", "b8c6", "f1b5", "a7a6", "b5a4", "g8f6", "e1g1", "f8e7", "f1e1",
    "b7b5", "a4b3", "d7d6", "c2c3", "e8g8", "h2h3", "c6a5", "b3c2", "c7c5", "d2d4", "d8c7",
    "b1d2", "c5d4", "c3d4", "a5c6", "d2b3", "a6a5", "c1e3", "a5a4", "b3d2", "c8d7",
];

fn scripted_game() -> ChessGame {
    let mut game = ChessGame::new();
    for mv in SCRIPTED_GAME {
        game.play_uci_move(mv).expect("scripted move should be legal");
    }
    game
}

fn bench_rebuild(c: &mut Criterion) {
    let game = scripted_game();
    let records = game.history().records();
    let len = records.len();

    let mut group = c.benchmark_group("replay_rebuild");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for target in [0, len / 2, len - 1] {
        group.bench_with_input(BenchmarkId::from_parameter(target), &target, |b, &target| {
            b.iter(|| black_box(rebuild_to(game.initial_board(), records, Some(black_box(target)))));
        });
    }

    group.finish();
}

fn bench_navigation(c: &mut Criterion) {
    let game = scripted_game();

    c.bench_function("replay_walk_first_to_last", |b| {
        b.iter(|| {
            let mut game = game.clone();
            game.replay_first();
            while game.replay_next() {}
            black_box(game.is_replay_mode())
        });
    });
}

criterion_group!(replay_benches, bench_rebuild, bench_navigation);
criterion_main!(replay_benches);
