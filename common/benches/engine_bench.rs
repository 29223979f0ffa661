use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use common::games::SessionRng;
use common::games::puzzle2048::{Board, Direction, GameStatus, Puzzle2048GameState, apply_move};

fn mid_game_board() -> Board {
    Board::from_rows(&[
        vec![2, 2, 4, 8],
        vec![0, 4, 4, 16],
        vec![2, 0, 32, 32],
        vec![64, 0, 2, 2],
    ])
}

fn bench_apply_move_each_direction(c: &mut Criterion) {
    let board = mid_game_board();
    c.bench_function("apply_move_mid_game", |b| {
        b.iter(|| {
            for direction in Direction::ALL {
                let mut board = board.clone();
                black_box(apply_move(&mut board, black_box(direction)));
            }
        })
    });
}

fn play_random_game(seed: u64) -> u32 {
    let mut rng = SessionRng::new(seed);
    let mut state = Puzzle2048GameState::new(4, 2048, &mut rng);
    while state.status() == GameStatus::InProgress {
        let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
        state.apply_move(direction, &mut rng);
    }
    state.moves_made()
}

fn bench_random_games(c: &mut Criterion) {
    let mut seed = 0u64;
    c.bench_function("random_game_4x4", |b| {
        b.iter(|| {
            seed += 1;
            black_box(play_random_game(seed))
        })
    });
}

criterion_group!(benches, bench_apply_move_each_direction, bench_random_games);
criterion_main!(benches);
