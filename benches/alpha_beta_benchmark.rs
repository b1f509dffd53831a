use gridgame::board::{Board, Move, Player};
use gridgame::grid_position;
use gridgame::rules::{ConnectFour, TicTacToe};
use gridgame::search::{search_opponent_move, search_position};

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    let opened = grid_position!["...", ".x.", "..."];

    c.bench_function("tic-tac-toe reply to center, alpha-beta", |b| {
        b.iter(|| search_opponent_move(&TicTacToe, black_box(&opened), 9))
    });
    c.bench_function("tic-tac-toe reply to center, plain minimax", |b| {
        b.iter(|| search_position(&TicTacToe, black_box(&opened), 9, true, false))
    });

    let mut connect_four = Board::new(6, 7);
    connect_four
        .place(Move::new(5, 3), Player::One)
        .expect("bottom of the middle column is empty");
    c.bench_function("connect four reply at depth 5", |b| {
        b.iter(|| search_opponent_move(&ConnectFour, black_box(&connect_four), 5))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
