use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tresraya::{Board, Mark, bot};

fn mid_game_board() -> Board {
    let mut board = Board::new();
    board[4] = Some(Mark::X);
    board[0] = Some(Mark::O);
    board[8] = Some(Mark::X);
    board[2] = Some(Mark::O);
    board
}

fn bench_select_move(c: &mut Criterion) {
    let board = mid_game_board();
    let mut rng = SmallRng::seed_from_u64(1);

    c.bench_function("select_move mid-game", |b| {
        b.iter(|| bot::select_move(black_box(&board), Mark::O, &mut rng))
    });

    let empty = Board::new();
    c.bench_function("select_move empty board", |b| {
        b.iter(|| bot::select_move(black_box(&empty), Mark::X, &mut rng))
    });
}

criterion_group!(benches, bench_select_move);
criterion_main!(benches);
