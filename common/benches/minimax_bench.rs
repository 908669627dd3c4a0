use criterion::{criterion_group, criterion_main, Criterion, SamplingMode};
use std::hint::black_box;
use std::time::Duration;
use common::games::tictactoe::{
    calculate_move, score_moves, Board, BotInput, Mark, Player, SearchMode,
};

fn create_mid_game_board() -> Board {
    let mut cells = [Mark::Empty; 9];
    cells[0] = Mark::X;
    cells[4] = Mark::O;
    cells[8] = Mark::X;
    Board::from_marks(cells)
}

fn bench_full_game(mode: SearchMode) {
    let mut board = Board::new();
    let mut current = Player::X;

    while !board.is_terminal() {
        let input = BotInput {
            board,
            ai: current,
            human: current.opponent(),
        };

        match calculate_move(mode, &input) {
            Ok((best, _)) => {
                let _ = board.apply_move(best.index, current);
                current = current.opponent();
            }
            Err(_) => break,
        }
    }
}

fn bench_single_move_empty_board(mode: SearchMode) {
    let board = Board::new();
    let _ = black_box(score_moves(&board, Player::X, Player::O, mode));
}

fn bench_single_move_mid_game(mode: SearchMode) {
    let board = create_mid_game_board();
    let _ = black_box(score_moves(&board, Player::O, Player::X, mode));
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(10)
        .measurement_time(Duration::from_secs(20));

    for (name, mode) in [
        ("exhaustive", SearchMode::Exhaustive),
        ("alpha_beta", SearchMode::AlphaBeta),
    ] {
        group.bench_function(format!("{}/full_game", name), |b| {
            b.iter(|| bench_full_game(mode))
        });

        group.bench_function(format!("{}/single_move_empty", name), |b| {
            b.iter(|| bench_single_move_empty_board(mode))
        });

        group.bench_function(format!("{}/single_move_mid_game", name), |b| {
            b.iter(|| bench_single_move_mid_game(mode))
        });
    }

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
