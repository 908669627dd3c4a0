use super::board::Board;
use super::error::GameError;
use super::game_state::TicTacToeGameState;
use super::types::{Player, SearchMode, SearchResult};

const WIN_SCORE: i32 = 10;

pub struct BotInput {
    pub board: Board,
    pub ai: Player,
    pub human: Player,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: *state.board(),
            ai: state.ai(),
            human: state.human(),
        }
    }
}

/// Scores every candidate and returns the best one together with the full list.
pub fn calculate_move(
    mode: SearchMode,
    input: &BotInput,
) -> Result<(SearchResult, Vec<SearchResult>), GameError> {
    let results = score_moves(&input.board, input.ai, input.human, mode)?;
    let best = select_best(&results).ok_or(GameError::SearchOnTerminalBoard)?;
    Ok((best, results))
}

pub fn find_best_move(board: &Board, ai: Player, human: Player) -> Result<usize, GameError> {
    let results = score_moves(board, ai, human, SearchMode::Exhaustive)?;
    select_best(&results)
        .map(|best| best.index)
        .ok_or(GameError::SearchOnTerminalBoard)
}

/// Exact minimax value of every legal move for `ai`, in ascending index order.
pub fn score_moves(
    board: &Board,
    ai: Player,
    human: Player,
    mode: SearchMode,
) -> Result<Vec<SearchResult>, GameError> {
    if board.is_terminal() {
        return Err(GameError::SearchOnTerminalBoard);
    }

    let mut scratch = *board;
    let results = scratch
        .legal_moves()
        .into_iter()
        .map(|index| {
            let mut child = scratch.place_scoped(index, ai);
            // Each root child gets a full window so its score is exact.
            let score = match mode {
                SearchMode::Exhaustive => minimax(&mut child, 0, false, ai, human),
                SearchMode::AlphaBeta => {
                    alpha_beta(&mut child, 0, false, ai, human, i32::MIN, i32::MAX)
                }
            };
            SearchResult::new(index, score)
        })
        .collect();

    Ok(results)
}

/// First result with the strictly greatest score, so ties go to the lowest index.
pub fn select_best(results: &[SearchResult]) -> Option<SearchResult> {
    let mut best: Option<SearchResult> = None;
    for &result in results {
        match best {
            Some(current) if result.score <= current.score => {}
            _ => best = Some(result),
        }
    }
    best
}

pub fn minimax(
    board: &mut Board,
    depth: i32,
    is_maximizing: bool,
    ai: Player,
    human: Player,
) -> i32 {
    if let Some(score) = terminal_score(board, depth, ai, human) {
        return score;
    }

    let mover = if is_maximizing { ai } else { human };
    let scores = board.legal_moves().into_iter().map(|index| {
        let mut child = board.place_scoped(index, mover);
        minimax(&mut child, depth + 1, !is_maximizing, ai, human)
    });

    let best = if is_maximizing { scores.max() } else { scores.min() };
    best.unwrap_or(0)
}

fn alpha_beta(
    board: &mut Board,
    depth: i32,
    is_maximizing: bool,
    ai: Player,
    human: Player,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if let Some(score) = terminal_score(board, depth, ai, human) {
        return score;
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in board.legal_moves() {
            let eval = {
                let mut child = board.place_scoped(index, ai);
                alpha_beta(&mut child, depth + 1, false, ai, human, alpha, beta)
            };

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for index in board.legal_moves() {
            let eval = {
                let mut child = board.place_scoped(index, human);
                alpha_beta(&mut child, depth + 1, true, ai, human, alpha, beta)
            };

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}

/// Winner checks come before the draw check.
fn terminal_score(board: &Board, depth: i32, ai: Player, human: Player) -> Option<i32> {
    match board.winner() {
        Some(winner) if winner == ai => Some(WIN_SCORE - depth),
        Some(winner) if winner == human => Some(depth - WIN_SCORE),
        _ if board.is_draw() => Some(0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use rand::Rng;
    use rand::seq::IndexedRandom;

    use super::*;
    use crate::games::tictactoe::types::Mark;

    fn side_to_move(board: &Board) -> Player {
        if board.count(Player::X) > board.count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }

    fn collect_positions(board: &mut Board, seen: &mut HashSet<Board>) {
        if !seen.insert(*board) || board.is_terminal() {
            return;
        }
        let mover = side_to_move(board);
        for index in board.legal_moves() {
            let mut child = board.place_scoped(index, mover);
            collect_positions(&mut child, seen);
        }
    }

    #[test]
    fn test_blocks_immediate_threat() {
        let board = Board::parse("XX.O.....");

        assert_eq!(find_best_move(&board, Player::O, Player::X), Ok(2));
    }

    #[test]
    fn test_takes_win_over_block() {
        let board = Board::parse("XX.OO.X..");

        let results = score_moves(&board, Player::O, Player::X, SearchMode::Exhaustive).unwrap();

        assert_eq!(find_best_move(&board, Player::O, Player::X), Ok(5));
        assert!(results.contains(&SearchResult::new(5, WIN_SCORE)));
    }

    #[test]
    fn test_empty_board_ties_go_to_lowest_index() {
        let board = Board::new();

        let results = score_moves(&board, Player::X, Player::O, SearchMode::Exhaustive).unwrap();

        assert!(results.iter().all(|r| r.score == 0));
        assert_eq!(find_best_move(&board, Player::X, Player::O), Ok(0));
    }

    #[test]
    fn test_prefers_faster_win() {
        // O wins at 2 immediately; other lines only win later.
        let board = Board::parse("OO.XX.X..");

        let results = score_moves(&board, Player::O, Player::X, SearchMode::Exhaustive).unwrap();
        let best = select_best(&results).unwrap();

        assert_eq!(best, SearchResult::new(2, WIN_SCORE));
    }

    #[test]
    fn test_search_on_full_board_fails() {
        let board = Board::parse("XOXXOOOXX");

        assert_eq!(
            find_best_move(&board, Player::O, Player::X),
            Err(GameError::SearchOnTerminalBoard)
        );
    }

    #[test]
    fn test_search_on_won_board_fails() {
        let board = Board::parse("XXXOO....");

        assert_eq!(
            score_moves(&board, Player::O, Player::X, SearchMode::AlphaBeta),
            Err(GameError::SearchOnTerminalBoard)
        );
    }

    #[test]
    fn test_select_best_keeps_first_of_equal_scores() {
        let results = [
            SearchResult::new(1, -3),
            SearchResult::new(4, 5),
            SearchResult::new(6, 5),
            SearchResult::new(8, 2),
        ];

        assert_eq!(select_best(&results), Some(SearchResult::new(4, 5)));
        assert_eq!(select_best(&[]), None);
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let mut board = Board::parse("X...O...X");
        let before = board;

        minimax(&mut board, 0, true, Player::O, Player::X);

        assert_eq!(board, before);
    }

    #[test]
    fn test_alpha_beta_matches_exhaustive_everywhere() {
        let mut seen = HashSet::new();
        collect_positions(&mut Board::new(), &mut seen);

        for board in seen.iter().filter(|b| !b.is_terminal()) {
            let ai = side_to_move(board);
            let exhaustive = score_moves(board, ai, ai.opponent(), SearchMode::Exhaustive);
            let pruned = score_moves(board, ai, ai.opponent(), SearchMode::AlphaBeta);

            assert_eq!(exhaustive, pruned, "scores differ on {:?}", board);
        }
    }

    #[test]
    fn test_never_returns_occupied_cell() {
        let mut rng = rand::rng();

        for _ in 0..200 {
            let mut board = Board::new();
            let plies = rng.random_range(0..8);
            for _ in 0..plies {
                if board.is_terminal() {
                    break;
                }
                let mover = side_to_move(&board);
                let index = *board.legal_moves().choose(&mut rng).unwrap();
                board.apply_move(index, mover).unwrap();
            }
            if board.is_terminal() {
                continue;
            }

            let ai = side_to_move(&board);
            let input = BotInput { board, ai, human: ai.opponent() };
            let (best, results) = calculate_move(SearchMode::AlphaBeta, &input).unwrap();

            assert_eq!(board.get(best.index), Some(Mark::Empty));
            assert_eq!(results.len(), board.legal_moves().len());
        }
    }
}
