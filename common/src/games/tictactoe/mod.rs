mod board;
mod bot_controller;
mod error;
mod game_state;
mod settings;
mod types;

pub use board::{Board, WINNING_LINES};
pub use bot_controller::{calculate_move, find_best_move, minimax, score_moves, select_best, BotInput};
pub use error::{GameError, MoveRejection};
pub use game_state::TicTacToeGameState;
pub use settings::GameSettings;
pub use types::{GameStatus, Mark, Player, SearchMode, SearchResult, WinningLine, CELL_COUNT};
