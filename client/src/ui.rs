use common::games::tictactoe::{
    GameError, GameStatus, Mark, MoveRejection, SearchResult, TicTacToeGameState,
};

pub const HELP_TEXT: &str = "\
Cells are numbered 1-9, left to right, top to bottom.
  1-9        place your mark
  r, restart start a new game
  h, help    show this help
  q, quit    leave";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(usize),
    Restart,
    Help,
    Quit,
}

/// Parses one line of input. Cell numbers are 1-based on screen, 0-based in the result.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let trimmed = line.trim().to_ascii_lowercase();
    match trimmed.as_str() {
        "r" | "restart" => Ok(Command::Restart),
        "h" | "help" | "?" => Ok(Command::Help),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        other => match other.parse::<usize>() {
            Ok(cell @ 1..=9) => Ok(Command::Place(cell - 1)),
            _ => Err(format!("Unknown input '{}': enter a cell number from 1 to 9", line.trim())),
        },
    }
}

pub fn render_board(game: &TicTacToeGameState, highlight_winning_line: bool) -> String {
    let winning_line = if highlight_winning_line {
        game.winning_line()
    } else {
        None
    };

    let rows: Vec<String> = game
        .board()
        .cells()
        .chunks(3)
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, mark)| {
                    let index = row * 3 + col;
                    let symbol = match mark {
                        Mark::X => "X".to_string(),
                        Mark::O => "O".to_string(),
                        Mark::Empty => (index + 1).to_string(),
                    };
                    match winning_line {
                        Some(line) if line.contains(index) => format!("[{}]", symbol),
                        _ => format!(" {} ", symbol),
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();

    rows.join("\n---+---+---\n")
}

pub fn status_message(game: &TicTacToeGameState) -> String {
    match game.status() {
        GameStatus::InProgress => format!("Your move ({})", game.human()),
        GameStatus::HumanWon => format!("{} wins!", game.human()),
        GameStatus::AiWon => format!("{} wins!", game.ai()),
        GameStatus::Draw => "It's a draw!".to_string(),
    }
}

pub fn describe_error(err: &GameError) -> String {
    match err {
        GameError::InvalidMove(MoveRejection::Occupied(index)) => {
            format!("Cell {} is already taken", index + 1)
        }
        GameError::InvalidMove(MoveRejection::OutOfBounds(index)) => {
            format!("Cell {} does not exist", index + 1)
        }
        GameError::InvalidMove(MoveRejection::GameOver) => {
            "The game is over: type r to play again".to_string()
        }
        GameError::InvalidMove(MoveRejection::NotYourTurn) => {
            "Wait for the engine to move".to_string()
        }
        GameError::SearchOnTerminalBoard => "The engine has no move to make".to_string(),
    }
}

pub fn format_scores(results: &[SearchResult]) -> String {
    let entries: Vec<String> = results
        .iter()
        .map(|result| format!("{}:{:+}", result.index + 1, result.score))
        .collect();
    format!("Engine candidates {}", entries.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::GameId;
    use common::games::tictactoe::GameSettings;

    fn new_game() -> TicTacToeGameState {
        TicTacToeGameState::with_id(GameId::new("ui".to_string()), GameSettings::default())
            .unwrap()
    }

    #[test]
    fn test_parse_cell_numbers_are_one_based() {
        assert_eq!(parse_command("1"), Ok(Command::Place(0)));
        assert_eq!(parse_command(" 9 \n"), Ok(Command::Place(8)));
    }

    #[test]
    fn test_parse_rejects_out_of_range_cells() {
        assert!(parse_command("0").is_err());
        assert!(parse_command("10").is_err());
        assert!(parse_command("-3").is_err());
        assert!(parse_command("").is_err());
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("R"), Ok(Command::Restart));
        assert_eq!(parse_command("help"), Ok(Command::Help));
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
    }

    #[test]
    fn test_render_empty_board_shows_cell_numbers() {
        let game = new_game();

        let rendered = render_board(&game, true);

        assert_eq!(
            rendered,
            " 1 | 2 | 3 \n---+---+---\n 4 | 5 | 6 \n---+---+---\n 7 | 8 | 9 "
        );
    }

    #[test]
    fn test_render_marks_and_winning_line() {
        let mut game = new_game();
        game.request_human_move(0).unwrap();
        game.request_ai_move().unwrap();
        game.request_human_move(8).unwrap();
        game.request_ai_move().unwrap();
        game.request_human_move(2).unwrap();
        game.request_ai_move().unwrap();
        assert_eq!(game.status(), GameStatus::AiWon);

        let rendered = render_board(&game, true);
        let plain = render_board(&game, false);

        assert_eq!(rendered.matches('[').count(), 3);
        assert!(!plain.contains('['));
        assert!(rendered.starts_with(" X |[O]| X "));
    }

    #[test]
    fn test_status_messages() {
        let mut game = new_game();
        assert_eq!(status_message(&game), "Your move (X)");

        game.request_human_move(0).unwrap();
        game.request_ai_move().unwrap();
        game.request_human_move(8).unwrap();
        game.request_ai_move().unwrap();
        game.request_human_move(2).unwrap();
        game.request_ai_move().unwrap();

        assert_eq!(status_message(&game), "O wins!");
    }

    #[test]
    fn test_describe_error_uses_screen_numbers() {
        let err = GameError::InvalidMove(MoveRejection::Occupied(4));

        assert_eq!(describe_error(&err), "Cell 5 is already taken");
    }

    #[test]
    fn test_format_scores() {
        let results = [SearchResult::new(0, -8), SearchResult::new(4, 0), SearchResult::new(8, 9)];

        assert_eq!(format_scores(&results), "Engine candidates 1:-8 5:+0 9:+9");
    }
}
