use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    OutOfBounds(usize),
    Occupied(usize),
    GameOver,
    NotYourTurn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    InvalidMove(MoveRejection),
    SearchOnTerminalBoard,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::OutOfBounds(index) => write!(f, "cell {} is out of bounds", index),
            MoveRejection::Occupied(index) => write!(f, "cell {} is already marked", index),
            MoveRejection::GameOver => write!(f, "game is already over"),
            MoveRejection::NotYourTurn => write!(f, "not your turn"),
        }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidMove(reason) => write!(f, "Invalid move: {}", reason),
            GameError::SearchOnTerminalBoard => {
                write!(f, "Search requested on a board with no moves left")
            }
        }
    }
}

impl std::error::Error for GameError {}

impl From<MoveRejection> for GameError {
    fn from(reason: MoveRejection) -> Self {
        GameError::InvalidMove(reason)
    }
}
