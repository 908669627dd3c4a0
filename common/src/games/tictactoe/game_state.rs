use crate::config::Validate;
use crate::log;
use crate::GameId;
use crate::id_generator::generate_game_id;
use super::board::Board;
use super::bot_controller::{calculate_move, BotInput};
use super::error::{GameError, MoveRejection};
use super::settings::GameSettings;
use super::types::{GameStatus, Player, SearchMode, SearchResult, WinningLine};

/// One game between a human and the engine. The human always moves first.
#[derive(Debug, Clone, PartialEq)]
pub struct TicTacToeGameState {
    id: GameId,
    board: Board,
    human: Player,
    ai: Player,
    search_mode: SearchMode,
    status: GameStatus,
    ai_to_move: bool,
    moves: Vec<(Player, usize)>,
    last_search: Vec<SearchResult>,
}

impl TicTacToeGameState {
    pub fn new(settings: GameSettings) -> Result<Self, String> {
        Self::with_id(generate_game_id(), settings)
    }

    /// Fails when both sides would play the same mark.
    pub fn with_id(id: GameId, settings: GameSettings) -> Result<Self, String> {
        settings.validate()?;

        log!(
            "[{}] New game: human plays {}, engine plays {} ({:?} search)",
            id, settings.human, settings.ai, settings.search
        );

        Ok(Self {
            id,
            board: Board::new(),
            human: settings.human,
            ai: settings.ai,
            search_mode: settings.search,
            status: GameStatus::InProgress,
            ai_to_move: false,
            moves: Vec::new(),
            last_search: Vec::new(),
        })
    }

    pub fn request_human_move(&mut self, index: usize) -> Result<GameStatus, GameError> {
        self.check_turn(false)?;

        if let Err(err) = self.board.apply_move(index, self.human) {
            log!("[{}] Rejected human move at {}: {}", self.id, index, err);
            return Err(err);
        }

        self.finish_move(self.human, index);
        Ok(self.status)
    }

    pub fn request_ai_move(&mut self) -> Result<GameStatus, GameError> {
        self.check_turn(true)?;

        let (best, results) = calculate_move(self.search_mode, &BotInput::from_game_state(self))?;
        self.board.apply_move(best.index, self.ai)?;

        log!(
            "[{}] Engine chose {} with score {}",
            self.id, best.index, best.score
        );

        self.last_search = results;
        self.finish_move(self.ai, best.index);
        Ok(self.status)
    }

    pub fn restart(&mut self) {
        self.board.clear();
        self.status = GameStatus::InProgress;
        self.ai_to_move = false;
        self.moves.clear();
        self.last_search.clear();

        log!("[{}] Restarted", self.id);
    }

    pub fn id(&self) -> &GameId {
        &self.id
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn human(&self) -> Player {
        self.human
    }

    pub fn ai(&self) -> Player {
        self.ai
    }

    /// Side to move, or `None` once the game is over.
    pub fn turn(&self) -> Option<Player> {
        match self.status {
            GameStatus::InProgress if self.ai_to_move => Some(self.ai),
            GameStatus::InProgress => Some(self.human),
            _ => None,
        }
    }

    pub fn moves(&self) -> &[(Player, usize)] {
        &self.moves
    }

    pub fn last_move(&self) -> Option<(Player, usize)> {
        self.moves.last().copied()
    }

    /// Candidate scores behind the engine's most recent move.
    pub fn last_search(&self) -> &[SearchResult] {
        &self.last_search
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.board.winning_line()
    }

    fn check_turn(&self, for_ai: bool) -> Result<(), GameError> {
        let side = if for_ai { "engine" } else { "human" };

        let rejection = if self.status.is_terminal() {
            MoveRejection::GameOver
        } else if self.ai_to_move != for_ai {
            MoveRejection::NotYourTurn
        } else {
            return Ok(());
        };

        log!("[{}] Rejected {} move: {}", self.id, side, rejection);
        Err(rejection.into())
    }

    fn finish_move(&mut self, player: Player, index: usize) {
        self.moves.push((player, index));

        self.status = match self.board.winner() {
            Some(winner) if winner == self.human => GameStatus::HumanWon,
            Some(_) => GameStatus::AiWon,
            None if self.board.is_draw() => GameStatus::Draw,
            None => GameStatus::InProgress,
        };

        if self.status == GameStatus::InProgress {
            self.ai_to_move = !self.ai_to_move;
            log!("[{}] {} played {}", self.id, player, index);
        } else {
            log!("[{}] {} played {}, game over: {:?}", self.id, player, index, self.status);
        }
    }
}
