use std::io::{self, BufRead, Write};

use common::games::tictactoe::TicTacToeGameState;
use common::log;

use crate::config::DisplayConfig;
use crate::ui::{self, Command};

pub struct Console<R, W> {
    input: R,
    output: W,
    display: DisplayConfig,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, display: DisplayConfig) -> Self {
        Self { input, output, display }
    }

    pub fn run(&mut self, game: &mut TicTacToeGameState) -> io::Result<()> {
        writeln!(self.output, "New game: you play {}, the engine plays {}", game.human(), game.ai())?;
        writeln!(self.output, "{}", ui::HELP_TEXT)?;
        self.show(game)?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }

            match ui::parse_command(&line) {
                Ok(Command::Quit) => break,
                Ok(Command::Help) => writeln!(self.output, "{}", ui::HELP_TEXT)?,
                Ok(Command::Restart) => {
                    game.restart();
                    writeln!(self.output, "New game")?;
                    self.show(game)?;
                }
                Ok(Command::Place(index)) => self.play_round(game, index)?,
                Err(message) => writeln!(self.output, "{}", message)?,
            }
        }

        log!("[{}] Console closed after {} moves", game.id(), game.moves().len());
        Ok(())
    }

    fn play_round(&mut self, game: &mut TicTacToeGameState, index: usize) -> io::Result<()> {
        match game.request_human_move(index) {
            Ok(status) if status.is_terminal() => {}
            Ok(_) => match game.request_ai_move() {
                Ok(_) => {
                    if let Some((_, engine_move)) = game.last_move() {
                        writeln!(self.output, "Engine plays {}", engine_move + 1)?;
                    }
                    if self.display.show_scores {
                        writeln!(self.output, "{}", ui::format_scores(game.last_search()))?;
                    }
                }
                Err(err) => writeln!(self.output, "{}", ui::describe_error(&err))?,
            },
            Err(err) => {
                writeln!(self.output, "{}", ui::describe_error(&err))?;
                return Ok(());
            }
        }

        self.show(game)
    }

    fn show(&mut self, game: &TicTacToeGameState) -> io::Result<()> {
        writeln!(
            self.output,
            "{}",
            ui::render_board(game, self.display.highlight_winning_line)
        )?;
        writeln!(self.output, "{}", ui::status_message(game))?;
        if game.status().is_terminal() {
            writeln!(self.output, "Type r to play again or q to quit")?;
        }
        Ok(())
    }
}
