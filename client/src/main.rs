mod config;
mod console;
mod ui;

use std::io;

use clap::Parser;
use common::games::tictactoe::{SearchMode, TicTacToeGameState};
use common::{log, logger};

use config::get_config_manager;
use console::Console;

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against a minimax engine")]
struct Args {
    /// Path to the YAML config file; defaults to one next to the executable
    #[arg(long)]
    config: Option<String>,

    /// Print the engine's score for every candidate move
    #[arg(long)]
    show_scores: bool,

    /// Use alpha-beta pruning instead of the plain exhaustive search
    #[arg(long)]
    alpha_beta: bool,

    /// Log game events to stderr
    #[arg(long)]
    verbose: bool,

    /// Write the effective configuration back to the config file
    #[arg(long)]
    write_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config.as_deref());
    let mut config = config_manager.get_config()?;

    if args.show_scores {
        config.display.show_scores = true;
    }
    if args.alpha_beta {
        config.game.search = SearchMode::AlphaBeta;
    }
    if args.verbose {
        config.logging.enabled = true;
    }

    if config.logging.enabled {
        logger::init_logger(config.logging.prefix.clone());
    }

    if args.write_config {
        config_manager.set_config(&config)?;
        log!("Config written to {}", config_manager.file_path());
    }

    let mut game = TicTacToeGameState::new(config.game)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    Console::new(stdin.lock(), stdout.lock(), config.display).run(&mut game)?;

    Ok(())
}
