//! Watch command - watch the computer play against itself.

use std::time::Duration;

use structopt::StructOpt;
use tabletop::alpha_beta_searcher::Difficulty;
use tabletop::board::fen::STARTING_POSITION_FEN;
use tabletop::board::Board;
use tabletop::game::mode::ComputerVsComputer;
use tabletop::game::r#loop::GameLoop;
use tabletop::game::{GameConfig, Players};

use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(short, long, default_value = "medium")]
    pub difficulty: Difficulty,
    #[structopt(long = "fen", default_value = STARTING_POSITION_FEN)]
    pub starting_position: Board,
    #[structopt(
        long = "delay",
        default_value = "1000",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
    #[structopt(long = "max-moves", help = "Stop after this many moves")]
    pub max_moves: Option<usize>,
}

impl Command for WatchArgs {
    fn execute(self) {
        let config = GameConfig::default()
            .players(Players::ComputerVsComputer)
            .difficulty(self.difficulty)
            .starting_position(self.starting_position)
            .thinking_delay(Duration::from_millis(self.delay_ms));

        let mut game_loop = GameLoop::new(ComputerVsComputer, config).move_limit(self.max_moves);

        if let Err(error) = game_loop.run() {
            eprintln!("Game ended with an error: {}", error);
            std::process::exit(1);
        }
    }
}
