//! Play command - play a game against the computer.

use std::io;
use std::time::Duration;

use structopt::StructOpt;
use tabletop::alpha_beta_searcher::Difficulty;
use tabletop::board::color::Color;
use tabletop::board::fen::STARTING_POSITION_FEN;
use tabletop::board::Board;
use tabletop::game::mode::HumanVsComputer;
use tabletop::game::r#loop::GameLoop;
use tabletop::game::{GameConfig, Players};

use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "medium")]
    pub difficulty: Difficulty,
    #[structopt(
        short = "c",
        long = "color",
        default_value = "random",
        help = "The color you play"
    )]
    pub color: Color,
    #[structopt(long = "fen", default_value = STARTING_POSITION_FEN)]
    pub starting_position: Board,
    #[structopt(
        long = "delay",
        default_value = "500",
        help = "Pause before the computer replies, in milliseconds"
    )]
    pub delay_ms: u64,
}

impl Command for PlayArgs {
    fn execute(self) {
        let config = GameConfig::default()
            .players(Players::HumanVsComputer {
                computer: self.color.opposite(),
            })
            .difficulty(self.difficulty)
            .starting_position(self.starting_position)
            .thinking_delay(Duration::from_millis(self.delay_ms));

        let stdin = io::stdin();
        let mut game_loop = GameLoop::new(HumanVsComputer::new(stdin.lock()), config);

        if let Err(error) = game_loop.run() {
            eprintln!("Game ended with an error: {}", error);
            std::process::exit(1);
        }
    }
}
