//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    best_move::BestMoveArgs, play::PlayArgs, puzzle::PuzzleArgs, watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "tabletop",
    about = "A small chess engine and a sliding-tile puzzle for the terminal ♛"
)]
pub enum Tabletop {
    #[structopt(
        name = "play",
        about = "Play a game against the computer at the given `--difficulty` (easy, medium or hard; default: medium). Your color is chosen at random unless you specify it with `--color`. The initial position can be given in FEN notation with `--fen` (default: starting position)."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "watch",
        about = "Watch the computer play against itself, pausing `--delay` milliseconds between moves. Use `--max-moves` to stop early."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "best-move",
        about = "Print the engine's move for the side to move in a position given in FEN notation with `--fen` (required), searching `--depth` plies ahead (default: 2)."
    )]
    BestMove(BestMoveArgs),
    #[structopt(
        name = "puzzle",
        about = "Solve a shuffled sliding-tile puzzle of the given `--size` (default: 4) by typing the number of the tile to slide."
    )]
    Puzzle(PuzzleArgs),
}

impl crate::cli::commands::Command for Tabletop {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Watch(cmd),
            BestMove(cmd),
            Puzzle(cmd),
        }
    }
}
