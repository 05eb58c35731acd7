//! Puzzle command - solve a sliding-tile puzzle.

use std::io;

use structopt::StructOpt;
use tabletop::puzzle::PuzzleSession;

use super::Command;

#[derive(StructOpt)]
pub struct PuzzleArgs {
    #[structopt(short, long, default_value = "4")]
    pub size: usize,
}

impl Command for PuzzleArgs {
    fn execute(self) {
        let stdin = io::stdin();
        let mut session = match PuzzleSession::new(self.size, stdin.lock()) {
            Ok(session) => session,
            Err(error) => {
                eprintln!("Cannot start the puzzle: {}", error);
                std::process::exit(1);
            }
        };

        if let Err(error) = session.run() {
            eprintln!("Puzzle ended with an error: {}", error);
            std::process::exit(1);
        }
    }
}
