//! Best move command - determine the engine's move from a position.

use log::debug;
use structopt::StructOpt;
use tabletop::alpha_beta_searcher::{AlphaBetaSearcher, SearchConfig, TieBreak};
use tabletop::board::Board;

use super::Command;

#[derive(StructOpt)]
pub struct BestMoveArgs {
    #[structopt(short, long, default_value = "2")]
    pub depth: u8,
    #[structopt(long = "fen")]
    pub starting_position: Board,
}

impl Command for BestMoveArgs {
    fn execute(self) {
        let mut board = self.starting_position;
        let side = board.turn();
        let mut searcher = AlphaBetaSearcher::new(SearchConfig {
            depth: self.depth,
            margin: 0,
            tie_break: TieBreak::First,
        });

        match searcher.search(&mut board, side) {
            Ok(best_move) => {
                debug!(
                    "searched {} positions, {} cutoffs",
                    searcher.searched_position_count(),
                    searcher.termination_count()
                );
                println!("{}", best_move);
            }
            Err(err) => {
                eprintln!("Failed to calculate best move: {}", err);
                std::process::exit(1);
            }
        }
    }
}
