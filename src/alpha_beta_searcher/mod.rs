//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! The searcher explores the tree in place: every move is applied to the
//! caller's board and undone before the next sibling is tried, so the board
//! is identical before and after any call.

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use thiserror::Error;

use crate::board::{color::Color, error::BoardError, Board};
use crate::chess_move::ChessMove;
use crate::evaluate::{EvalWeights, Evaluator};
use crate::move_generator::generate_moves;

pub mod difficulty;


pub use difficulty::Difficulty;

#[derive(Error, Debug, PartialEq)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
    #[error("cannot search without the {color} king on the board")]
    MissingKing { color: Color },
    #[error("search depth must be at least 1 to choose a move")]
    DepthTooLow,
    #[error("board error during search: {error}")]
    BoardError {
        #[from]
        error: BoardError,
    },
}

/// How to choose between root moves that ended up in the candidate pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TieBreak {
    /// Uniformly at random among the candidates.
    Random,
    /// The first best-scoring move in generation order. Ignores the margin.
    First,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
    /// Root moves scoring within this many points of the best move are
    /// candidates too. Zero keeps only exact ties.
    pub margin: i32,
    pub tie_break: TieBreak,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Difficulty::default().search_config()
    }
}

pub struct AlphaBetaSearcher {
    config: SearchConfig,
    weights: EvalWeights,
    rng: StdRng,
    searched_position_count: usize,
    termination_count: usize,
}

impl Default for AlphaBetaSearcher {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl AlphaBetaSearcher {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_rng(config: SearchConfig, rng: StdRng) -> Self {
        Self {
            config,
            weights: EvalWeights::default(),
            rng,
            searched_position_count: 0,
            termination_count: 0,
        }
    }

    pub fn with_weights(mut self, weights: EvalWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    pub fn searched_position_count(&self) -> usize {
        self.searched_position_count
    }

    pub fn termination_count(&self) -> usize {
        self.termination_count
    }

    pub fn reset_stats(&mut self) {
        self.searched_position_count = 0;
        self.termination_count = 0;
    }

    /// Picks a move for `side` at the configured depth.
    pub fn search(&mut self, board: &mut Board, side: Color) -> Result<ChessMove, SearchError> {
        self.best_move(board, side, self.config.depth)
    }

    /// Picks a move for `side`, looking `depth` plies ahead. Ties (and, with
    /// a margin, near-ties) are resolved by the configured tie-break.
    pub fn best_move(
        &mut self,
        board: &mut Board,
        side: Color,
        depth: u8,
    ) -> Result<ChessMove, SearchError> {
        let scored = self.score_moves(board, side, depth)?;

        let best_score = scored
            .iter()
            .map(|&(_, score)| score)
            .max()
            .ok_or(SearchError::NoAvailableMoves)?;

        let chosen = match self.config.tie_break {
            TieBreak::First => scored.iter().find(|&&(_, score)| score == best_score),
            TieBreak::Random => {
                let threshold = best_score.saturating_sub(self.config.margin.max(0));
                let pool: Vec<&(ChessMove, i32)> = scored
                    .iter()
                    .filter(|&&(_, score)| score >= threshold)
                    .collect();
                pool.choose(&mut self.rng).copied()
            }
        };

        let (best_move, score) = chosen.copied().ok_or(SearchError::NoAvailableMoves)?;
        debug!(
            "Chose {} for {} with score {} (best {})",
            best_move, side, score, best_score
        );

        Ok(best_move)
    }

    /// Exact minimax score of every root move for `side`, in generation
    /// order. Each root child is searched with a full window so that equal
    /// scores really are ties.
    pub fn score_moves(
        &mut self,
        board: &mut Board,
        side: Color,
        depth: u8,
    ) -> Result<Vec<(ChessMove, i32)>, SearchError> {
        if depth == 0 {
            return Err(SearchError::DepthTooLow);
        }
        check_kings(board)?;
        self.reset_stats();

        let candidates = generate_moves(board, side);
        if candidates.is_empty() {
            return Err(SearchError::NoAvailableMoves);
        }

        let evaluator = Evaluator::with_weights(side, self.weights);
        let mut scored = Vec::with_capacity(candidates.len());

        for chess_move in candidates {
            chess_move.apply(board)?;
            let result =
                self.alpha_beta_min(depth - 1, board, &evaluator, side.opposite(), i32::MIN, i32::MAX);
            chess_move.undo(board)?;

            let score = result?;
            debug!("Root move {} scores {}", chess_move, score);
            scored.push((chess_move, score));
        }

        debug!(
            "Searched {} positions with {} cutoffs",
            self.searched_position_count, self.termination_count
        );

        Ok(scored)
    }

    /// Minimax value of the position for `side`, who is to move. Depth 0 is
    /// the static evaluation.
    pub fn score(&mut self, board: &mut Board, side: Color, depth: u8) -> Result<i32, SearchError> {
        check_kings(board)?;
        self.reset_stats();

        let evaluator = Evaluator::with_weights(side, self.weights);
        self.alpha_beta_max(depth, board, &evaluator, side, i32::MIN, i32::MAX)
    }

    fn alpha_beta_max(
        &mut self,
        depth: u8,
        board: &mut Board,
        evaluator: &Evaluator,
        to_move: Color,
        mut alpha: i32,
        beta: i32,
    ) -> Result<i32, SearchError> {
        self.searched_position_count += 1;

        if depth == 0 {
            return Ok(evaluator.evaluate(board));
        }

        let candidates = generate_moves(board, to_move);
        if candidates.is_empty() {
            return Ok(evaluator.evaluate(board));
        }

        for chess_move in candidates.iter() {
            chess_move.apply(board)?;
            let result =
                self.alpha_beta_min(depth - 1, board, evaluator, to_move.opposite(), alpha, beta);
            chess_move.undo(board)?;
            let score = result?;

            if score >= beta {
                self.termination_count += 1;
                return Ok(beta);
            }

            if score > alpha {
                alpha = score;
            }
        }

        Ok(alpha)
    }

    fn alpha_beta_min(
        &mut self,
        depth: u8,
        board: &mut Board,
        evaluator: &Evaluator,
        to_move: Color,
        alpha: i32,
        mut beta: i32,
    ) -> Result<i32, SearchError> {
        self.searched_position_count += 1;

        if depth == 0 {
            return Ok(evaluator.evaluate(board));
        }

        let candidates = generate_moves(board, to_move);
        if candidates.is_empty() {
            return Ok(evaluator.evaluate(board));
        }

        for chess_move in candidates.iter() {
            chess_move.apply(board)?;
            let result =
                self.alpha_beta_max(depth - 1, board, evaluator, to_move.opposite(), alpha, beta);
            chess_move.undo(board)?;
            let score = result?;

            if score <= alpha {
                self.termination_count += 1;
                return Ok(alpha);
            }

            if score < beta {
                beta = score;
            }
        }

        Ok(beta)
    }
}

/// Searching only makes sense while both kings are on the board; a missing
/// king means the game already ended.
fn check_kings(board: &Board) -> Result<(), SearchError> {
    for color in Color::ALL {
        if !board.has_king(color) {
            return Err(SearchError::MissingKing { color });
        }
    }
    Ok(())
}
