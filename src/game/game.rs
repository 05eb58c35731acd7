use std::time::{Duration, Instant};

use common::Square;
use log::{info, trace};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::alpha_beta_searcher::{AlphaBetaSearcher, Difficulty, SearchError};
use crate::board::{color::Color, error::BoardError, piece::Piece, Board};
use crate::chess_move::ChessMove;
use crate::move_generator::{generate_moves, generate_moves_from};

use super::state::{DrawReason, GamePhase, GameResult, Players, WinReason};

/// Everything needed to start (and restart) a game.
#[derive(Clone, Debug)]
pub struct GameConfig {
    pub players: Players,
    pub difficulty: Difficulty,
    pub starting_position: Board,
    /// Pause before the computer replies, so the human can follow along.
    pub thinking_delay: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: Players::HumanVsComputer {
                computer: Color::Black,
            },
            difficulty: Difficulty::default(),
            starting_position: Board::starting_position(),
            thinking_delay: Duration::from_millis(500),
        }
    }
}

impl GameConfig {
    pub fn players(mut self, players: Players) -> Self {
        self.players = players;
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn starting_position(mut self, starting_position: Board) -> Self {
        self.starting_position = starting_position;
        self
    }

    pub fn thinking_delay(mut self, thinking_delay: Duration) -> Self {
        self.thinking_delay = thinking_delay;
        self
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum GameError {
    #[error("invalid move: {from} to {to}")]
    InvalidMove { from: Square, to: Square },
    #[error("the game is over")]
    GameOver,
    #[error("the computer is thinking")]
    ComputerThinking,
    #[error("it is not {side}'s turn")]
    NotYourTurn { side: Color },
    #[error("board error: {error}")]
    BoardError {
        #[from]
        error: BoardError,
    },
    #[error("search error: {error}")]
    SearchError {
        #[from]
        error: SearchError,
    },
}

/// Owns the board and drives one game: turn alternation, the selection
/// state machine, computer replies and end-of-game detection.
pub struct Game {
    config: GameConfig,
    board: Board,
    searcher: AlphaBetaSearcher,
    rng: StdRng,
    phase: GamePhase,
    result: GameResult,
    history: Vec<ChessMove>,
    captured: Vec<(Piece, Color)>,
    started_at: Instant,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// A game whose hints and computer tie-breaks are reproducible.
    pub fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let searcher = AlphaBetaSearcher::with_rng(
            config.difficulty.search_config(),
            StdRng::seed_from_u64(rng.gen()),
        );
        let mut game = Self {
            board: config.starting_position.clone(),
            config,
            searcher,
            rng,
            phase: GamePhase::WaitingForPlayerSelection,
            result: GameResult::Ongoing,
            history: Vec::new(),
            captured: Vec::new(),
            started_at: Instant::now(),
        };
        game.refresh_state();
        game
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.board.turn()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn is_over(&self) -> bool {
        self.result.is_over()
    }

    pub fn last_move(&self) -> Option<ChessMove> {
        self.history.last().copied()
    }

    pub fn moves(&self) -> &[ChessMove] {
        &self.history
    }

    /// History entries such as `white pawn: e2 → e4`, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.history.iter().map(ChessMove::describe).collect()
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Pieces of `color` that have been taken off the board.
    pub fn captured(&self, color: Color) -> Vec<Piece> {
        self.captured
            .iter()
            .filter(|&&(_, c)| c == color)
            .map(|&(piece, _)| piece)
            .collect()
    }

    pub fn piece_count(&self, color: Color) -> usize {
        self.board.piece_count(color)
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    /// Takes effect from the computer's next move.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        info!("Difficulty changed to {}", difficulty);
        self.config.difficulty = difficulty;
        self.searcher.set_config(difficulty.search_config());
    }

    pub fn is_computer(&self, color: Color) -> bool {
        self.config.players.is_computer(color)
    }

    /// Destinations for the piece on `square`, provided it belongs to the
    /// side to move. Anything else has no destinations.
    pub fn legal_destinations(&self, square: Square) -> Vec<Square> {
        if self.is_over() || self.board.color_at(square) != Some(self.turn()) {
            return Vec::new();
        }

        generate_moves_from(&self.board, square)
            .iter()
            .map(ChessMove::to_square)
            .collect()
    }

    /// Handles a click on `square`. Choosing a highlighted destination of the
    /// selected piece makes the move and returns it; choosing one of the
    /// mover's pieces selects it; anything else clears the selection.
    pub fn select_square(&mut self, square: Square) -> Result<Option<ChessMove>, GameError> {
        self.ensure_player_can_act()?;

        if let GamePhase::WaitingForPlayerDestination { from } = self.phase {
            if self.legal_destinations(from).contains(&square) {
                return self.request_move(from, square).map(Some);
            }
        }

        let next = if self.board.color_at(square) == Some(self.turn()) {
            GamePhase::WaitingForPlayerDestination { from: square }
        } else {
            GamePhase::WaitingForPlayerSelection
        };
        self.set_phase(next);

        Ok(None)
    }

    /// Plays `from` → `to` for the side to move. A request that does not
    /// match a generated move is rejected and nothing changes.
    pub fn request_move(&mut self, from: Square, to: Square) -> Result<ChessMove, GameError> {
        self.ensure_player_can_act()?;

        let chess_move = self
            .candidate_moves()
            .into_iter()
            .find(|m| m.from_square() == from && m.to_square() == to)
            .ok_or(GameError::InvalidMove { from, to })?;

        self.apply_chess_move(chess_move)?;
        Ok(chess_move)
    }

    /// Lets the engine choose and play a move for `side` at `difficulty`.
    pub fn request_computer_move(
        &mut self,
        side: Color,
        difficulty: Difficulty,
    ) -> Result<ChessMove, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if side != self.turn() {
            return Err(GameError::NotYourTurn { side });
        }

        self.set_phase(GamePhase::ComputerThinking);
        self.searcher.set_config(difficulty.search_config());
        let search_result = self.searcher.search(&mut self.board, side);
        self.searcher.set_config(self.config.difficulty.search_config());

        let chess_move = match search_result {
            Ok(chess_move) => chess_move,
            Err(error) => {
                self.refresh_state();
                return Err(error.into());
            }
        };

        info!(
            "Computer ({}) searched {} positions",
            side,
            self.searcher.searched_position_count()
        );
        self.apply_chess_move(chess_move)?;
        Ok(chess_move)
    }

    /// The computer's reply for the side to move at the configured
    /// difficulty.
    pub fn computer_move(&mut self) -> Result<ChessMove, GameError> {
        let side = self.turn();
        let difficulty = self.config.difficulty;
        self.request_computer_move(side, difficulty)
    }

    /// A random move for the side to move: a random piece that can move,
    /// then one of its destinations.
    pub fn hint(&mut self) -> Option<ChessMove> {
        if self.is_over() {
            return None;
        }

        let movable: Vec<Square> = self
            .board
            .pieces(self.turn())
            .map(|(square, _)| square)
            .filter(|&square| !generate_moves_from(&self.board, square).is_empty())
            .collect();

        let from = *movable.choose(&mut self.rng)?;
        let moves = generate_moves_from(&self.board, from);
        moves.choose(&mut self.rng).copied()
    }

    /// Starts over from the configured starting position.
    pub fn reset_game(&mut self) {
        info!("Resetting game");
        self.board = self.config.starting_position.clone();
        self.history.clear();
        self.captured.clear();
        self.started_at = Instant::now();
        self.result = GameResult::Ongoing;
        self.refresh_state();
    }

    fn ensure_player_can_act(&self) -> Result<(), GameError> {
        match self.phase {
            GamePhase::GameOver => Err(GameError::GameOver),
            GamePhase::ComputerThinking => Err(GameError::ComputerThinking),
            _ => Ok(()),
        }
    }

    fn candidate_moves(&self) -> Vec<ChessMove> {
        generate_moves(&self.board, self.turn()).into_vec()
    }

    fn apply_chess_move(&mut self, chess_move: ChessMove) -> Result<(), GameError> {
        let captured = chess_move.apply(&mut self.board)?;
        self.board.toggle_turn();

        info!("{}", chess_move.describe());
        if let Some(piece) = captured {
            self.captured.push(piece);
        }
        self.history.push(chess_move);

        self.refresh_state();
        Ok(())
    }

    /// Recomputes the result and moves to the phase that follows from it.
    fn refresh_state(&mut self) {
        self.result = self.detect_result();

        let next = if self.result.is_over() {
            info!("Game over: {}", self.result);
            GamePhase::GameOver
        } else if self.is_computer(self.turn()) {
            GamePhase::ComputerThinking
        } else {
            GamePhase::WaitingForPlayerSelection
        };
        self.set_phase(next);
    }

    /// A missing king loses. Bare kings, or a side to move without a single
    /// pseudo-legal move, is a draw.
    fn detect_result(&self) -> GameResult {
        for color in Color::ALL {
            if !self.board.has_king(color) {
                return GameResult::Win {
                    winner: color.opposite(),
                    reason: WinReason::KingCaptured,
                };
            }
        }

        let total_pieces =
            self.board.piece_count(Color::White) + self.board.piece_count(Color::Black);
        if total_pieces == 2 {
            return GameResult::Draw {
                reason: DrawReason::BareKings,
            };
        }

        let side = self.turn();
        if generate_moves(&self.board, side).is_empty() {
            return GameResult::Draw {
                reason: DrawReason::NoMoves { side },
            };
        }

        GameResult::Ongoing
    }

    fn set_phase(&mut self, next: GamePhase) {
        if self.phase != next {
            trace!("Phase {:?} -> {:?}", self.phase, next);
        }
        self.phase = next;
    }
}
