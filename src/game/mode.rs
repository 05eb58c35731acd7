use std::io::BufRead;

use crate::input_handler::{parse_player_command, InputError, PlayerCommand};

use super::game::Game;
use super::state::GamePhase;

pub trait GameMode {
    /// The next command for the game, either typed by a human or handed to
    /// the engine.
    fn get_command(&mut self, game: &Game) -> Result<PlayerCommand, InputError>;
    fn prompt(&self, game: &Game) -> Option<&'static str>;
    /// Whether the loop should exit as soon as the game ends, rather than
    /// waiting for a reset or quit.
    fn stop_when_over(&self) -> bool;
}

/// Human input comes from `reader`; the computer answers whenever the game
/// says it is thinking.
pub struct HumanVsComputer<R: BufRead> {
    reader: R,
}

impl<R: BufRead> HumanVsComputer<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

pub struct ComputerVsComputer;

impl<R: BufRead> GameMode for HumanVsComputer<R> {
    fn get_command(&mut self, game: &Game) -> Result<PlayerCommand, InputError> {
        if game.phase() == GamePhase::ComputerThinking {
            Ok(PlayerCommand::UseEngine)
        } else {
            parse_player_command(&mut self.reader)
        }
    }

    fn prompt(&self, game: &Game) -> Option<&'static str> {
        match game.phase() {
            GamePhase::ComputerThinking => None,
            GamePhase::GameOver => Some("Type `reset` to play again or `quit` to leave:"),
            GamePhase::WaitingForPlayerDestination { .. } => Some("Choose a destination:"),
            GamePhase::WaitingForPlayerSelection => Some("Enter your move:"),
        }
    }

    fn stop_when_over(&self) -> bool {
        false
    }
}

impl GameMode for ComputerVsComputer {
    fn get_command(&mut self, _game: &Game) -> Result<PlayerCommand, InputError> {
        Ok(PlayerCommand::UseEngine)
    }

    fn prompt(&self, _game: &Game) -> Option<&'static str> {
        None
    }

    fn stop_when_over(&self) -> bool {
        true
    }
}
