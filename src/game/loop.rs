use common::Square;
use log::warn;

use crate::input_handler::{InputError, PlayerCommand};

use super::display::GameDisplay;
use super::game::{Game, GameConfig};
use super::mode::GameMode;
use super::state::GamePhase;

enum Flow {
    Continue(Option<String>),
    Quit,
}

pub struct GameLoop<T: GameMode> {
    game: Game,
    ui: GameDisplay,
    mode: T,
    move_limit: Option<usize>,
}

impl<T: GameMode> GameLoop<T> {
    pub fn new(mode: T, config: GameConfig) -> Self {
        Self::with_game(mode, Game::new(config))
    }

    pub fn with_game(mode: T, game: Game) -> Self {
        Self {
            game,
            ui: GameDisplay::new(),
            mode,
            move_limit: None,
        }
    }

    /// Stops the loop once this many moves have been played.
    pub fn move_limit(mut self, move_limit: Option<usize>) -> Self {
        self.move_limit = move_limit;
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn run(&mut self) -> Result<(), InputError> {
        let mut message: Option<String> = None;

        loop {
            if self.game.is_over() && self.mode.stop_when_over() {
                self.render(None);
                return Ok(());
            }

            if let Some(limit) = self.move_limit {
                if self.game.move_count() >= limit {
                    self.render(Some(format!("Stopped after {} moves.", limit)));
                    return Ok(());
                }
            }

            self.render(message.take());

            let command = match self.mode.get_command(&self.game) {
                Ok(command) => command,
                Err(InputError::UserExit) => return Ok(()),
                Err(error @ InputError::IOError { .. }) => return Err(error),
                Err(error) => {
                    message = Some(format!("error: {}", error));
                    continue;
                }
            };

            match self.handle_command(command) {
                Flow::Continue(next_message) => message = next_message,
                Flow::Quit => return Ok(()),
            }
        }
    }

    fn render(&mut self, message: Option<String>) {
        let prompt = self.mode.prompt(&self.game);
        let text = match (message, prompt) {
            (Some(message), Some(prompt)) => Some(format!("{}\n{}", message, prompt)),
            (Some(message), None) => Some(message),
            (None, Some(prompt)) => Some(prompt.to_string()),
            (None, None) => None,
        };
        self.ui.render_game_state(&self.game, text.as_deref());
    }

    fn handle_command(&mut self, command: PlayerCommand) -> Flow {
        let message = match command {
            PlayerCommand::UseEngine => {
                std::thread::sleep(self.game.config().thinking_delay);
                match self.game.computer_move() {
                    Ok(chess_move) => Some(format!("Computer played {}", chess_move.describe())),
                    Err(error) => {
                        warn!("Computer could not move: {}", error);
                        if self.mode.stop_when_over() {
                            return Flow::Quit;
                        }
                        Some(format!("error: {}", error))
                    }
                }
            }
            PlayerCommand::Move { from, to } => match self.game.request_move(from, to) {
                Ok(_) => None,
                Err(error) => Some(format!("error: {}", error)),
            },
            PlayerCommand::Select { square } => match self.game.select_square(square) {
                Ok(Some(_)) => None,
                Ok(None) => match self.game.phase() {
                    GamePhase::WaitingForPlayerDestination { from } => {
                        Some(describe_destinations(&self.game, from))
                    }
                    _ => Some(format!("Nothing to move on {}", square)),
                },
                Err(error) => Some(format!("error: {}", error)),
            },
            PlayerCommand::ShowMoves { square } => Some(describe_destinations(&self.game, square)),
            PlayerCommand::Hint => match self.game.hint() {
                Some(hint) => {
                    let (piece, _) = hint.piece();
                    Some(format!(
                        "Hint: try moving your {} from {} to {}",
                        piece,
                        hint.from_square(),
                        hint.to_square()
                    ))
                }
                None => Some("No hint available".to_string()),
            },
            PlayerCommand::Reset => {
                self.game.reset_game();
                None
            }
            PlayerCommand::SetDifficulty { difficulty } => {
                self.game.set_difficulty(difficulty);
                Some(format!("Difficulty set to {}", difficulty))
            }
            PlayerCommand::Quit => return Flow::Quit,
        };

        Flow::Continue(message)
    }
}

fn describe_destinations(game: &Game, square: Square) -> String {
    let destinations = game.legal_destinations(square);
    if destinations.is_empty() {
        return format!("No moves from {}", square);
    }

    let list: Vec<String> = destinations.iter().map(|s| s.to_string()).collect();
    format!("Moves from {}: {}", square, list.join(", "))
}
