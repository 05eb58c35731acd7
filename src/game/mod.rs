pub mod display;
pub mod game;
pub mod r#loop; // `loop` is reserved keyword, need to escape with `r#`
pub mod mode;
pub mod state;

pub use game::{Game, GameConfig, GameError};
pub use state::{DrawReason, GamePhase, GameResult, Players, WinReason};
