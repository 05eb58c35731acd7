use std::fmt;

use common::Square;

use crate::board::color::Color;

/// Who controls each side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Players {
    HumanVsHuman,
    HumanVsComputer { computer: Color },
    ComputerVsComputer,
}

impl Players {
    pub fn is_computer(&self, color: Color) -> bool {
        match self {
            Players::HumanVsHuman => false,
            Players::HumanVsComputer { computer } => *computer == color,
            Players::ComputerVsComputer => true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    WaitingForPlayerSelection,
    WaitingForPlayerDestination { from: Square },
    ComputerThinking,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WinReason {
    KingCaptured,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawReason {
    /// The side to move has no pseudo-legal move at all.
    NoMoves { side: Color },
    /// Nothing but the two kings is left.
    BareKings,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    Ongoing,
    Win { winner: Color, reason: WinReason },
    Draw { reason: DrawReason },
}

impl GameResult {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameResult::Ongoing)
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            GameResult::Win { winner, .. } => Some(*winner),
            _ => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Ongoing => write!(f, "playing"),
            GameResult::Win {
                winner,
                reason: WinReason::KingCaptured,
            } => write!(f, "{} wins, the {} king was captured", winner, winner.opposite()),
            GameResult::Draw {
                reason: DrawReason::NoMoves { side },
            } => write!(f, "draw, {} has no moves left", side),
            GameResult::Draw {
                reason: DrawReason::BareKings,
            } => write!(f, "draw, only the kings are left"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_players() {
        assert!(!Players::HumanVsHuman.is_computer(Color::White));
        assert!(Players::ComputerVsComputer.is_computer(Color::Black));

        let players = Players::HumanVsComputer {
            computer: Color::Black,
        };
        assert!(players.is_computer(Color::Black));
        assert!(!players.is_computer(Color::White));
    }

    #[test]
    fn test_game_result_display() {
        let win = GameResult::Win {
            winner: Color::White,
            reason: WinReason::KingCaptured,
        };
        assert!(win.is_over());
        assert_eq!(Some(Color::White), win.winner());
        assert_eq!("white wins, the black king was captured", win.to_string());

        let draw = GameResult::Draw {
            reason: DrawReason::NoMoves { side: Color::Black },
        };
        assert_eq!(None, draw.winner());
        assert_eq!("draw, black has no moves left", draw.to_string());

        assert!(!GameResult::Ongoing.is_over());
    }
}
