//! Command input parsing for the terminal front ends.

use std::io::BufRead;
use std::str::FromStr;

use common::Square;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::alpha_beta_searcher::Difficulty;

static MOVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-h][1-8])\s*-?\s*([a-h][1-8])$").expect("MOVE_RE regex should be valid")
});
static SQUARE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^([a-h][1-8])$").expect("SQUARE_RE regex should be valid"));
static MOVES_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^moves\s+([a-h][1-8])$").expect("MOVES_RE regex should be valid")
});
static DIFFICULTY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^difficulty\s+(\w+)$").expect("DIFFICULTY_RE regex should be valid")
});
static TILE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^([0-9]{1,3})$").expect("TILE_RE regex should be valid"));

#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error("unknown difficulty: {input:?}")]
    InvalidDifficulty { input: String },
    #[error("input closed")]
    UserExit,
}

/// A line typed during a chess game.
#[derive(Debug, PartialEq)]
pub enum PlayerCommand {
    Move { from: Square, to: Square },
    Select { square: Square },
    ShowMoves { square: Square },
    Hint,
    Reset,
    SetDifficulty { difficulty: Difficulty },
    Quit,
    UseEngine,
}

/// A line typed while solving the sliding puzzle.
#[derive(Debug, PartialEq)]
pub enum PuzzleCommand {
    Slide { tile: u8 },
    Shuffle,
    Quit,
}

fn square(text: &str) -> Result<Square, InputError> {
    Square::from_algebraic(text).ok_or_else(|| InputError::InvalidInput {
        input: text.to_string(),
    })
}

impl FromStr for PlayerCommand {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim().to_lowercase();

        match trimmed.as_str() {
            "hint" | "h" => return Ok(PlayerCommand::Hint),
            "reset" | "r" => return Ok(PlayerCommand::Reset),
            "quit" | "exit" | "q" => return Ok(PlayerCommand::Quit),
            _ => {}
        }

        if let Some(caps) = MOVE_RE.captures(&trimmed) {
            return Ok(PlayerCommand::Move {
                from: square(&caps[1])?,
                to: square(&caps[2])?,
            });
        }

        if let Some(caps) = SQUARE_RE.captures(&trimmed) {
            return Ok(PlayerCommand::Select {
                square: square(&caps[1])?,
            });
        }

        if let Some(caps) = MOVES_RE.captures(&trimmed) {
            return Ok(PlayerCommand::ShowMoves {
                square: square(&caps[1])?,
            });
        }

        if let Some(caps) = DIFFICULTY_RE.captures(&trimmed) {
            let difficulty =
                caps[1]
                    .parse::<Difficulty>()
                    .map_err(|_| InputError::InvalidDifficulty {
                        input: caps[1].to_string(),
                    })?;
            return Ok(PlayerCommand::SetDifficulty { difficulty });
        }

        Err(InputError::InvalidInput {
            input: input.trim().to_string(),
        })
    }
}

impl FromStr for PuzzleCommand {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim().to_lowercase();

        match trimmed.as_str() {
            "shuffle" | "s" => return Ok(PuzzleCommand::Shuffle),
            "quit" | "exit" | "q" => return Ok(PuzzleCommand::Quit),
            _ => {}
        }

        if let Some(caps) = TILE_RE.captures(&trimmed) {
            if let Ok(tile) = caps[1].parse::<u8>() {
                return Ok(PuzzleCommand::Slide { tile });
            }
        }

        Err(InputError::InvalidInput {
            input: input.trim().to_string(),
        })
    }
}

/// Reads one line from `reader`. End of input counts as the user leaving.
pub fn read_line(reader: &mut impl BufRead) -> Result<String, InputError> {
    let mut input = String::new();
    let read = reader
        .read_line(&mut input)
        .map_err(|error| InputError::IOError {
            error: error.to_string(),
        })?;

    if read == 0 {
        return Err(InputError::UserExit);
    }

    Ok(input.trim().to_string())
}

pub fn parse_player_command(reader: &mut impl BufRead) -> Result<PlayerCommand, InputError> {
    read_line(reader)?.parse()
}

pub fn parse_puzzle_command(reader: &mut impl BufRead) -> Result<PuzzleCommand, InputError> {
    read_line(reader)?.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::square::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_moves() {
        let expected = PlayerCommand::Move { from: E2, to: E4 };
        assert_eq!(Ok(expected), "e2e4".parse::<PlayerCommand>());
        assert_eq!(
            Ok(PlayerCommand::Move { from: E2, to: E4 }),
            "e2 e4".parse::<PlayerCommand>()
        );
        assert_eq!(
            Ok(PlayerCommand::Move { from: G8, to: F6 }),
            "  G8-F6 ".parse::<PlayerCommand>()
        );
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            Ok(PlayerCommand::Select { square: B1 }),
            "b1".parse::<PlayerCommand>()
        );
        assert_eq!(
            Ok(PlayerCommand::ShowMoves { square: E2 }),
            "moves e2".parse::<PlayerCommand>()
        );
        assert_eq!(Ok(PlayerCommand::Hint), "hint".parse::<PlayerCommand>());
        assert_eq!(Ok(PlayerCommand::Reset), "RESET".parse::<PlayerCommand>());
        assert_eq!(Ok(PlayerCommand::Quit), "q".parse::<PlayerCommand>());
        assert_eq!(
            Ok(PlayerCommand::SetDifficulty {
                difficulty: Difficulty::Hard
            }),
            "difficulty hard".parse::<PlayerCommand>()
        );
    }

    #[test]
    fn test_parse_invalid_commands() {
        assert_eq!(
            Err(InputError::InvalidInput {
                input: "e9e4".to_string()
            }),
            "e9e4".parse::<PlayerCommand>()
        );
        assert!("".parse::<PlayerCommand>().is_err());
        assert!("Nf3".parse::<PlayerCommand>().is_err());
        assert_eq!(
            Err(InputError::InvalidDifficulty {
                input: "brutal".to_string()
            }),
            "difficulty brutal".parse::<PlayerCommand>()
        );
    }

    #[test]
    fn test_parse_puzzle_commands() {
        assert_eq!(Ok(PuzzleCommand::Slide { tile: 12 }), "12".parse());
        assert_eq!(Ok(PuzzleCommand::Shuffle), "shuffle".parse());
        assert_eq!(Ok(PuzzleCommand::Quit), "quit".parse());
        assert!("999".parse::<PuzzleCommand>().is_err());
        assert!("up".parse::<PuzzleCommand>().is_err());
    }

    #[test]
    fn test_read_from_reader() {
        let mut reader = Cursor::new("e2e4\nhint\n");
        assert_eq!(
            Ok(PlayerCommand::Move { from: E2, to: E4 }),
            parse_player_command(&mut reader)
        );
        assert_eq!(Ok(PlayerCommand::Hint), parse_player_command(&mut reader));
        assert_eq!(Err(InputError::UserExit), parse_player_command(&mut reader));
    }
}
