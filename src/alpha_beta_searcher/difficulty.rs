use std::fmt;
use std::str::FromStr;

use super::{SearchConfig, TieBreak};

/// Points within which an easy opponent treats a root move as good enough.
const EASY_MARGIN: i32 = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn depth(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    /// Easy plays a random move from everything close to the best score;
    /// medium and hard only pick randomly among exact ties.
    pub fn search_config(self) -> SearchConfig {
        let margin = match self {
            Difficulty::Easy => EASY_MARGIN,
            Difficulty::Medium | Difficulty::Hard => 0,
        };

        SearchConfig {
            depth: self.depth(),
            margin,
            tie_break: TieBreak::Random,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{}", name)
    }
}

// used for parsing cli args
type ParseError = &'static str;

impl FromStr for Difficulty {
    type Err = ParseError;

    fn from_str(difficulty: &str) -> Result<Self, Self::Err> {
        match difficulty.to_ascii_lowercase().as_str() {
            "easy" | "1" => Ok(Difficulty::Easy),
            "medium" | "2" => Ok(Difficulty::Medium),
            "hard" | "3" => Ok(Difficulty::Hard),
            _ => Err("difficulty must be easy, medium or hard"),
        }
    }
}
