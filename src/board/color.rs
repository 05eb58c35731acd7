use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

/// The two sides. White always moves first.
#[derive(Clone, Copy, PartialEq, Debug, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    Black = 0,
    White = 1,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    pub fn opposite(&self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Row delta of a single pawn step. White starts at the bottom of the
    /// board (row 7) and moves towards row 0.
    pub fn pawn_direction(&self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    pub fn pawn_start_row(&self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    pub fn promotion_row(&self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    pub fn back_row(&self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    pub fn random() -> Self {
        *Self::ALL
            .choose(&mut rand::thread_rng())
            .unwrap_or(&Color::White)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_str = match self {
            Color::Black => "black",
            Color::White => "white",
        };
        write!(f, "{}", color_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Color {
    type Err = ParseError;
    fn from_str(color: &str) -> Result<Self, Self::Err> {
        match color {
            "black" => Ok(Color::Black),
            "white" => Ok(Color::White),
            "random" => Ok(Color::random()),
            _ => Err("invalid color; options are: black, white, random"),
        }
    }
}
