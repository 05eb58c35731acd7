use std::fmt;

use super::color::Color;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Piece {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

pub const ALL_PIECES: [Piece; 6] = [
    Piece::Pawn,
    Piece::Knight,
    Piece::Bishop,
    Piece::Rook,
    Piece::Queen,
    Piece::King,
];

impl Piece {
    pub fn name(&self) -> &'static str {
        match self {
            Piece::Pawn => "pawn",
            Piece::Knight => "knight",
            Piece::Bishop => "bishop",
            Piece::Rook => "rook",
            Piece::Queen => "queen",
            Piece::King => "king",
        }
    }

    pub fn to_fen(&self, color: Color) -> char {
        let c = match self {
            Piece::Pawn => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn from_fen(c: char) -> Option<(Piece, Color)> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let piece = match c.to_ascii_lowercase() {
            'p' => Piece::Pawn,
            'n' => Piece::Knight,
            'b' => Piece::Bishop,
            'r' => Piece::Rook,
            'q' => Piece::Queen,
            'k' => Piece::King,
            _ => return None,
        };
        Some((piece, color))
    }

    pub fn to_unicode_piece_char(&self, color: Color) -> char {
        match (self, color) {
            (Piece::King, Color::White) => '♔',
            (Piece::Queen, Color::White) => '♕',
            (Piece::Rook, Color::White) => '♖',
            (Piece::Bishop, Color::White) => '♗',
            (Piece::Knight, Color::White) => '♘',
            (Piece::Pawn, Color::White) => '♙',
            (Piece::King, Color::Black) => '♚',
            (Piece::Queen, Color::Black) => '♛',
            (Piece::Rook, Color::Black) => '♜',
            (Piece::Bishop, Color::Black) => '♝',
            (Piece::Knight, Color::Black) => '♞',
            (Piece::Pawn, Color::Black) => '♟',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_chars_round_trip() {
        for &piece in ALL_PIECES.iter() {
            for &color in Color::ALL.iter() {
                assert_eq!(Some((piece, color)), Piece::from_fen(piece.to_fen(color)));
            }
        }
    }

    #[test]
    fn test_unknown_fen_char() {
        assert_eq!(None, Piece::from_fen('x'));
        assert_eq!(None, Piece::from_fen('1'));
    }
}
