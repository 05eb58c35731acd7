use super::Board;
use common::Square;
use std::fmt;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..8u8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8u8 {
                let c = match self.get(Square::new(row, col)) {
                    Some((piece, color)) => piece.to_fen(color),
                    None => '.',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  abcdefgh")?;
        write!(f, "{} to move", self.turn())
    }
}

/// Builds a `Board` from an 8x8 picture of the position, drawn from white's
/// point of view: the first character is a8, the last is h1. `.` marks an
/// empty square. The side to move is white.
#[macro_export]
macro_rules! chess_position {
    ($($piece:tt)*) => {{
        let mut board = $crate::board::Board::new();
        let pieces: Vec<_> = stringify!($($piece)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        assert_eq!(pieces.len(), 64, "Invalid number of squares. Expected 64, got {}", pieces.len());
        for (i, &c) in pieces.iter().enumerate() {
            if c != '.' {
                let (piece, color) = $crate::board::piece::Piece::from_fen(c)
                    .expect("Invalid character in chess position");
                let square = common::Square::new((i / 8) as u8, (i % 8) as u8);
                board.put(square, piece, color).unwrap();
            }
        }
        board
    }};
}

#[cfg(test)]
mod tests {
    use crate::board::Board;

    #[test]
    fn test_display_starting_position() {
        let rendered = Board::starting_position().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!("8 rnbqkbnr", lines[0]);
        assert_eq!("5 ........", lines[3]);
        assert_eq!("1 RNBQKBNR", lines[7]);
        assert_eq!("  abcdefgh", lines[8]);
        assert_eq!("white to move", lines[9]);
    }
}
