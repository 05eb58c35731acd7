//! Position setup from FEN (Forsyth–Edwards Notation).
//!
//! Only the piece placement and the active color are meaningful here. The
//! castling, en passant and clock fields are accepted for compatibility
//! with FEN strings copied from elsewhere, and otherwise ignored.

use std::str::FromStr;

use common::Square;
use thiserror::Error;

use super::{color::Color, error::BoardError, piece::Piece, Board};

#[derive(Error, Debug)]
pub enum FenParseError {
    #[error("Wrong number of fields: expected 1 to 6, {field_count:?} given")]
    WrongNumberOfFields { field_count: usize },
    #[error("Invalid piece character: {invalid_character:?}")]
    InvalidPieceCharacter { invalid_character: char },
    #[error("Wrong number of ranks: 8 expected, {rank_count:?} given")]
    InvalidRankCount { rank_count: usize },
    #[error("Rank too long: {invalid_rank:?}")]
    InvalidRankLength { invalid_rank: String },
    #[error("Error placing piece: {board_error:?}")]
    ErrorPlacingPiece { board_error: BoardError },
    #[error("Rank incomplete: {incomplete_rank:?}")]
    IncompleteRank { incomplete_rank: String },
    #[error("Invalid color: {invalid_color:?}")]
    InvalidColor { invalid_color: String },
}

type FenResult<T> = Result<T, FenParseError>;

pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

pub fn parse_fen(fen: &str) -> FenResult<Board> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.is_empty() || fields.len() > 6 {
        return Err(FenParseError::WrongNumberOfFields {
            field_count: fields.len(),
        });
    }

    let mut board = Board::new();
    parse_piece_placement(&mut board, fields[0])?;
    if let Some(active_color) = fields.get(1) {
        parse_active_color(&mut board, active_color)?;
    }

    Ok(board)
}

/// Parses the piece placement section. FEN lists rank 8 first, which is
/// row 0 of the board.
fn parse_piece_placement(board: &mut Board, position: &str) -> FenResult<()> {
    let ranks: Vec<&str> = position.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenParseError::InvalidRankCount {
            rank_count: ranks.len(),
        });
    }

    for (row, rank) in ranks.iter().enumerate() {
        parse_rank(board, rank, row as u8)?;
    }

    Ok(())
}

fn parse_rank(board: &mut Board, rank: &str, row: u8) -> FenResult<()> {
    let mut col = 0u8;

    for c in rank.chars() {
        if col >= 8 {
            return Err(FenParseError::InvalidRankLength {
                invalid_rank: rank.to_string(),
            });
        }

        if let Some(empty_squares) = c.to_digit(10) {
            col += empty_squares as u8;
        } else {
            let (piece, color) = Piece::from_fen(c).ok_or(FenParseError::InvalidPieceCharacter {
                invalid_character: c,
            })?;
            board
                .put(Square::new(row, col), piece, color)
                .map_err(|e| FenParseError::ErrorPlacingPiece { board_error: e })?;
            col += 1;
        }
    }

    if col != 8 {
        return Err(FenParseError::IncompleteRank {
            incomplete_rank: rank.to_string(),
        });
    }

    Ok(())
}

fn parse_active_color(board: &mut Board, active_color: &str) -> FenResult<()> {
    match active_color {
        "w" => {
            board.set_turn(Color::White);
            Ok(())
        }
        "b" => {
            board.set_turn(Color::Black);
            Ok(())
        }
        _ => Err(FenParseError::InvalidColor {
            invalid_color: active_color.to_string(),
        }),
    }
}

// used for parsing cli args
impl FromStr for Board {
    type Err = FenParseError;

    fn from_str(fen: &str) -> Result<Self, Self::Err> {
        parse_fen(fen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::square::*;

    #[test]
    fn test_parse_starting_position() {
        let board: Board = STARTING_POSITION_FEN.parse().unwrap();
        assert_eq!(Board::starting_position(), board);
    }

    #[test]
    fn test_parse_complex_position() {
        let fen = "r1bqk2r/ppp2ppp/2n2n2/2bpp3/4P3/2PP1N2/PP1N1PPP/R1BQKB1R b KQkq - 0 6";
        let board = parse_fen(fen).unwrap();

        assert_eq!(board.turn(), Color::Black);
        assert_eq!(board.get(A8), Some((Piece::Rook, Color::Black)));
        assert_eq!(board.get(E5), Some((Piece::Pawn, Color::Black)));
        assert_eq!(board.get(F3), Some((Piece::Knight, Color::White)));
        assert_eq!(board.get(E1), Some((Piece::King, Color::White)));
        assert_eq!(board.get(F1), Some((Piece::Bishop, Color::White)));
        assert_eq!(board.get(G1), None);
    }

    #[test]
    fn test_placement_only_defaults_to_white() {
        let board = parse_fen("4k3/8/8/8/8/8/8/4K3").unwrap();
        assert_eq!(Color::White, board.turn());
        assert_eq!(2, board.piece_count(Color::White) + board.piece_count(Color::Black));
    }

    #[test]
    fn test_invalid_fen() {
        assert!(parse_fen("").is_err());
        assert!(parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w - - 0 1 extra").is_err());
        assert!(parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBN w - - 0 1").is_err());
        assert!(parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x - - 0 1").is_err());
        assert!(parse_fen("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1").is_err());
        assert!(parse_fen("rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1").is_err());
    }
}
