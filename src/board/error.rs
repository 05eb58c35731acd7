use common::Square;
use thiserror::Error;

use super::{color::Color, piece::Piece};

#[derive(Error, Debug, PartialEq)]
pub enum BoardError {
    #[error("Cannot put a piece on {square}, it is already occupied")]
    SquareOccupied { square: Square },
    #[error("Cannot {op} chess move, the `from` square {square} is empty")]
    FromSquareIsEmpty { op: &'static str, square: Square },
    #[error("Cannot undo chess move, the `to` square {square} is empty")]
    ToSquareIsEmpty { square: Square },
    #[error("Cannot apply chess move, expected {expected:?} on the target square but found {found:?}")]
    UnexpectedCaptureResult {
        expected: Option<(Piece, Color)>,
        found: Option<(Piece, Color)>,
    },
    #[error("Cannot {op} chess move, expected {expected:?} to move but found {found:?}")]
    UnexpectedMovingPiece {
        op: &'static str,
        expected: (Piece, Color),
        found: (Piece, Color),
    },
}
