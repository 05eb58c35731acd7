use core::fmt;

use common::Square;

use crate::board::{color::Color, error::BoardError, piece::Piece, Board};

/// A pseudo-legal move: origin and destination, the piece that moves and
/// whatever it captures. Pawns that reach the far row promote to a queen.
///
/// A move carries everything needed to take it back, so `apply` followed by
/// `undo` restores the board square for square.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ChessMove {
    from_square: Square,
    to_square: Square,
    piece: (Piece, Color),
    capture: Option<(Piece, Color)>,
    promotion: bool,
}

impl ChessMove {
    pub fn new(
        from_square: Square,
        to_square: Square,
        piece: (Piece, Color),
        capture: Option<(Piece, Color)>,
    ) -> Self {
        let (kind, color) = piece;
        let promotion = kind == Piece::Pawn && to_square.row() == color.promotion_row();
        Self {
            from_square,
            to_square,
            piece,
            capture,
            promotion,
        }
    }

    pub fn from_square(&self) -> Square {
        self.from_square
    }

    pub fn to_square(&self) -> Square {
        self.to_square
    }

    pub fn piece(&self) -> (Piece, Color) {
        self.piece
    }

    pub fn color(&self) -> Color {
        self.piece.1
    }

    pub fn captures(&self) -> Option<(Piece, Color)> {
        self.capture
    }

    pub fn is_promotion(&self) -> bool {
        self.promotion
    }

    /// The piece that stands on the destination once the move is made.
    fn landing_piece(&self) -> (Piece, Color) {
        let (kind, color) = self.piece;
        if self.promotion {
            (Piece::Queen, color)
        } else {
            (kind, color)
        }
    }

    /// Makes the move. The board is validated before it is touched, so an
    /// error leaves it unchanged. The side to move is not toggled.
    pub fn apply(&self, board: &mut Board) -> Result<Option<(Piece, Color)>, BoardError> {
        let moving = board.get(self.from_square).ok_or(BoardError::FromSquareIsEmpty {
            op: "apply",
            square: self.from_square,
        })?;
        if moving != self.piece {
            return Err(BoardError::UnexpectedMovingPiece {
                op: "apply",
                expected: self.piece,
                found: moving,
            });
        }

        let target = board.get(self.to_square);
        if target != self.capture {
            return Err(BoardError::UnexpectedCaptureResult {
                expected: self.capture,
                found: target,
            });
        }

        board.remove(self.from_square);
        let captured = board.remove(self.to_square);
        let (kind, color) = self.landing_piece();
        board.put(self.to_square, kind, color)?;

        Ok(captured)
    }

    /// Takes the move back, restoring the moved piece (demoting a promoted
    /// queen) and any captured piece.
    pub fn undo(&self, board: &mut Board) -> Result<(), BoardError> {
        let landed = board.get(self.to_square).ok_or(BoardError::ToSquareIsEmpty {
            square: self.to_square,
        })?;
        if landed != self.landing_piece() {
            return Err(BoardError::UnexpectedMovingPiece {
                op: "undo",
                expected: self.landing_piece(),
                found: landed,
            });
        }
        if board.is_occupied(self.from_square) {
            return Err(BoardError::SquareOccupied {
                square: self.from_square,
            });
        }

        board.remove(self.to_square);
        let (kind, color) = self.piece;
        board.put(self.from_square, kind, color)?;
        if let Some((captured, captured_color)) = self.capture {
            board.put(self.to_square, captured, captured_color)?;
        }

        Ok(())
    }

    /// Human-readable history entry, e.g. `white pawn: e2 → e4`.
    pub fn describe(&self) -> String {
        let (kind, color) = self.piece;
        let mut description = format!(
            "{} {}: {} → {}",
            color, kind, self.from_square, self.to_square
        );
        if let Some((captured, _)) = self.capture {
            description.push_str(&format!(" takes {}", captured));
        }
        if self.promotion {
            description.push_str(" (promotes)");
        }
        description
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from_square, self.to_square)?;
        if self.promotion {
            write!(f, "q")?;
        }
        Ok(())
    }
}

#[macro_export]
macro_rules! std_move {
    ($from:expr, $to:expr, $piece:expr, $capture:expr) => {
        $crate::chess_move::ChessMove::new($from, $to, $piece, Some($capture))
    };
    ($from:expr, $to:expr, $piece:expr) => {
        $crate::chess_move::ChessMove::new($from, $to, $piece, None)
    };
}
