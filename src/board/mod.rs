pub mod color;
pub mod error;
pub mod fen;
pub mod piece;

mod display;

use color::Color;
use common::Square;
use error::BoardError;
use piece::Piece;

use crate::chess_position;

type Cell = Option<(Piece, Color)>;

/// Represents the state of a chess board: the 8x8 grid of pieces plus the
/// side to move. Boards compare equal only when every square and the turn
/// match, which is what the make/unmake round trip relies on.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    squares: [[Cell; 8]; 8],
    turn: Color,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            squares: [[None; 8]; 8],
            turn: Color::White,
        }
    }
}

impl Board {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn starting_position() -> Self {
        chess_position! {
            rnbqkbnr
            pppppppp
            ........
            ........
            ........
            ........
            PPPPPPPP
            RNBQKBNR
        }
    }

    pub fn get(&self, square: Square) -> Option<(Piece, Color)> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        self.get(square).is_some()
    }

    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.get(square).map(|(_, color)| color)
    }

    pub fn put(&mut self, square: Square, piece: Piece, color: Color) -> Result<(), BoardError> {
        if self.is_occupied(square) {
            return Err(BoardError::SquareOccupied { square });
        }

        self.squares[square.row() as usize][square.col() as usize] = Some((piece, color));
        Ok(())
    }

    pub fn remove(&mut self, square: Square) -> Option<(Piece, Color)> {
        self.squares[square.row() as usize][square.col() as usize].take()
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn toggle_turn(&mut self) -> Color {
        self.turn = self.turn.opposite();
        self.turn
    }

    pub fn set_turn(&mut self, turn: Color) -> Color {
        self.turn = turn;
        turn
    }

    /// Every occupied square holding a piece of `color`, in row-major order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| match self.get(square) {
            Some((piece, c)) if c == color => Some((square, piece)),
            _ => None,
        })
    }

    pub fn locate_king(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|&(_, piece)| piece == Piece::King)
            .map(|(square, _)| square)
    }

    pub fn has_king(&self, color: Color) -> bool {
        self.locate_king(color).is_some()
    }

    pub fn piece_count(&self, color: Color) -> usize {
        self.pieces(color).count()
    }

    pub fn count(&self, piece: Piece, color: Color) -> usize {
        self.pieces(color).filter(|&(_, p)| p == piece).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::square::*;

    #[test]
    fn test_starting_position_layout() {
        let board = Board::starting_position();
        assert_eq!(Some((Piece::King, Color::White)), board.get(E1));
        assert_eq!(Some((Piece::Queen, Color::Black)), board.get(D8));
        assert_eq!(Some((Piece::Pawn, Color::White)), board.get(A2));
        assert_eq!(None, board.get(E4));
        assert_eq!(16, board.piece_count(Color::White));
        assert_eq!(16, board.piece_count(Color::Black));
        assert_eq!(8, board.count(Piece::Pawn, Color::Black));
        assert_eq!(Color::White, board.turn());
    }

    #[test]
    fn test_put_on_occupied_square_fails() {
        let mut board = Board::new();
        board.put(D4, Piece::Knight, Color::White).unwrap();
        assert_eq!(
            Err(BoardError::SquareOccupied { square: D4 }),
            board.put(D4, Piece::Rook, Color::Black)
        );
        assert_eq!(Some((Piece::Knight, Color::White)), board.get(D4));
    }

    #[test]
    fn test_remove_returns_piece() {
        let mut board = Board::starting_position();
        assert_eq!(Some((Piece::Rook, Color::Black)), board.remove(H8));
        assert_eq!(None, board.remove(H8));
        assert_eq!(15, board.piece_count(Color::Black));
    }

    #[test]
    fn test_locate_king() {
        let mut board = Board::starting_position();
        assert_eq!(Some(E8), board.locate_king(Color::Black));
        board.remove(E8);
        assert!(!board.has_king(Color::Black));
        assert!(board.has_king(Color::White));
    }

    #[test]
    fn test_toggle_turn() {
        let mut board = Board::new();
        assert_eq!(Color::Black, board.toggle_turn());
        assert_eq!(Color::White, board.toggle_turn());
    }
}
