//! Move generation over the whole board.
//!
//! Every move produced here is pseudo-legal: piece movement and occupancy
//! are respected, king exposure is not checked.

use common::Square;
use smallvec::SmallVec;

use crate::board::{color::Color, error::BoardError, Board};
use crate::chess_move::ChessMove;

use super::targets::generate_targets;

/// A list of chess moves that is optimized for small sizes.
pub type ChessMoveList = SmallVec<[ChessMove; 32]>;

/// Moves for the piece on `square`, empty if the square is empty.
pub fn generate_moves_from(board: &Board, square: Square) -> ChessMoveList {
    let mut moves = ChessMoveList::new();
    expand_targets(&mut moves, board, square);
    moves
}

/// All moves for every piece of `color`, in row-major order of the origin
/// square.
pub fn generate_moves(board: &Board, color: Color) -> ChessMoveList {
    let mut moves = ChessMoveList::new();
    for (square, _) in board.pieces(color) {
        expand_targets(&mut moves, board, square);
    }
    moves
}

/// Number of destination squares reachable by all pieces of `color`.
pub fn count_destinations(board: &Board, color: Color) -> usize {
    board
        .pieces(color)
        .map(|(square, _)| generate_targets(board, square).len())
        .sum()
}

#[inline]
fn expand_targets(moves: &mut ChessMoveList, board: &Board, square: Square) {
    let piece = match board.get(square) {
        Some(piece) => piece,
        None => return,
    };

    for target in generate_targets(board, square) {
        let capture = board.get(target);
        moves.push(ChessMove::new(square, target, piece, capture));
    }
}

/// Counts the nodes of the pseudo-legal move tree, `depth` plies below the
/// moves available to `player`. The board is restored before returning.
pub fn count_positions(depth: u8, board: &mut Board, player: Color) -> Result<usize, BoardError> {
    let candidates = generate_moves(board, player);
    let mut count = candidates.len();

    if depth == 0 {
        return Ok(count);
    }

    let next_player = player.opposite();
    for chess_move in candidates.iter() {
        chess_move.apply(board)?;
        count += count_positions(depth - 1, board, next_player)?;
        chess_move.undo(board)?;
    }

    Ok(count)
}
