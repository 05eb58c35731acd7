//! Static evaluation of a position.
//!
//! Scores are always taken from one fixed perspective: positive values
//! favor the perspective side, negative values favor its opponent.

use common::Square;

use crate::board::{color::Color, piece::Piece, Board};
use crate::move_generator::count_destinations;

use self::evaluation_tables::{material_value, square_bonus};

mod evaluation_tables;

/// Weights and bonuses of the heuristic terms layered on top of material
/// and piece-square values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvalWeights {
    /// Multiplier for the number of pseudo-legal destination squares.
    pub mobility: i32,
    pub pawn_structure: i32,
    pub king_safety: i32,
    pub connected_pawn_bonus: i32,
    pub isolated_pawn_penalty: i32,
    pub castled_king_bonus: i32,
    pub pawn_shield_bonus: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            mobility: 5,
            pawn_structure: 1,
            king_safety: 1,
            connected_pawn_bonus: 10,
            isolated_pawn_penalty: 15,
            castled_king_bonus: 30,
            pawn_shield_bonus: 10,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Evaluator {
    perspective: Color,
    weights: EvalWeights,
}

impl Evaluator {
    pub fn new(perspective: Color) -> Self {
        Self::with_weights(perspective, EvalWeights::default())
    }

    pub fn with_weights(perspective: Color, weights: EvalWeights) -> Self {
        Self {
            perspective,
            weights,
        }
    }

    pub fn perspective(&self) -> Color {
        self.perspective
    }

    pub fn weights(&self) -> &EvalWeights {
        &self.weights
    }

    /// Net score of the board: the perspective side's total minus the
    /// opponent's.
    pub fn evaluate(&self, board: &Board) -> i32 {
        self.side_score(board, self.perspective) - self.side_score(board, self.perspective.opposite())
    }

    /// Everything one side contributes to the score, before subtracting
    /// the other side.
    pub fn side_score(&self, board: &Board, color: Color) -> i32 {
        let weights = &self.weights;

        material_score(board, color)
            + positional_score(board, color)
            + mobility_score(board, color) * weights.mobility
            + pawn_structure_score(board, color, weights) * weights.pawn_structure
            + king_safety_score(board, color, weights) * weights.king_safety
    }
}

pub fn material_score(board: &Board, color: Color) -> i32 {
    board
        .pieces(color)
        .map(|(_, piece)| material_value(piece))
        .sum()
}

/// Sum of piece-square bonuses. Central knights, advanced pawns and
/// tucked-away kings score higher.
pub fn positional_score(board: &Board, color: Color) -> i32 {
    board
        .pieces(color)
        .map(|(square, piece)| square_bonus(piece, color, square))
        .sum()
}

pub fn mobility_score(board: &Board, color: Color) -> i32 {
    count_destinations(board, color) as i32
}

/// Rewards pawns with a friendly pawn beside them on the same rank and
/// penalizes pawns with no friendly pawn on either adjacent file.
pub fn pawn_structure_score(board: &Board, color: Color, weights: &EvalWeights) -> i32 {
    let is_friendly_pawn = |square: Option<Square>| {
        square.map_or(false, |sq| board.get(sq) == Some((Piece::Pawn, color)))
    };

    let mut files_with_pawns = [false; 8];
    for (square, piece) in board.pieces(color) {
        if piece == Piece::Pawn {
            files_with_pawns[square.col() as usize] = true;
        }
    }

    let mut score = 0;
    for (square, piece) in board.pieces(color) {
        if piece != Piece::Pawn {
            continue;
        }

        if is_friendly_pawn(square.offset(0, -1)) || is_friendly_pawn(square.offset(0, 1)) {
            score += weights.connected_pawn_bonus;
        }

        let col = square.col() as usize;
        let left = col > 0 && files_with_pawns[col - 1];
        let right = col < 7 && files_with_pawns[col + 1];
        if !left && !right {
            score -= weights.isolated_pawn_penalty;
        }
    }

    score
}

/// Bonus for a king sitting on a castled-looking square (g or c file of its
/// back rank) plus a bonus per friendly pawn on the three squares directly
/// in front of it.
pub fn king_safety_score(board: &Board, color: Color, weights: &EvalWeights) -> i32 {
    let king = match board.locate_king(color) {
        Some(square) => square,
        None => return 0,
    };

    let mut score = 0;
    if king.row() == color.back_row() && (king.col() == 6 || king.col() == 2) {
        score += weights.castled_king_bonus;
    }

    let forward = color.pawn_direction();
    for d_col in -1..=1 {
        if let Some(shield) = king.offset(forward, d_col) {
            if board.get(shield) == Some((Piece::Pawn, color)) {
                score += weights.pawn_shield_bonus;
            }
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_position;

    #[test]
    fn test_starting_position_is_balanced() {
        let board = Board::starting_position();
        println!("Testing board:\n{}", board);

        assert_eq!(0, Evaluator::new(Color::White).evaluate(&board));
        assert_eq!(0, Evaluator::new(Color::Black).evaluate(&board));
    }

    #[test]
    fn test_starting_material_score() {
        let board = Board::starting_position();
        assert_eq!(24_000, material_score(&board, Color::White));
        assert_eq!(24_000, material_score(&board, Color::Black));
    }

    #[test]
    fn test_perspectives_are_negations() {
        let board = chess_position! {
            r...k..r
            ppp..ppp
            ..n.....
            ...qp...
            ....P...
            ..N..N..
            PPP..PPP
            R...K..R
        };
        println!("Testing board:\n{}", board);

        let white = Evaluator::new(Color::White).evaluate(&board);
        let black = Evaluator::new(Color::Black).evaluate(&board);
        assert_eq!(white, -black);
        // black is a queen up
        assert!(black > 0);
    }

    #[test]
    fn test_pawn_structure_score() {
        let weights = EvalWeights::default();
        let board = chess_position! {
            ....k...
            ........
            ........
            ........
            ........
            ........
            PP.....P
            ....K...
        };
        println!("Testing board:\n{}", board);

        // a2 and b2 are connected, h2 is isolated
        assert_eq!(
            2 * weights.connected_pawn_bonus - weights.isolated_pawn_penalty,
            pawn_structure_score(&board, Color::White, &weights)
        );
        assert_eq!(0, pawn_structure_score(&board, Color::Black, &weights));
    }

    #[test]
    fn test_king_safety_score() {
        let weights = EvalWeights::default();
        let board = chess_position! {
            ....k...
            ...ppp..
            ........
            ........
            ........
            ........
            .....PPP
            ......K.
        };
        println!("Testing board:\n{}", board);

        assert_eq!(
            weights.castled_king_bonus + 3 * weights.pawn_shield_bonus,
            king_safety_score(&board, Color::White, &weights)
        );
        assert_eq!(
            3 * weights.pawn_shield_bonus,
            king_safety_score(&board, Color::Black, &weights)
        );
    }

    #[test]
    fn test_missing_king_has_no_safety() {
        let weights = EvalWeights::default();
        let board = chess_position! {
            ........
            ........
            ........
            ........
            ........
            ........
            .....PPP
            ......K.
        };
        assert_eq!(0, king_safety_score(&board, Color::Black, &weights));
    }

    #[test]
    fn test_mobility_breaks_material_ties() {
        let cornered = chess_position! {
            ....k...
            ........
            ........
            ........
            ........
            ........
            ........
            N...K...
        };
        let centralized = chess_position! {
            ....k...
            ........
            ........
            ........
            ...N....
            ........
            ........
            ....K...
        };

        let evaluator = Evaluator::new(Color::White);
        assert!(evaluator.evaluate(&centralized) > evaluator.evaluate(&cornered));
    }

    #[test]
    fn test_custom_weights_change_the_score() {
        let board = chess_position! {
            ....k...
            ........
            ........
            ........
            ........
            ........
            .....PPP
            ......K.
        };
        let plain = Evaluator::new(Color::White);
        let cautious = Evaluator::with_weights(
            Color::White,
            EvalWeights {
                king_safety: 3,
                ..EvalWeights::default()
            },
        );

        let safety = king_safety_score(&board, Color::White, plain.weights());
        assert_eq!(
            plain.evaluate(&board) + 2 * safety,
            cautious.evaluate(&board)
        );
    }
}
