use core::fmt;

use common::Square;
use smallvec::SmallVec;

use crate::board::{color::Color, piece::Piece, Board};

/// Destination squares for a single piece. A queen in the middle of an
/// empty board has 27 targets, the most any piece can reach.
pub type TargetList = SmallVec<[Square; 28]>;

#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash)]
pub enum Direction {
    East,
    North,
    NorthEast,
    NorthWest,
    South,
    SouthEast,
    SouthWest,
    West,
}

impl Direction {
    pub fn all() -> [Direction; 8] {
        [
            Direction::East,
            Direction::North,
            Direction::NorthEast,
            Direction::NorthWest,
            Direction::South,
            Direction::SouthEast,
            Direction::SouthWest,
            Direction::West,
        ]
    }

    /// `(row, col)` step. North points towards rank 8, which is row 0.
    pub fn offset(self) -> (i8, i8) {
        match self {
            Direction::East => (0, 1),
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::NorthWest => (-1, -1),
            Direction::South => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let dir = match self {
            Direction::East => "East",
            Direction::North => "North",
            Direction::NorthEast => "NorthEast",
            Direction::NorthWest => "NorthWest",
            Direction::South => "South",
            Direction::SouthEast => "SouthEast",
            Direction::SouthWest => "SouthWest",
            Direction::West => "West",
        };
        write!(f, "{}", dir)
    }
}

const ROOK_DIRS: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

const BISHOP_DIRS: [Direction; 4] = [
    Direction::NorthWest,
    Direction::NorthEast,
    Direction::SouthWest,
    Direction::SouthEast,
];

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Pseudo-legal destinations for whatever stands on `square`. Empty squares
/// have no targets. Moves that leave the mover's own king exposed are not
/// filtered out.
pub fn generate_targets(board: &Board, square: Square) -> TargetList {
    let mut targets = TargetList::new();
    let (piece, color) = match board.get(square) {
        Some(occupant) => occupant,
        None => return targets,
    };

    match piece {
        Piece::Pawn => generate_pawn_targets(&mut targets, board, square, color),
        Piece::Knight => generate_step_targets(&mut targets, board, square, color, &KNIGHT_OFFSETS),
        Piece::Bishop => generate_sliding_targets(&mut targets, board, square, color, &BISHOP_DIRS),
        Piece::Rook => generate_sliding_targets(&mut targets, board, square, color, &ROOK_DIRS),
        Piece::Queen => {
            generate_sliding_targets(&mut targets, board, square, color, &Direction::all())
        }
        Piece::King => {
            let offsets = Direction::all().map(Direction::offset);
            generate_step_targets(&mut targets, board, square, color, &offsets)
        }
    }

    targets
}

fn generate_pawn_targets(targets: &mut TargetList, board: &Board, square: Square, color: Color) {
    let direction = color.pawn_direction();

    if let Some(single) = square.offset(direction, 0) {
        if !board.is_occupied(single) {
            targets.push(single);

            if square.row() == color.pawn_start_row() {
                if let Some(double) = single.offset(direction, 0) {
                    if !board.is_occupied(double) {
                        targets.push(double);
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        if let Some(diagonal) = square.offset(direction, d_col) {
            if board.color_at(diagonal) == Some(color.opposite()) {
                targets.push(diagonal);
            }
        }
    }
}

fn generate_step_targets(
    targets: &mut TargetList,
    board: &Board,
    square: Square,
    color: Color,
    offsets: &[(i8, i8)],
) {
    for &(d_row, d_col) in offsets {
        if let Some(target) = square.offset(d_row, d_col) {
            if board.color_at(target) != Some(color) {
                targets.push(target);
            }
        }
    }
}

/// Walks each ray until the edge of the board or the first occupied square,
/// which is included only when it holds an enemy piece.
fn generate_sliding_targets(
    targets: &mut TargetList,
    board: &Board,
    square: Square,
    color: Color,
    directions: &[Direction],
) {
    for direction in directions {
        let (d_row, d_col) = direction.offset();
        let mut current = square;
        while let Some(next) = current.offset(d_row, d_col) {
            match board.color_at(next) {
                None => targets.push(next),
                Some(occupant) => {
                    if occupant != color {
                        targets.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_position;
    use common::square::*;

    fn sorted(mut targets: TargetList) -> Vec<Square> {
        targets.sort();
        targets.into_vec()
    }

    fn squares(list: &[Square]) -> Vec<Square> {
        let mut list = list.to_vec();
        list.sort();
        list
    }

    #[test]
    fn test_generate_pawn_targets() {
        let board = chess_position! {
            ..r.....
            .P.p...p
            ......P.
            p.......
            P.......
            .....r..
            p..P.P..
            ........
        };
        println!("Testing board:\n{}", board);

        assert_eq!(squares(&[D3, D4]), sorted(generate_targets(&board, D2)));
        assert_eq!(squares(&[G7, H7]), sorted(generate_targets(&board, G6)));
        assert_eq!(squares(&[B8, C8]), sorted(generate_targets(&board, B7)));
        // blocked by the rook on f3
        assert!(generate_targets(&board, F2).is_empty());
        assert_eq!(squares(&[D6, D5]), sorted(generate_targets(&board, D7)));
        assert_eq!(squares(&[H6, H5, G6]), sorted(generate_targets(&board, H7)));
        assert_eq!(squares(&[A1]), sorted(generate_targets(&board, A2)));
        // a4 and a5 block each other
        assert!(generate_targets(&board, A4).is_empty());
        assert!(generate_targets(&board, A5).is_empty());
    }

    #[test]
    fn test_pawn_double_step_needs_both_squares_empty() {
        let board = chess_position! {
            ....k...
            ........
            ........
            ........
            ........
            ..n.....
            .PP.P...
            ....K...
        };

        assert_eq!(squares(&[B3, B4, C3]), sorted(generate_targets(&board, B2)));
        assert!(generate_targets(&board, C2).is_empty());
        assert_eq!(squares(&[E3, E4]), sorted(generate_targets(&board, E2)));
    }

    #[test]
    fn test_generate_knight_targets() {
        let board = chess_position! {
            ........
            ........
            .......n
            ...p....
            ....P...
            ..N.....
            ........
            ........
        };

        assert_eq!(
            squares(&[D5, E2, D1, B5, A4, A2, B1]),
            sorted(generate_targets(&board, C3))
        );
        assert_eq!(squares(&[G8, F7, F5, G4]), sorted(generate_targets(&board, H6)));
    }

    #[test]
    fn test_generate_rook_targets() {
        let board = chess_position! {
            ........
            ..P.....
            ........
            ........
            ........
            P.R....p
            ........
            ..K.....
        };

        assert_eq!(
            squares(&[C2, C4, C5, C6, B3, D3, E3, F3, G3, H3]),
            sorted(generate_targets(&board, C3))
        );
    }

    #[test]
    fn test_generate_bishop_targets() {
        let board = chess_position! {
            ........
            ........
            .....p..
            ........
            ...B....
            ........
            .P......
            ........
        };

        assert_eq!(
            squares(&[C5, B6, A7, E5, F6, E3, F2, G1, C3]),
            sorted(generate_targets(&board, D4))
        );
    }

    #[test]
    fn test_generate_queen_targets_on_empty_board() {
        let board = chess_position! {
            ........
            ........
            ........
            ........
            ...Q....
            ........
            ........
            ........
        };

        assert_eq!(27, generate_targets(&board, D4).len());
    }

    #[test]
    fn test_generate_king_targets() {
        let board = chess_position! {
            ........
            ........
            ........
            ........
            ........
            ........
            pP......
            K.......
        };

        assert_eq!(squares(&[A2, B1]), sorted(generate_targets(&board, A1)));
    }

    #[test]
    fn test_empty_square_has_no_targets() {
        let board = Board::starting_position();
        assert!(generate_targets(&board, E4).is_empty());
    }

    #[test]
    fn test_direction_display() {
        assert_eq!("NorthEast", Direction::NorthEast.to_string());
        assert_eq!((-1, 1), Direction::NorthEast.offset());
    }
}
