//! The sliding-tile puzzle: an N×N grid holding tiles `1..N²-1` and one
//! blank, solved when the tiles read in order with the blank last.

use std::fmt;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

pub mod session;

pub use session::PuzzleSession;

/// The blank square is stored as tile 0.
pub const BLANK: u8 = 0;

/// Largest grid whose tile numbers still fit in a `u8`.
pub const MAX_SIZE: usize = 16;

#[derive(Error, Debug, PartialEq)]
pub enum PuzzleError {
    #[error("puzzle size must be between 2 and {max}, {size} given")]
    InvalidSize { size: usize, max: usize },
    #[error("expected {expected} tiles, {found} given")]
    WrongTileCount { expected: usize, found: usize },
    #[error("tiles must be a permutation of 0..{tile_count}")]
    NotAPermutation { tile_count: usize },
    #[error("there is no tile {tile}")]
    UnknownTile { tile: u8 },
    #[error("tile {tile} is not next to the blank")]
    NotAdjacent { tile: u8 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlidingPuzzle {
    size: usize,
    tiles: Vec<u8>,
    moves: usize,
}

impl SlidingPuzzle {
    pub fn solved(size: usize) -> Result<Self, PuzzleError> {
        check_size(size)?;

        let tile_count = size * size;
        let mut tiles: Vec<u8> = (1..tile_count).map(|tile| tile as u8).collect();
        tiles.push(BLANK);

        Ok(Self {
            size,
            tiles,
            moves: 0,
        })
    }

    /// Builds a puzzle from its tiles in row-major order, 0 for the blank.
    pub fn from_tiles(size: usize, tiles: Vec<u8>) -> Result<Self, PuzzleError> {
        check_size(size)?;

        let tile_count = size * size;
        if tiles.len() != tile_count {
            return Err(PuzzleError::WrongTileCount {
                expected: tile_count,
                found: tiles.len(),
            });
        }

        let mut seen = vec![false; tile_count];
        for &tile in tiles.iter() {
            let index = tile as usize;
            if index >= tile_count || seen[index] {
                return Err(PuzzleError::NotAPermutation { tile_count });
            }
            seen[index] = true;
        }

        Ok(Self {
            size,
            tiles,
            moves: 0,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    pub fn tile_at(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(self.tiles[row * self.size + col])
    }

    pub fn move_count(&self) -> usize {
        self.moves
    }

    /// `(row, col)` of the blank, row 0 at the top.
    pub fn blank_position(&self) -> (usize, usize) {
        let index = self
            .tiles
            .iter()
            .position(|&tile| tile == BLANK)
            .unwrap_or(0);
        (index / self.size, index % self.size)
    }

    /// Rows between the blank and the bottom edge: 0 when the blank is on
    /// the bottom row.
    pub fn blank_row_from_bottom(&self) -> usize {
        let (row, _) = self.blank_position();
        self.size - 1 - row
    }

    /// Pairs of tiles that appear in the wrong order when read row by row,
    /// ignoring the blank.
    pub fn inversions(&self) -> usize {
        let numbered: Vec<u8> = self
            .tiles
            .iter()
            .copied()
            .filter(|&tile| tile != BLANK)
            .collect();

        let mut inversions = 0;
        for (i, &earlier) in numbered.iter().enumerate() {
            inversions += numbered[i + 1..]
                .iter()
                .filter(|&&later| later < earlier)
                .count();
        }
        inversions
    }

    /// Odd widths are solvable exactly when the inversion count is even.
    /// Even widths also count the blank's row from the bottom: the sum has
    /// to be even.
    pub fn is_solvable(&self) -> bool {
        let inversions = self.inversions();
        if self.size % 2 == 1 {
            inversions % 2 == 0
        } else {
            (inversions + self.blank_row_from_bottom()) % 2 == 0
        }
    }

    pub fn is_solved(&self) -> bool {
        let last = self.tiles.len() - 1;
        self.tiles[last] == BLANK
            && self.tiles[..last]
                .iter()
                .enumerate()
                .all(|(i, &tile)| tile as usize == i + 1)
    }

    /// Re-deals the tiles until the layout is solvable and not already
    /// solved, and resets the move counter.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut attempts = 0;
        loop {
            attempts += 1;
            self.tiles.shuffle(rng);
            if self.is_solvable() && !self.is_solved() {
                break;
            }
        }
        self.moves = 0;
        debug!(
            "Shuffled {}x{} puzzle in {} attempts, {} inversions",
            self.size,
            self.size,
            attempts,
            self.inversions()
        );
    }

    /// Tiles that share an edge with the blank.
    pub fn movable_tiles(&self) -> Vec<u8> {
        let (blank_row, blank_col) = self.blank_position();
        let mut movable = Vec::with_capacity(4);

        if blank_row > 0 {
            movable.extend(self.tile_at(blank_row - 1, blank_col));
        }
        movable.extend(self.tile_at(blank_row + 1, blank_col));
        if blank_col > 0 {
            movable.extend(self.tile_at(blank_row, blank_col - 1));
        }
        movable.extend(self.tile_at(blank_row, blank_col + 1));

        movable
    }

    /// Slides `tile` into the blank. Only tiles sharing an edge with the
    /// blank can move.
    pub fn slide(&mut self, tile: u8) -> Result<(), PuzzleError> {
        let tile_index = self
            .tiles
            .iter()
            .position(|&t| t == tile && t != BLANK)
            .ok_or(PuzzleError::UnknownTile { tile })?;

        if !self.movable_tiles().contains(&tile) {
            return Err(PuzzleError::NotAdjacent { tile });
        }

        let (blank_row, blank_col) = self.blank_position();
        let blank_index = blank_row * self.size + blank_col;
        self.tiles.swap(tile_index, blank_index);
        self.moves += 1;

        Ok(())
    }
}

fn check_size(size: usize) -> Result<(), PuzzleError> {
    if !(2..=MAX_SIZE).contains(&size) {
        return Err(PuzzleError::InvalidSize {
            size,
            max: MAX_SIZE,
        });
    }
    Ok(())
}

impl fmt::Display for SlidingPuzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.size * self.size - 1).to_string().len();

        for row in self.tiles.chunks(self.size) {
            let cells: Vec<String> = row
                .iter()
                .map(|&tile| {
                    if tile == BLANK {
                        format!("{:>width$}", ".", width = width)
                    } else {
                        format!("{:>width$}", tile, width = width)
                    }
                })
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_solved_puzzle() {
        let puzzle = SlidingPuzzle::solved(4).unwrap();
        assert!(puzzle.is_solved());
        assert!(puzzle.is_solvable());
        assert_eq!(0, puzzle.inversions());
        assert_eq!(0, puzzle.blank_row_from_bottom());
        assert_eq!((3, 3), puzzle.blank_position());
    }

    #[test]
    fn test_swapped_tiles_are_unsolvable() {
        let tiles = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 15, 14, 0];
        let puzzle = SlidingPuzzle::from_tiles(4, tiles).unwrap();

        assert_eq!(1, puzzle.inversions());
        assert_eq!(0, puzzle.blank_row_from_bottom());
        assert!(!puzzle.is_solvable());
    }

    #[test]
    fn test_swapping_two_tiles_flips_solvability() {
        let tiles = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 15, 14, 0];
        let puzzle = SlidingPuzzle::from_tiles(4, tiles.clone()).unwrap();
        let solvable = puzzle.is_solvable();

        for i in 0..tiles.len() {
            for j in (i + 1)..tiles.len() {
                if tiles[i] == BLANK || tiles[j] == BLANK {
                    continue;
                }
                let mut swapped = tiles.clone();
                swapped.swap(i, j);
                let swapped = SlidingPuzzle::from_tiles(4, swapped).unwrap();
                assert_ne!(solvable, swapped.is_solvable(), "swapping {} and {}", i, j);
            }
        }
    }

    #[test]
    fn test_odd_width_ignores_blank_row() {
        let unsolvable = SlidingPuzzle::from_tiles(3, vec![1, 2, 3, 4, 5, 6, 8, 7, 0]).unwrap();
        assert!(!unsolvable.is_solvable());

        // even inversions with the blank one row up; the even-width rule would reject it
        let solvable = SlidingPuzzle::from_tiles(3, vec![1, 2, 3, 4, 0, 6, 7, 5, 8]).unwrap();
        assert_eq!(2, solvable.inversions());
        assert_eq!(1, solvable.blank_row_from_bottom());
        assert!(solvable.is_solvable());
    }

    #[test]
    fn test_even_width_counts_blank_row() {
        // one slide away from solved: the blank moved up a row
        let tiles = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0, 13, 14, 15, 12];
        let puzzle = SlidingPuzzle::from_tiles(4, tiles).unwrap();

        assert_eq!(3, puzzle.inversions());
        assert_eq!(1, puzzle.blank_row_from_bottom());
        assert!(puzzle.is_solvable());
    }

    #[test]
    fn test_legal_slides_preserve_solvability() {
        let mut rng = StdRng::seed_from_u64(9);

        for size in 2..=5 {
            let mut puzzle = SlidingPuzzle::solved(size).unwrap();
            for _ in 0..200 {
                let movable = puzzle.movable_tiles();
                let tile = *movable.choose(&mut rng).unwrap();
                puzzle.slide(tile).unwrap();
                assert!(puzzle.is_solvable(), "\n{}", puzzle);
            }
            assert_eq!(200, puzzle.move_count());
        }
    }

    #[test]
    fn test_shuffle_is_solvable_and_unsolved() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            for size in 2..=4 {
                let mut puzzle = SlidingPuzzle::solved(size).unwrap();
                puzzle.shuffle(&mut rng);
                assert!(puzzle.is_solvable());
                assert!(!puzzle.is_solved());
                assert_eq!(0, puzzle.move_count());

                let mut sorted = puzzle.tiles().to_vec();
                sorted.sort_unstable();
                let expected: Vec<u8> = (0..(size * size) as u8).collect();
                assert_eq!(expected, sorted);
            }
        }
    }

    #[test]
    fn test_slide() {
        let mut puzzle = SlidingPuzzle::solved(3).unwrap();
        let mut movable = puzzle.movable_tiles();
        movable.sort_unstable();
        assert_eq!(vec![6, 8], movable);

        puzzle.slide(8).unwrap();
        assert_eq!((2, 1), puzzle.blank_position());
        assert_eq!(Some(8), puzzle.tile_at(2, 2));
        assert!(!puzzle.is_solved());

        assert_eq!(Err(PuzzleError::NotAdjacent { tile: 1 }), puzzle.slide(1));
        assert_eq!(Err(PuzzleError::UnknownTile { tile: 9 }), puzzle.slide(9));
        assert_eq!(Err(PuzzleError::UnknownTile { tile: 0 }), puzzle.slide(BLANK));

        puzzle.slide(8).unwrap();
        assert!(puzzle.is_solved());
        assert_eq!(2, puzzle.move_count());
    }

    #[test]
    fn test_invalid_puzzles() {
        assert_eq!(
            Err(PuzzleError::InvalidSize { size: 1, max: MAX_SIZE }),
            SlidingPuzzle::solved(1)
        );
        assert_eq!(
            Err(PuzzleError::WrongTileCount {
                expected: 4,
                found: 3
            }),
            SlidingPuzzle::from_tiles(2, vec![1, 2, 0])
        );
        assert_eq!(
            Err(PuzzleError::NotAPermutation { tile_count: 4 }),
            SlidingPuzzle::from_tiles(2, vec![1, 1, 2, 0])
        );
        assert_eq!(
            Err(PuzzleError::NotAPermutation { tile_count: 4 }),
            SlidingPuzzle::from_tiles(2, vec![1, 2, 4, 0])
        );
    }

    #[test]
    fn test_display() {
        let puzzle = SlidingPuzzle::solved(3).unwrap();
        assert_eq!("1 2 3\n4 5 6\n7 8 .\n", puzzle.to_string());

        let puzzle = SlidingPuzzle::solved(4).unwrap();
        let rendered = puzzle.to_string();
        assert_eq!(" 1  2  3  4", rendered.lines().next().unwrap());
        assert_eq!("13 14 15  .", rendered.lines().last().unwrap());
    }
}
