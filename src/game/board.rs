use serde::{Deserialize, Serialize};
use std::fmt;

/// Default side length of the grid.
pub const DEFAULT_SIZE: usize = 4;

/// The tile value that marks a won session.
pub const TARGET_TILE: u32 = 2048;

/// The board aggregate: the grid plus all per-session bookkeeping.
///
/// The grid is a row-major flattened vector of side length `size`; `0` is an
/// empty cell, every other value is a power of two. The fields are only
/// mutated through `apply_move` and `spawn_tile`, which keep `blank_count`,
/// `largest_tile` and `score` consistent with the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub(crate) size: usize,
    pub(crate) tiles: Vec<u32>,
    pub(crate) score: u32,
    pub(crate) largest_tile: u32,
    pub(crate) move_count: u32,
    pub(crate) blank_count: usize,
}

impl Board {
    /// Creates an empty board with the given side length.
    pub fn new(size: usize) -> Board {
        assert!(size >= 2, "board side length must be at least 2");
        Board {
            size,
            tiles: vec![0; size * size],
            score: 0,
            largest_tile: 0,
            move_count: 0,
            blank_count: size * size,
        }
    }

    /// Creates a board from an explicit row-major grid, recomputing
    /// `blank_count` and `largest_tile`. Score and move count start at zero.
    ///
    /// Intended for seeding positions (and for tests); every nonzero value
    /// must be a power of two.
    pub fn from_tiles(size: usize, tiles: Vec<u32>) -> Board {
        assert!(size >= 2, "board side length must be at least 2");
        assert_eq!(tiles.len(), size * size, "grid length must be size * size");
        assert!(
            tiles.iter().all(|&v| v == 0 || (v >= 2 && v.is_power_of_two())),
            "nonzero tiles must be powers of two"
        );
        let blank_count = tiles.iter().filter(|&&v| v == 0).count();
        let largest_tile = tiles.iter().copied().max().unwrap_or(0);
        Board {
            size,
            tiles,
            score: 0,
            largest_tile,
            move_count: 0,
            blank_count,
        }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Read-only snapshot of the grid, row-major.
    pub fn tiles(&self) -> &[u32] {
        &self.tiles
    }

    /// Value of the tile at `(row, col)`; `0` means empty.
    pub fn tile(&self, row: usize, col: usize) -> u32 {
        self.tiles[row * self.size + col]
    }

    /// Sum of all merge results ever produced.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Largest single tile value ever present.
    pub fn largest_tile(&self) -> u32 {
        self.largest_tile
    }

    /// Number of direction inputs that changed the grid.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Number of empty cells.
    pub fn blank_count(&self) -> usize {
        self.blank_count
    }

    /// Checks the bookkeeping against the grid in debug builds.
    pub(crate) fn debug_check_invariants(&self) {
        debug_assert_eq!(
            self.blank_count,
            self.tiles.iter().filter(|&&v| v == 0).count(),
            "blank_count out of sync with the grid"
        );
        debug_assert!(
            self.tiles.iter().all(|&v| v == 0 || (v >= 2 && v.is_power_of_two())),
            "nonzero tile is not a power of two"
        );
        debug_assert!(
            self.tiles.iter().copied().max().unwrap_or(0) <= self.largest_tile,
            "largest_tile lags behind the grid"
        );
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new(DEFAULT_SIZE)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(self.size) {
            for &value in row {
                if value == 0 {
                    write!(f, "{:>6}", ".")?;
                } else {
                    write!(f, "{:>6}", value)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_all_blank() {
        let board = Board::new(4);
        assert_eq!(board.tiles().len(), 16);
        assert_eq!(board.blank_count(), 16);
        assert_eq!(board.score(), 0);
        assert_eq!(board.largest_tile(), 0);
        assert_eq!(board.move_count(), 0);
    }

    #[test]
    fn test_from_tiles_recomputes_bookkeeping() {
        let board = Board::from_tiles(4, vec![2, 0, 0, 4, 0, 0, 0, 0, 0, 8, 0, 0, 0, 0, 0, 0]);
        assert_eq!(board.blank_count(), 13);
        assert_eq!(board.largest_tile(), 8);
        assert_eq!(board.tile(0, 3), 4);
        assert_eq!(board.tile(2, 1), 8);
        board.debug_check_invariants();
    }

    #[test]
    #[should_panic(expected = "powers of two")]
    fn test_from_tiles_rejects_non_power_of_two() {
        Board::from_tiles(2, vec![2, 3, 0, 0]);
    }

    #[test]
    fn test_display_shows_values_and_blanks() {
        let board = Board::from_tiles(2, vec![2, 0, 0, 16]);
        let rendered = board.to_string();
        assert!(rendered.contains('2'));
        assert!(rendered.contains("16"));
        assert!(rendered.contains('.'));
    }
}
