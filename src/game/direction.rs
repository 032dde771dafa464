use serde::{Deserialize, Serialize};

/// One of the four directions a move can shift the grid in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// Flat indices of one line (row or column), ordered from the leading edge
/// inward. The leading edge is the wall tiles travel toward, so the first
/// index is where the first tile of the line ends up.
pub(crate) fn line_indices(direction: Direction, line: usize, size: usize) -> Vec<usize> {
    match direction {
        Direction::Left => (0..size).map(|col| line * size + col).collect(),
        Direction::Right => (0..size).rev().map(|col| line * size + col).collect(),
        Direction::Up => (0..size).map(|row| row * size + line).collect(),
        Direction::Down => (0..size).rev().map(|row| row * size + line).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_lines_start_at_the_travelled_wall() {
        assert_eq!(line_indices(Direction::Left, 1, 4), vec![4, 5, 6, 7]);
        assert_eq!(line_indices(Direction::Right, 1, 4), vec![7, 6, 5, 4]);
    }

    #[test]
    fn test_column_lines_start_at_the_travelled_wall() {
        assert_eq!(line_indices(Direction::Up, 2, 4), vec![2, 6, 10, 14]);
        assert_eq!(line_indices(Direction::Down, 2, 4), vec![14, 10, 6, 2]);
    }

    #[test]
    fn test_lines_generalize_to_other_sizes() {
        assert_eq!(line_indices(Direction::Left, 0, 3), vec![0, 1, 2]);
        assert_eq!(line_indices(Direction::Down, 1, 3), vec![7, 4, 1]);
    }
}
