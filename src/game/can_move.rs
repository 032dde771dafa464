use crate::game::board::Board;

/// Returns true while at least one legal move exists.
///
/// An empty cell always guarantees a move; on a full grid a move exists iff
/// two horizontally or vertically adjacent cells hold equal values. Pure
/// read-only query, safe to call repeatedly.
pub fn can_move(board: &Board) -> bool {
    if board.blank_count > 0 {
        return true;
    }

    let size = board.size;
    for row in 0..size {
        for col in 0..size {
            let value = board.tiles[row * size + col];
            if col + 1 < size && value == board.tiles[row * size + col + 1] {
                return true;
            }
            if row + 1 < size && value == board.tiles[(row + 1) * size + col] {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    // No blanks, no equal neighbours in any direction.
    fn blocked_board() -> Vec<u32> {
        vec![
            2, 4, 2, 4, //
            4, 2, 4, 2, //
            2, 4, 2, 4, //
            4, 2, 4, 2,
        ]
    }

    #[test]
    fn test_blank_cell_guarantees_a_move() {
        let mut tiles = blocked_board();
        tiles[5] = 0;
        assert!(can_move(&Board::from_tiles(4, tiles)));
    }

    #[test]
    fn test_full_board_without_pairs_is_terminal() {
        assert!(!can_move(&Board::from_tiles(4, blocked_board())));
    }

    #[test]
    fn test_full_board_with_horizontal_pair_is_playable() {
        let mut tiles = blocked_board();
        tiles[1] = 2; // row 0 becomes [2, 2, 2, 4]
        assert!(can_move(&Board::from_tiles(4, tiles)));
    }

    #[test]
    fn test_full_board_with_vertical_pair_is_playable() {
        let mut tiles = blocked_board();
        tiles[4] = 2; // column 0 becomes [2, 2, 2, 4]
        assert!(can_move(&Board::from_tiles(4, tiles)));
    }

    #[test]
    fn test_query_does_not_mutate_the_board() {
        let board = Board::from_tiles(4, blocked_board());
        let before = board.clone();
        can_move(&board);
        can_move(&board);
        assert_eq!(board, before);
    }
}
