use crate::game::board::Board;
use crate::game::random_source::RandomSource;
use crate::{Game2048Error, Result};

/// Probability that a spawned tile is a 4 rather than a 2.
pub const FOUR_SPAWN_CHANCE: f64 = 0.1;

/// Spawns one tile on a uniformly chosen empty cell.
///
/// The value is 4 with probability [`FOUR_SPAWN_CHANCE`], else 2; with
/// `can_spawn_four == false` (the very first opening spawn) it is always 2.
/// The empty cell is picked directly among all empty cells, with no
/// rejection sampling.
///
/// # Errors
///
/// Returns [`Game2048Error::BoardFull`] when there is no empty cell, which
/// is a caller programming error rather than a playable state.
pub fn spawn_tile(
    board: &mut Board,
    rng: &mut dyn RandomSource,
    can_spawn_four: bool,
) -> Result<()> {
    if board.blank_count == 0 {
        return Err(Game2048Error::BoardFull);
    }

    let value = if can_spawn_four && rng.uniform_float() < FOUR_SPAWN_CHANCE {
        4
    } else {
        2
    };
    let target = rng.uniform_int(board.blank_count);

    let mut seen = 0;
    for cell in board.tiles.iter_mut() {
        if *cell != 0 {
            continue;
        }
        if seen == target {
            *cell = value;
            break;
        }
        seen += 1;
    }

    board.blank_count -= 1;
    if value > board.largest_tile {
        board.largest_tile = value;
    }
    board.debug_check_invariants();
    Ok(())
}
