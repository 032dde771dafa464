use serde::{Deserialize, Serialize};

use crate::game::board::Board;
use crate::game::direction::{line_indices, Direction};

/// What a single move attempt did to the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// True if any cell changed value.
    pub changed: bool,
    /// True the first time the largest tile reaches the target; set by
    /// [`GameSession::apply_move`](crate::game::session::GameSession::apply_move),
    /// always false from the board-level function.
    pub reached_target: bool,
    /// Sum of the merge results produced by this move.
    pub points_gained: u32,
}

/// Shifts the grid in `direction`: a merge pass followed by a compaction
/// pass on every row (Left/Right) or column (Up/Down), each scanned from
/// the leading edge inward.
///
/// Bumps `move_count` when the grid changed. Spawning the follow-up tile is
/// the caller's job (see `GameSession::apply_move`), so this function stays
/// free of randomness.
pub fn apply_move(board: &mut Board, direction: Direction) -> MoveOutcome {
    let size = board.size;
    let mut changed = false;
    let mut points_gained = 0;

    for line in 0..size {
        let idx = line_indices(direction, line, size);
        points_gained += merge_line(board, &idx, &mut changed);
        compact_line(board, &idx, &mut changed);
    }

    if changed {
        board.move_count += 1;
    }
    board.debug_check_invariants();

    MoveOutcome {
        changed,
        reached_target: false,
        points_gained,
    }
}

/// Merge pass over one line. `idx` lists the line's flat indices starting
/// at the leading edge. For each occupied cell the next occupied cell
/// further from the edge is found; equal values combine into the nearer
/// cell. The scan resumes past the emptied cell, so a merge result can
/// never merge again within the same move.
fn merge_line(board: &mut Board, idx: &[usize], changed: &mut bool) -> u32 {
    let mut points = 0;
    let mut current = 0;

    while current < idx.len() {
        if board.tiles[idx[current]] == 0 {
            current += 1;
            continue;
        }

        // Next occupied cell further from the edge, skipping blanks.
        let mut next = current + 1;
        while next < idx.len() && board.tiles[idx[next]] == 0 {
            next += 1;
        }
        if next == idx.len() {
            break;
        }

        if board.tiles[idx[current]] == board.tiles[idx[next]] {
            let merged = board.tiles[idx[current]] * 2;
            board.tiles[idx[current]] = merged;
            board.tiles[idx[next]] = 0;
            board.score += merged;
            board.blank_count += 1;
            if merged > board.largest_tile {
                board.largest_tile = merged;
            }
            points += merged;
            *changed = true;
            // The emptied cell is spent; the merged cell is done for this move.
            current = next + 1;
        } else {
            current = next;
        }
    }

    points
}

/// Compaction pass over one line: slides every nonzero value toward the
/// leading edge, preserving relative order. Runs even when no merge
/// happened, since sliding alone counts as movement.
fn compact_line(board: &mut Board, idx: &[usize], changed: &mut bool) {
    let mut write = 0;
    for read in 0..idx.len() {
        let value = board.tiles[idx[read]];
        if value == 0 {
            continue;
        }
        if read != write {
            board.tiles[idx[write]] = value;
            board.tiles[idx[read]] = 0;
            *changed = true;
        }
        write += 1;
    }
}
