use serde::{Deserialize, Serialize};
use std::fmt;

use crate::game::apply_move::{apply_move, MoveOutcome};
use crate::game::board::{Board, DEFAULT_SIZE, TARGET_TILE};
use crate::game::can_move::can_move;
use crate::game::direction::Direction;
use crate::game::random_source::{RandomSource, SeededRandom, ThreadRandom};
use crate::game::spawn_tile::spawn_tile;
use crate::{Game2048Error, Result};

/// Lifecycle of one session: `Active` until no move remains, then `Over`
/// until an explicit reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Active,
    Over,
}

/// The triple a completed session hands to the leaderboard collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: u32,
    pub largest_tile: u32,
    pub score: u32,
}

impl fmt::Display for GameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.moves, self.largest_tile, self.score)
    }
}

/// One complete game from reset to game-over.
///
/// Owns the board and the injected [`RandomSource`]; callers feed it one
/// direction at a time and react to the returned [`MoveOutcome`] and to
/// [`GameSession::is_over`]. The session itself performs no I/O.
pub struct GameSession {
    board: Board,
    rng: Box<dyn RandomSource>,
    status: GameStatus,
    has_reached_target: bool,
}

impl GameSession {
    /// New 4x4 session on the thread RNG, with the two opening spawns done.
    pub fn new() -> Self {
        Self::with_random_source(DEFAULT_SIZE, Box::new(ThreadRandom))
    }

    /// New session with a deterministic seed, for reproducible games.
    pub fn seeded(size: usize, seed: u64) -> Self {
        Self::with_random_source(size, Box::new(SeededRandom::new(seed)))
    }

    /// New session over any conforming randomness source.
    pub fn with_random_source(size: usize, rng: Box<dyn RandomSource>) -> Self {
        let mut session = GameSession {
            board: Board::new(size),
            rng,
            status: GameStatus::Active,
            has_reached_target: false,
        };
        session.opening_spawns();
        log::debug!("session started on a {size}x{size} board");
        session
    }

    /// Adopts an existing position, e.g. one seeded through
    /// [`Board::from_tiles`]. The target latch is primed when the position
    /// already contains the target tile, so it is never reported twice.
    pub fn from_board(board: Board, rng: Box<dyn RandomSource>) -> Self {
        let has_reached_target = board.largest_tile() >= TARGET_TILE;
        let status = if can_move(&board) {
            GameStatus::Active
        } else {
            GameStatus::Over
        };
        GameSession {
            board,
            rng,
            status,
            has_reached_target,
        }
    }

    /// The original two-tile opening: the first spawn is forced to 2, the
    /// second rolls the normal 2-or-4 distribution.
    fn opening_spawns(&mut self) {
        spawn_tile(&mut self.board, self.rng.as_mut(), false)
            .expect("a fresh board always has blank cells");
        spawn_tile(&mut self.board, self.rng.as_mut(), true)
            .expect("a fresh board always has blank cells");
    }

    /// Applies one directional move.
    ///
    /// When the grid changed, one new tile is spawned and the session
    /// transitions to `Over` if no further move exists. `reached_target` is
    /// reported exactly once, the first time the largest tile hits
    /// [`TARGET_TILE`].
    ///
    /// # Errors
    ///
    /// Returns [`Game2048Error::GameOver`] when the session is already over;
    /// callers must reset before moving again.
    pub fn apply_move(&mut self, direction: Direction) -> Result<MoveOutcome> {
        if self.status == GameStatus::Over {
            return Err(Game2048Error::GameOver);
        }

        let mut outcome = apply_move(&mut self.board, direction);
        if !outcome.changed {
            return Ok(outcome);
        }

        spawn_tile(&mut self.board, self.rng.as_mut(), true)?;

        if !self.has_reached_target && self.board.largest_tile() >= TARGET_TILE {
            self.has_reached_target = true;
            outcome.reached_target = true;
            log::info!(
                "reached {TARGET_TILE} after {} moves",
                self.board.move_count()
            );
        }

        if !can_move(&self.board) {
            self.status = GameStatus::Over;
            log::info!("no moves left, final record: {}", self.record());
        }

        Ok(outcome)
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Over
    }

    /// True while at least one legal move exists.
    pub fn can_move(&self) -> bool {
        can_move(&self.board)
    }

    /// The `(moves, largest_tile, score)` triple the leaderboard records.
    pub fn record(&self) -> GameRecord {
        GameRecord {
            moves: self.board.move_count(),
            largest_tile: self.board.largest_tile(),
            score: self.board.score(),
        }
    }

    /// Discards the current board and starts a fresh session with the two
    /// opening spawns, keeping the injected randomness source.
    pub fn reset(&mut self) {
        self.board = Board::new(self.board.size());
        self.status = GameStatus::Active;
        self.has_reached_target = false;
        self.opening_spawns();
        log::debug!("session reset");
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("status", &self.status)
            .field("record", &self.record())
            .field("blank_count", &self.board.blank_count())
            .finish()
    }
}
