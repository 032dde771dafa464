//! # 2048 Board Engine Library
//!
//! The board transition engine for the classic 2048 sliding-tile puzzle:
//! directional merge and compaction, tile spawning, score and largest-tile
//! bookkeeping, and terminal-state detection. Rendering, input plumbing and
//! leaderboard persistence are external collaborators that only consume the
//! engine's outputs.
//!
//! ## Usage
//!
//! ```rust
//! use game2048::game::{Direction, GameSession};
//!
//! let mut session = GameSession::seeded(4, 42);
//! let outcome = session.apply_move(Direction::Left).unwrap();
//! println!("{} (+{} points)", session.board(), outcome.points_gained);
//! ```

/// Core board engine: grid, moves, spawning, session lifecycle
pub mod game;

/// Logging setup for binaries
pub mod logging;

pub use game::*;

/// Main error type for the 2048 engine
#[derive(Debug, thiserror::Error)]
pub enum Game2048Error {
    /// Spawning was requested with no blank cell left; a caller
    /// programming error, never a playable state.
    #[error("cannot spawn a tile: the board is full")]
    BoardFull,

    /// A move was applied to a session that is already over.
    #[error("cannot apply a move: the session is over")]
    GameOver,
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Game2048Error>;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
