pub mod apply_move;
pub mod board;
pub mod can_move;
pub mod direction;
pub mod random_source;
pub mod session;
pub mod spawn_tile;

pub use apply_move::{apply_move, MoveOutcome};
pub use board::{Board, DEFAULT_SIZE, TARGET_TILE};
pub use can_move::can_move;
pub use direction::Direction;
pub use random_source::{RandomSource, SeededRandom, ThreadRandom};
pub use session::{GameRecord, GameSession, GameStatus};
pub use spawn_tile::{spawn_tile, FOUR_SPAWN_CHANCE};
