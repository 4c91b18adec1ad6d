//! # slide-lama
//!
//! Rules engine for a turn-based, multi-player cube-sliding puzzle.
//!
//! Numbered cubes (1..=6) fill a rectangular field. Players take turns
//! launching a fresh cube from the border ring: the cube slides its whole
//! row or column into the field, gravity pulls cubes down, and every line
//! of three equal cubes is removed for points. The first player whose
//! score reaches the target wins.
//!
//! ## Design Principles
//!
//! 1. **Total commands**: Only construction and snapshot restore can fail.
//!    Every in-game command reports rejection through its return value.
//!
//! 2. **Injected randomness**: All randomness flows through a
//!    [`RandomSource`]. Seeded [`GameRng`] games are fully reproducible.
//!
//! 3. **N-Player**: Any roster size from 1 to 255, round-robin turns.
//!
//! ## Grid
//!
//! The internal grid is one row taller and two columns wider than the
//! playable field: row 0 is the top border, columns 0 and C-1 are the side
//! borders. Corners never hold a cube. There is no bottom border.
//!
//! ## Modules
//!
//! - `core`: Positions, cubes, players, RNG, configuration
//! - `board`: The cell grid and border sliding
//! - `mechanics`: Gravity and combo detection
//! - `active`: The player-controlled cube
//! - `players`: Turn rotation, scores, win check
//! - `game`: The orchestrator and snapshots
//! - `scores`: High-score tables
//!
//! ```
//! use slide_lama::{Game, GameRng, GameState};
//!
//! let mut game = Game::new(6, 6, 2, 200, GameRng::new(42)).unwrap();
//! game.add_cube();
//! if game.can_commit() {
//!     game.commit_cube();
//!     game.settle_once();
//! }
//! assert!(matches!(game.game_state(), GameState::Playing | GameState::Win));
//! ```

pub mod active;
pub mod board;
pub mod core;
pub mod error;
pub mod game;
pub mod mechanics;
pub mod players;
pub mod scores;

// Re-export commonly used types
pub use crate::core::{
    Cube, Direction, GameConfig, GameRng, GameRngState, GameSettings, Player, PlayerId, Position, RandomSource,
};

pub use crate::error::{ConfigError, SnapshotError};

pub use crate::board::Board;
pub use crate::mechanics::{Combo, Orientation};
pub use crate::active::ActiveCube;
pub use crate::players::PlayerManager;
pub use crate::game::{Game, GameSnapshot, GameState};
pub use crate::scores::{MemoryScoreStore, ScoreEntry, ScoreStore};
