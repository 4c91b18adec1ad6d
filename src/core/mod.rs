//! Core value types: positions, cubes, players, RNG, configuration.
//!
//! Everything here is plain data with no knowledge of the board or the turn
//! rules. The subsystems build on these types.

pub mod config;
pub mod cube;
pub mod player;
pub mod position;
pub mod rng;

pub use config::{
    GameConfig, GameSettings, COMBO_MULTIPLIER, FORCE_DROP_ITERATIONS, MAX_CUBE_VALUE, MAX_ITERATIONS,
    MIN_CUBE_VALUE, TURN_PENALTY,
};
pub use cube::Cube;
pub use player::{Player, PlayerId, PlayerMap};
pub use position::{Direction, Position};
pub use rng::{GameRng, GameRngState, RandomSource};
