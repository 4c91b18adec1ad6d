//! Game orchestration and persistence.

pub mod engine;
pub mod snapshot;

pub use engine::{Game, GameState};
pub use snapshot::GameSnapshot;
