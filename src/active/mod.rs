//! Player-controlled cube: spawning, moving and committing it.

pub mod manager;

pub use manager::ActiveCube;
