//! Player roster: turn order, scores, win check.

pub mod manager;

pub use manager::PlayerManager;
