//! Board mechanics: gravity and combo detection.
//!
//! Both are plain functions over a [`Board`](crate::board::Board); the game
//! alternates them until the field stops changing.

pub mod combo;
pub mod physics;

pub use combo::{Combo, Orientation};
pub use physics::{drop_all, drop_column, force_drop_all};
