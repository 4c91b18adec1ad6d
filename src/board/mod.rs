//! The cube grid and the border-sliding rules that act on it.

pub mod grid;
pub mod movement;

pub use grid::Board;
pub use movement::{can_slide, slide};
