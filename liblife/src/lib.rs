pub mod cell;
pub mod grid;
pub mod render;
pub mod rule;
pub mod sim;

pub use cell::Cell;
pub use grid::Grid;
pub use rule::{Preset, Rule};
