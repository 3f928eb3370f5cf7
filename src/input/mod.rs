//! Keyboard and pointer input, translated into engine commands

pub mod gesture;
pub mod handler;

pub use gesture::{Gesture, GestureTracker, resolve_direction};
pub use handler::{CELL_COLUMNS, InputAction, InputHandler};
