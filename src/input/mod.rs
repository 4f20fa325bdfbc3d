//! Keyboard input layer.

pub mod map;

pub use map::map_key;
