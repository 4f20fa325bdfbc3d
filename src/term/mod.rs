//! Terminal rendering layer.
//!
//! A small, game-oriented pipeline: the world is composited into a plain
//! framebuffer, and the framebuffer is flushed to the terminal with a diff
//! pass. Keeps `core` deterministic and the compositor unit-testable.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::GameView;
pub use renderer::TerminalRenderer;
