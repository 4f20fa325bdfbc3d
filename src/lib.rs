//! TUI Dash: a terminal side-scroller.
//!
//! A player sprite jumps over obstacles that scroll in from the right edge
//! of the terminal; score accrues with survival time and the scroll speed
//! ramps up until a collision ends the run.
//!
//! `core` holds the pure simulation, `term` the framebuffer compositor and
//! crossterm flush path, `input` the key mapping, and `runtime` the message
//! pump that drives everything from timer and input threads.

pub mod core;
pub mod input;
pub mod runtime;
pub mod term;
pub mod types;
