//! Shared tuning constants and input actions.
//!
//! Pure data with no dependencies on rendering or I/O.

/// Player sprite: a tall block pinned to the left edge of the grid.
pub const PLAYER_WIDTH: u16 = 4;
pub const PLAYER_HEIGHT: u16 = 5;
pub const PLAYER_GLYPH: char = '*';

/// Obstacle sprite: a low block that scrolls in from the right edge.
pub const ENEMY_WIDTH: u16 = 4;
pub const ENEMY_HEIGHT: u16 = 2;
pub const ENEMY_GLYPH: char = 'X';

/// Vertical physics, in grid rows per second.
pub const JUMP_SPEED: f32 = 20.0;
pub const GRAVITY: f32 = 30.0;

/// Horizontal scroll, in grid columns per second. The speed grows by
/// `SPEED_GROWTH_PER_SEC` of itself each second, compounded per tick.
pub const INITIAL_SCROLL_SPEED: f32 = 40.0;
pub const SPEED_GROWTH_PER_SEC: f32 = 0.05;

/// Survival score rate, points per second. The HUD shows the integer part.
pub const SCORE_PER_SEC: f32 = 10.0;

/// Message cadence in milliseconds: ~30 ticks per second, one obstacle
/// every four seconds.
pub const TICK_MS: u64 = 33;
pub const SPAWN_INTERVAL_MS: u64 = 4_000;

/// Row the score readout is written into.
pub const SCORE_ROW: u16 = 1;

/// Game actions a key press can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Jump,
    Quit,
}
