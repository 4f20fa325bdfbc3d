//! Player body: vertical-only kinematics over a sprite.

use crate::core::sprite::Sprite;
use crate::types::{GRAVITY, JUMP_SPEED, PLAYER_GLYPH, PLAYER_HEIGHT, PLAYER_WIDTH};

/// The player: a sprite pinned to column 0 that only moves vertically.
///
/// `y` is a fractional grid row measured from the top of the grid; the
/// floor is row `height - 1`. Positive velocity moves the sprite upward,
/// toward smaller row indices.
#[derive(Debug, Clone, Copy)]
pub struct Player {
    sprite: Sprite,
    y: f32,
    y_speed: f32,
    jump_speed: f32,
    gravity: f32,
}

impl Player {
    /// Create the player resting on the floor row.
    pub fn new(floor: f32) -> Self {
        Self {
            sprite: Sprite::new(PLAYER_WIDTH, PLAYER_HEIGHT, PLAYER_GLYPH),
            y: floor,
            y_speed: 0.0,
            jump_speed: JUMP_SPEED,
            gravity: GRAVITY,
        }
    }

    pub fn sprite(&self) -> Sprite {
        self.sprite
    }

    /// Current row, fractional.
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Current vertical velocity in rows per second, positive upward.
    pub fn y_speed(&self) -> f32 {
        self.y_speed
    }

    /// Advance the body by `dt` seconds and clamp to the floor.
    ///
    /// Gravity pulls on the velocity only while airborne; the same term
    /// decelerates ascent and accelerates descent. Landing does not zero
    /// the velocity: the clamp re-grounds the body every tick and the next
    /// jump overwrites whatever is left.
    pub fn integrate(&mut self, dt: f32, floor: f32) {
        self.y -= self.y_speed * dt;
        self.y = self.y.min(floor);
        if !self.is_grounded(floor) {
            self.y_speed -= self.gravity * dt;
        }
    }

    /// Exact-equality ground test; the clamp in `integrate` forces `y`
    /// onto the floor row exactly, so no epsilon is involved.
    pub fn is_grounded(&self, floor: f32) -> bool {
        self.y == floor
    }

    /// Set the velocity to the jump impulse. The world gates this to
    /// grounded-only; the body itself does not care.
    pub fn jump(&mut self) {
        self.y_speed = self.jump_speed;
    }
}
