//! Obstacle body: horizontal kinematics, expiry, collision.

use crate::core::player::Player;
use crate::core::sprite::Sprite;
use crate::types::{ENEMY_GLYPH, ENEMY_HEIGHT, ENEMY_WIDTH};

/// An obstacle scrolling leftward along the floor.
///
/// `x` is the fractional grid column of the sprite's left edge. `x_speed`
/// is negative (leftward) and frozen at spawn time; later difficulty
/// ramping does not re-accelerate obstacles already in flight.
#[derive(Debug, Clone, Copy)]
pub struct Enemy {
    sprite: Sprite,
    x: f32,
    x_speed: f32,
}

impl Enemy {
    pub fn new(x: f32, x_speed: f32) -> Self {
        Self {
            sprite: Sprite::new(ENEMY_WIDTH, ENEMY_HEIGHT, ENEMY_GLYPH),
            x,
            x_speed,
        }
    }

    pub fn sprite(&self) -> Sprite {
        self.sprite
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn x_speed(&self) -> f32 {
        self.x_speed
    }

    /// Advance the body by `dt` seconds.
    pub fn integrate(&mut self, dt: f32) {
        self.x += self.x_speed * dt;
    }

    /// True once this tick's displacement would carry the left edge past
    /// column zero. The world checks this before integrating, so an
    /// expired obstacle is dropped without moving.
    pub fn is_expired(&self, dt: f32) -> bool {
        self.x < self.x_speed.abs() * dt
    }

    /// Simplified AABB test against the fixed-origin player.
    ///
    /// Horizontal: the obstacle's left edge has reached the player's right
    /// edge (the player starts at column 0 and never moves sideways).
    /// Vertical: the player's row is at or below the top of the obstacle's
    /// footprint, which hangs from `baseline` (the grid height).
    pub fn collides_with(&self, player: &Player, baseline: f32) -> bool {
        self.x <= player.sprite().width() as f32
            && player.y() >= baseline - self.sprite.height() as f32
    }
}
