//! World state and per-tick orchestration.
//!
//! Ties the player, the obstacle collection, scoring and the difficulty
//! ramp together. Wall-clock free: the runtime measures elapsed time and
//! passes seconds in.

use tracing::{debug, info};

use crate::core::enemy::Enemy;
use crate::core::player::Player;
use crate::types::{ENEMY_WIDTH, INITIAL_SCROLL_SPEED, SCORE_PER_SEC, SPEED_GROWTH_PER_SEC};

/// Complete game state.
#[derive(Debug, Clone)]
pub struct World {
    player: Player,
    enemies: Vec<Enemy>,
    width: u16,
    height: u16,
    score: f32,
    game_over: bool,
    scroll_speed: f32,
    spawned: u32,
}

impl World {
    /// Create a world for a `width x height` grid with the player resting
    /// on the floor row.
    pub fn new(width: u16, height: u16) -> Self {
        let floor = height.saturating_sub(1) as f32;
        Self {
            player: Player::new(floor),
            enemies: Vec::new(),
            width,
            height,
            score: 0.0,
            game_over: false,
            scroll_speed: INITIAL_SCROLL_SPEED,
            spawned: 0,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn score(&self) -> f32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn scroll_speed(&self) -> f32 {
        self.scroll_speed
    }

    /// Floor row, the resting position for the player and the obstacles.
    pub fn floor(&self) -> f32 {
        self.height.saturating_sub(1) as f32
    }

    /// Advance the simulation by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        let floor = self.floor();
        self.player.integrate(dt, floor);

        // Expiry, motion and collision in one ordered pass. retain_mut
        // compacts stably, so dropping an obstacle never skips the next one.
        let player = self.player;
        let baseline = self.height as f32;
        let mut hit = false;
        self.enemies.retain_mut(|enemy| {
            if enemy.is_expired(dt) {
                return false;
            }
            enemy.integrate(dt);
            if enemy.collides_with(&player, baseline) {
                hit = true;
            }
            true
        });

        if hit && !self.game_over {
            self.game_over = true;
            info!(score = self.score as u32, "collision, game over");
        }

        // Score freezes the tick the collision lands.
        if !self.game_over {
            self.score += dt * SCORE_PER_SEC;
        }

        // Difficulty ramp: compounds per tick, never decreases.
        self.scroll_speed += self.scroll_speed * SPEED_GROWTH_PER_SEC * dt;
    }

    /// Append an obstacle at the right edge, moving at the scroll speed
    /// captured right now.
    pub fn spawn_enemy(&mut self) {
        let x = self.width.saturating_sub(ENEMY_WIDTH + 1) as f32;
        self.enemies.push(Enemy::new(x, -self.scroll_speed));
        self.spawned += 1;
        debug!(n = self.spawned, x, speed = self.scroll_speed, "spawned obstacle");
    }

    /// Jump if grounded; airborne requests are ignored (no air jumps).
    pub fn request_jump(&mut self) {
        if self.player.is_grounded(self.floor()) {
            self.player.jump();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::JUMP_SPEED;

    #[test]
    fn spawn_places_obstacle_at_right_edge_with_captured_speed() {
        let mut world = World::new(80, 24);
        world.spawn_enemy();
        let e = &world.enemies()[0];
        assert_eq!(e.x(), 75.0);
        assert_eq!(e.x_speed(), -INITIAL_SCROLL_SPEED);
    }

    #[test]
    fn spawned_obstacles_keep_their_speed_as_the_world_ramps() {
        // Wide enough that nothing expires or collides during the test.
        let mut world = World::new(400, 24);
        world.spawn_enemy();
        world.tick(1.0);
        world.spawn_enemy();

        let speeds: Vec<f32> = world.enemies().iter().map(|e| e.x_speed()).collect();
        assert_eq!(speeds[0], -INITIAL_SCROLL_SPEED);
        assert!(speeds[1] < speeds[0], "newer obstacle should be faster");
    }

    #[test]
    fn scroll_speed_compounds_per_tick() {
        let mut world = World::new(80, 24);
        world.tick(1.0);
        assert!((world.scroll_speed() - 42.0).abs() < 1e-3);
        world.tick(1.0);
        assert!((world.scroll_speed() - 44.1).abs() < 1e-3);
    }

    #[test]
    fn expired_obstacles_are_compacted_without_skipping_survivors() {
        let mut world = World::new(80, 24);
        world.enemies = vec![
            Enemy::new(0.5, -40.0),
            Enemy::new(50.0, -40.0),
            Enemy::new(1.0, -40.0),
            Enemy::new(60.0, -40.0),
            Enemy::new(70.0, -40.0),
        ];

        // Displacement is 4 columns: the two low ones expire without moving.
        world.tick(0.1);

        let xs: Vec<f32> = world.enemies().iter().map(|e| e.x()).collect();
        assert_eq!(xs.len(), 3);
        assert!((xs[0] - 46.0).abs() < 1e-3);
        assert!((xs[1] - 56.0).abs() < 1e-3);
        assert!((xs[2] - 66.0).abs() < 1e-3);
        assert!(!world.game_over());
    }

    #[test]
    fn collision_sets_game_over_and_freezes_score() {
        let mut world = World::new(80, 24);
        world.tick(0.5);
        let before = world.score();

        world.enemies = vec![Enemy::new(4.0, -1.0)];
        world.tick(0.1);

        assert!(world.game_over());
        assert_eq!(world.score(), before);

        world.tick(1.0);
        assert_eq!(world.score(), before);
    }

    #[test]
    fn game_over_is_one_way() {
        let mut world = World::new(80, 24);
        world.enemies = vec![Enemy::new(4.0, -1.0)];
        world.tick(0.1);
        assert!(world.game_over());

        world.spawn_enemy();
        for _ in 0..20 {
            world.tick(0.1);
        }
        assert!(world.game_over());
    }

    #[test]
    fn jump_only_works_from_the_ground() {
        let mut world = World::new(80, 24);
        world.request_jump();
        assert_eq!(world.player().y_speed(), JUMP_SPEED);

        world.tick(0.05);
        let airborne = world.player().y_speed();
        world.request_jump();
        assert_eq!(world.player().y_speed(), airborne);
    }

    #[test]
    fn score_is_the_sum_of_tick_increments() {
        let mut world = World::new(80, 24);
        for _ in 0..10 {
            world.tick(0.1);
        }
        assert!((world.score() - 10.0).abs() < 1e-3);
    }
}
