//! GameView: maps `core::World` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::World;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::SCORE_ROW;

/// Compositor for the playfield, the score header and the game-over screen.
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    /// Render the current world into a fresh framebuffer.
    pub fn render(&self, world: &World) -> FrameBuffer {
        let mut fb = FrameBuffer::new(world.width(), world.height());
        self.render_into(world, &mut fb);
        fb
    }

    /// Render the current world into an existing framebuffer, clearing it
    /// first. The buffer keeps the grid size chosen at startup.
    pub fn render_into(&self, world: &World, fb: &mut FrameBuffer) {
        fb.clear();

        if world.game_over() {
            let banner = CellStyle {
                fg: Rgb::new(230, 90, 80),
                bold: true,
            };
            fb.put_str(
                0,
                0,
                &format!("Game Over :( Your score: {}.", world.score() as u32),
                banner,
            );
            fb.put_str(0, 1, "Press q to quit", CellStyle::default());
            return;
        }

        let enemy_style = CellStyle {
            fg: Rgb::new(220, 80, 80),
            bold: false,
        };
        let player_style = CellStyle {
            fg: Rgb::new(240, 210, 90),
            bold: true,
        };

        let floor_row = world.height().saturating_sub(1);
        for enemy in world.enemies() {
            enemy
                .sprite()
                .render(fb, enemy.x() as u16, floor_row, enemy_style);
        }
        world
            .player()
            .sprite()
            .render(fb, 0, world.player().y() as u16, player_style);

        // Score readout, stamped over whatever the sprites left in the row.
        fb.put_str(
            0,
            SCORE_ROW,
            &format!("Score: {}", world.score() as u32),
            CellStyle::default(),
        );
    }
}
