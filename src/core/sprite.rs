//! Rectangular glyph shapes.

use crate::term::fb::{CellStyle, FrameBuffer};

/// An immutable rectangular block of a single glyph.
///
/// A sprite carries no position of its own; the owning body supplies one at
/// render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    width: u16,
    height: u16,
    glyph: char,
}

impl Sprite {
    pub const fn new(width: u16, height: u16, glyph: char) -> Self {
        Self {
            width,
            height,
            glyph,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn glyph(&self) -> char {
        self.glyph
    }

    /// Stamp the block into the framebuffer with its bottom-left cell at
    /// `(x, y)`, growing upward and rightward. Cells that fall outside the
    /// grid are dropped.
    pub fn render(&self, fb: &mut FrameBuffer, x: u16, y: u16, style: CellStyle) {
        for dx in 0..self.width {
            for dy in 0..self.height {
                if let Some(row) = y.checked_sub(dy) {
                    fb.put_char(x.saturating_add(dx), row, self.glyph, style);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_stamps_bottom_left_anchored_block() {
        let mut fb = FrameBuffer::new(6, 6);
        Sprite::new(2, 3, '#').render(&mut fb, 1, 4, CellStyle::default());

        // Columns 1-2, rows 4 up to 2.
        assert_eq!(fb.get(1, 4).unwrap().ch, '#');
        assert_eq!(fb.get(2, 4).unwrap().ch, '#');
        assert_eq!(fb.get(1, 2).unwrap().ch, '#');
        assert_eq!(fb.get(2, 2).unwrap().ch, '#');

        // Nothing outside the block.
        assert_eq!(fb.get(0, 4).unwrap().ch, ' ');
        assert_eq!(fb.get(3, 4).unwrap().ch, ' ');
        assert_eq!(fb.get(1, 5).unwrap().ch, ' ');
        assert_eq!(fb.get(1, 1).unwrap().ch, ' ');
    }

    #[test]
    fn render_drops_rows_above_the_grid() {
        let mut fb = FrameBuffer::new(4, 2);
        Sprite::new(1, 5, '#').render(&mut fb, 0, 1, CellStyle::default());

        assert_eq!(fb.get(0, 1).unwrap().ch, '#');
        assert_eq!(fb.get(0, 0).unwrap().ch, '#');
    }
}
