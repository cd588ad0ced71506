//! Render collaborator
//!
//! Scenes describe a frame through `Renderer`; `MacroquadRenderer` draws it
//! to the window. Draw order is call order, later calls on top.

use macroquad::prelude::*;

use crate::assets::SpriteSheet;
use crate::game::player::PLAYER_SPRITE_SIZE;
use crate::game::{Visual, BLOCK_SIZE};

/// Text size for both fonts
pub const FONT_SIZE: u16 = 36;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    /// Title and death messages
    Title,
    /// Bold score counter
    Score,
}

pub trait Renderer {
    fn clear(&mut self, color: Color);
    /// Draw the sprite for `visual` with its top-left corner at `position`
    fn draw(&mut self, visual: Visual, position: Vec2);
    /// Draw text with its top-left corner at `position`
    fn draw_text(&mut self, text: &str, position: Vec2, color: Color, style: FontStyle);
    /// End of frame
    fn present(&mut self);
}

/// Draw size of each visual
pub fn visual_size(visual: Visual) -> Vec2 {
    match visual {
        Visual::Player => PLAYER_SPRITE_SIZE,
        Visual::Block => Vec2::splat(BLOCK_SIZE),
    }
}

pub struct MacroquadRenderer {
    sprites: SpriteSheet,
}

impl MacroquadRenderer {
    pub fn new(sprites: SpriteSheet) -> Self {
        Self { sprites }
    }
}

impl Renderer for MacroquadRenderer {
    fn clear(&mut self, color: Color) {
        clear_background(color);
    }

    fn draw(&mut self, visual: Visual, position: Vec2) {
        let texture = match visual {
            Visual::Player => &self.sprites.player,
            Visual::Block => &self.sprites.block,
        };
        draw_texture_ex(
            texture,
            position.x,
            position.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(visual_size(visual)),
                ..Default::default()
            },
        );
    }

    fn draw_text(&mut self, text: &str, position: Vec2, color: Color, style: FontStyle) {
        // macroquad positions text by baseline
        let dims = measure_text(text, None, FONT_SIZE, 1.0);
        let baseline = position.y + dims.offset_y;
        macroquad::text::draw_text(text, position.x, baseline, FONT_SIZE as f32, color);
        if style == FontStyle::Score {
            macroquad::text::draw_text(text, position.x + 1.0, baseline, FONT_SIZE as f32, color);
        }
    }

    fn present(&mut self) {
        // The frame is flipped by next_frame() in the main loop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visual_sizes() {
        assert_eq!(visual_size(Visual::Player), Vec2::new(50.0, 35.0));
        assert_eq!(visual_size(Visual::Block), Vec2::new(48.0, 48.0));
    }
}
