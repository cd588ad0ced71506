//! Death screen
//!
//! Drawn over the frozen last frame of the round; it never clears the screen.

use macroquad::prelude::WHITE;

use super::{Scene, SceneCommand, MESSAGE_POSITION};
use crate::audio::AudioService;
use crate::input::FrameInput;
use crate::render::{FontStyle, Renderer};

pub const DEATH_TEXT: &str = "ded. R 2 agen";

#[derive(Debug, Default)]
pub struct DeathScene;

impl DeathScene {
    pub fn new() -> Self {
        DeathScene
    }
}

impl Scene for DeathScene {
    fn poll_events(&mut self, input: &FrameInput, _audio: &mut dyn AudioService) -> Option<SceneCommand> {
        input.restart.then_some(SceneCommand::Restart)
    }

    fn render(&self, renderer: &mut dyn Renderer) {
        renderer.draw_text(DEATH_TEXT, MESSAGE_POSITION, WHITE, FontStyle::Title);
    }
}
