//! Title screen

use macroquad::prelude::{BLACK, WHITE};

use super::{Scene, SceneCommand, SceneId, MESSAGE_POSITION};
use crate::audio::{AudioService, SoundId};
use crate::config::GameConfig;
use crate::input::FrameInput;
use crate::render::{FontStyle, Renderer};

pub const TITLE_TEXT: &str = ".Flabod. Press spac 2b egin";

pub struct StartScene;

impl StartScene {
    /// Starts the menu music (once, not looped)
    pub fn new(config: &GameConfig, audio: &mut dyn AudioService) -> Self {
        audio.set_volume(SoundId::MenuMusic, SoundId::MenuMusic.volume(&config.audio));
        audio.play(SoundId::MenuMusic, false);
        StartScene
    }
}

impl Scene for StartScene {
    fn poll_events(&mut self, input: &FrameInput, audio: &mut dyn AudioService) -> Option<SceneCommand> {
        if input.jump {
            audio.stop(SoundId::MenuMusic, 0);
            return Some(SceneCommand::Switch(SceneId::Playing));
        }
        None
    }

    fn render(&self, renderer: &mut dyn Renderer) {
        renderer.clear(BLACK);
        renderer.draw_text(TITLE_TEXT, MESSAGE_POSITION, WHITE, FontStyle::Title);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{DrawCall, RecordingAudio, RecordingRenderer};

    #[test]
    fn test_construction_plays_menu_music() {
        let mut audio = RecordingAudio::new();
        StartScene::new(&GameConfig::default(), &mut audio);
        assert_eq!(audio.plays(), vec![(SoundId::MenuMusic, false)]);
        assert_eq!(audio.volume_of(SoundId::MenuMusic), Some(0.2));
    }

    #[test]
    fn test_jump_switches_to_playing() {
        let mut audio = RecordingAudio::new();
        let mut scene = StartScene::new(&GameConfig::default(), &mut audio);
        audio.reset();

        assert_eq!(scene.poll_events(&FrameInput::default(), &mut audio), None);
        assert_eq!(scene.poll_events(&FrameInput::restart(), &mut audio), None);
        assert!(audio.calls.is_empty());

        let command = scene.poll_events(&FrameInput::jump(), &mut audio);
        assert_eq!(command, Some(SceneCommand::Switch(SceneId::Playing)));
        assert_eq!(audio.stops(), vec![SoundId::MenuMusic]);
    }

    #[test]
    fn test_render_title() {
        let mut audio = RecordingAudio::new();
        let scene = StartScene::new(&GameConfig::default(), &mut audio);
        let mut renderer = RecordingRenderer::new();
        scene.render(&mut renderer);

        assert_eq!(renderer.calls[0], DrawCall::Clear(BLACK));
        assert_eq!(
            renderer.calls[1],
            DrawCall::Text {
                text: TITLE_TEXT.to_string(),
                position: MESSAGE_POSITION,
                style: FontStyle::Title,
            }
        );
    }
}
