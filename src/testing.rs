//! Recording doubles for the audio and render collaborators

use macroquad::prelude::{Color, Vec2};

use crate::audio::{AudioService, SoundId};
use crate::game::Visual;
use crate::render::{FontStyle, Renderer};

#[derive(Debug, Clone, PartialEq)]
pub enum AudioCall {
    Play { sound: SoundId, looped: bool },
    Stop { sound: SoundId, fade_ms: u32 },
    SetVolume { sound: SoundId, level: f32 },
}

#[derive(Debug, Default)]
pub struct RecordingAudio {
    pub calls: Vec<AudioCall>,
}

impl RecordingAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plays(&self) -> Vec<(SoundId, bool)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                AudioCall::Play { sound, looped } => Some((*sound, *looped)),
                _ => None,
            })
            .collect()
    }

    pub fn stops(&self) -> Vec<SoundId> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                AudioCall::Stop { sound, .. } => Some(*sound),
                _ => None,
            })
            .collect()
    }

    pub fn volume_of(&self, sound: SoundId) -> Option<f32> {
        self.calls.iter().rev().find_map(|c| match c {
            AudioCall::SetVolume { sound: s, level } if *s == sound => Some(*level),
            _ => None,
        })
    }

    pub fn reset(&mut self) {
        self.calls.clear();
    }
}

impl AudioService for RecordingAudio {
    fn play(&mut self, sound: SoundId, looped: bool) {
        self.calls.push(AudioCall::Play { sound, looped });
    }

    fn stop(&mut self, sound: SoundId, fade_ms: u32) {
        self.calls.push(AudioCall::Stop { sound, fade_ms });
    }

    fn set_volume(&mut self, sound: SoundId, level: f32) {
        self.calls.push(AudioCall::SetVolume { sound, level });
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Color),
    Sprite { visual: Visual, position: Vec2 },
    Text { text: String, position: Vec2, style: FontStyle },
    Present,
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<DrawCall>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn sprite_count(&self, visual: Visual) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Sprite { visual: v, .. } if *v == visual))
            .count()
    }

    pub fn reset(&mut self) {
        self.calls.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self, color: Color) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn draw(&mut self, visual: Visual, position: Vec2) {
        self.calls.push(DrawCall::Sprite { visual, position });
    }

    fn draw_text(&mut self, text: &str, position: Vec2, _color: Color, style: FontStyle) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            position,
            style,
        });
    }

    fn present(&mut self) {
        self.calls.push(DrawCall::Present);
    }
}
