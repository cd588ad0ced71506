//! Scenes
//!
//! The game is always in exactly one of three scenes. Each frame the manager
//! hands the current scene its input, updates it and renders it. A scene never
//! switches itself; it returns a `SceneCommand` and the manager applies it.

mod death;
mod manager;
mod playing;
mod start;

pub use death::DeathScene;
pub use manager::SceneManager;
pub use playing::PlayingScene;
pub use start::StartScene;

use macroquad::prelude::Vec2;

use crate::audio::AudioService;
use crate::error::SceneError;
use crate::input::FrameInput;
use crate::render::Renderer;

/// Where title and death messages are drawn
pub const MESSAGE_POSITION: Vec2 = Vec2::new(400.0, 200.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneId {
    Start,
    Playing,
    Death,
}

impl SceneId {
    pub fn name(&self) -> &'static str {
        match self {
            SceneId::Start => "start",
            SceneId::Playing => "playing",
            SceneId::Death => "death",
        }
    }

    pub fn from_name(name: &str) -> Result<SceneId, SceneError> {
        match name {
            "start" => Ok(SceneId::Start),
            "playing" => Ok(SceneId::Playing),
            "death" => Ok(SceneId::Death),
            other => Err(SceneError::UnknownScene(other.to_string())),
        }
    }
}

/// Requests a scene hands back to the manager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneCommand {
    Switch(SceneId),
    /// Rebuild Playing and Start, then show Start
    Restart,
}

pub trait Scene {
    /// React to this frame's input. Quit is handled by the manager.
    fn poll_events(&mut self, input: &FrameInput, audio: &mut dyn AudioService) -> Option<SceneCommand>;

    fn update(&mut self, _dt: f32, _audio: &mut dyn AudioService) -> Option<SceneCommand> {
        None
    }

    fn render(&self, renderer: &mut dyn Renderer);
}
