//! Scene manager
//!
//! Holds one instance of every scene and a pointer to the current one.
//! Restarting rebuilds the Playing and Start scenes from scratch, so nothing
//! from a finished round leaks into the next one.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{DeathScene, PlayingScene, Scene, SceneCommand, SceneId, StartScene};
use crate::audio::AudioService;
use crate::config::GameConfig;
use crate::error::SceneError;
use crate::input::FrameInput;
use crate::render::Renderer;

pub struct SceneManager {
    config: GameConfig,
    /// Seeds each rebuilt Playing scene
    rng: StdRng,
    start: StartScene,
    playing: PlayingScene,
    death: DeathScene,
    current: SceneId,
    quit: bool,
}

impl SceneManager {
    /// Builds every scene and shows Start
    pub fn new(config: GameConfig, seed: u64, audio: &mut dyn AudioService) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let playing = PlayingScene::new(&config, StdRng::seed_from_u64(rng.gen()), audio);
        let start = StartScene::new(&config, audio);

        Self {
            config,
            rng,
            start,
            playing,
            death: DeathScene::new(),
            current: SceneId::Start,
            quit: false,
        }
    }

    #[cfg(test)]
    pub fn current(&self) -> SceneId {
        self.current
    }

    #[cfg(test)]
    pub fn playing(&self) -> &PlayingScene {
        &self.playing
    }

    #[cfg(test)]
    pub fn playing_mut(&mut self) -> &mut PlayingScene {
        &mut self.playing
    }

    pub fn set_scene(&mut self, id: SceneId) {
        if id != self.current {
            log::info!("scene {} -> {}", self.current.name(), id.name());
        }
        self.current = id;
    }

    /// Name-based entry point for switching scenes; unknown names are an error
    #[allow(dead_code)]
    pub fn set_scene_by_name(&mut self, name: &str) -> Result<(), SceneError> {
        let id = SceneId::from_name(name)?;
        self.set_scene(id);
        Ok(())
    }

    /// Fresh Playing scene: new player, empty environment, score 0
    pub fn reset_playing(&mut self, audio: &mut dyn AudioService) {
        let rng = StdRng::seed_from_u64(self.rng.gen());
        self.playing = PlayingScene::new(&self.config, rng, audio);
    }

    /// Fresh Start scene; restarts the menu music
    pub fn reset_start(&mut self, audio: &mut dyn AudioService) {
        self.start = StartScene::new(&self.config, audio);
    }

    /// Replace the scene `id` with a freshly built one
    pub fn rebuild(&mut self, id: SceneId, audio: &mut dyn AudioService) {
        log::debug!("rebuilding {} scene", id.name());
        match id {
            SceneId::Start => self.reset_start(audio),
            SceneId::Playing => self.reset_playing(audio),
            SceneId::Death => self.death = DeathScene::new(),
        }
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    fn current_scene(&mut self) -> &mut dyn Scene {
        match self.current {
            SceneId::Start => &mut self.start,
            SceneId::Playing => &mut self.playing,
            SceneId::Death => &mut self.death,
        }
    }

    fn apply(&mut self, command: SceneCommand, audio: &mut dyn AudioService) {
        match command {
            SceneCommand::Switch(id) => self.set_scene(id),
            SceneCommand::Restart => {
                self.rebuild(SceneId::Playing, audio);
                self.rebuild(SceneId::Start, audio);
                self.set_scene(SceneId::Start);
            }
        }
    }

    /// Quit is honoured from any scene; everything else goes to the current one
    pub fn poll_events(&mut self, input: &FrameInput, audio: &mut dyn AudioService) {
        if input.quit {
            self.request_quit();
            return;
        }
        if let Some(command) = self.current_scene().poll_events(input, audio) {
            self.apply(command, audio);
        }
    }

    pub fn update(&mut self, dt: f32, audio: &mut dyn AudioService) {
        if let Some(command) = self.current_scene().update(dt, audio) {
            self.apply(command, audio);
        }
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        match self.current {
            SceneId::Start => self.start.render(renderer),
            SceneId::Playing => self.playing.render(renderer),
            SceneId::Death => {
                // The last frame of the round stays visible under the message
                self.playing.render(renderer);
                self.death.render(renderer);
            }
        }
        renderer.present();
    }

    /// One iteration of the game loop
    pub fn tick(
        &mut self,
        input: &FrameInput,
        dt: f32,
        audio: &mut dyn AudioService,
        renderer: &mut dyn Renderer,
    ) {
        self.poll_events(input, audio);
        if self.quit {
            return;
        }
        self.update(dt, audio);
        self.render(renderer);
    }
}
