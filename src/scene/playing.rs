//! The round in progress
//!
//! Owns the player, the environment and the displayed score. Each update
//! integrates the player, advances the gates, steps the score display, keeps
//! the music band in line with the score tracker, and checks for death.

use macroquad::prelude::{Vec2, BLACK, WHITE};
use rand::rngs::StdRng;

use super::{Scene, SceneCommand, SceneId};
use crate::audio::{AudioService, SoundId};
use crate::config::GameConfig;
use crate::game::{player_collides, Environment, Player, Score};
use crate::input::FrameInput;
use crate::render::{FontStyle, Renderer};

/// Fade applied when switching music tracks
const MUSIC_FADE_MS: u32 = 1;

/// Which in-game track should be playing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MusicBand {
    #[default]
    Silent,
    Easy,
    Intense,
}

impl MusicBand {
    /// Silent at 0, easy up to and including `intense_threshold`, intense above
    pub fn for_score(score: u32, intense_threshold: u32) -> MusicBand {
        match score {
            0 => MusicBand::Silent,
            s if s <= intense_threshold => MusicBand::Easy,
            _ => MusicBand::Intense,
        }
    }

    pub fn track(&self) -> Option<SoundId> {
        match self {
            MusicBand::Silent => None,
            MusicBand::Easy => Some(SoundId::EasyMusic),
            MusicBand::Intense => Some(SoundId::IntenseMusic),
        }
    }
}

pub struct PlayingScene {
    player: Player,
    environment: Environment,
    score: Score,
    music: MusicBand,
    screen_height: f32,
    ceiling_y: f32,
    intense_threshold: u32,
}

impl PlayingScene {
    pub fn new(config: &GameConfig, rng: StdRng, audio: &mut dyn AudioService) -> Self {
        for sound in [SoundId::EasyMusic, SoundId::IntenseMusic, SoundId::Flap, SoundId::Death] {
            audio.set_volume(sound, sound.volume(&config.audio));
        }

        Self {
            player: Player::from_config(config),
            environment: Environment::new(config, rng),
            score: Score::new(Vec2::new(config.screen_width / 2.0, 50.0)),
            music: MusicBand::Silent,
            screen_height: config.screen_height,
            ceiling_y: config.ceiling_y,
            intense_threshold: config.audio.intense_threshold,
        }
    }

    #[cfg(test)]
    pub fn player(&self) -> &Player {
        &self.player
    }

    #[cfg(test)]
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    #[cfg(test)]
    pub fn score(&self) -> &Score {
        &self.score
    }

    #[cfg(test)]
    pub fn music(&self) -> MusicBand {
        self.music
    }

    #[cfg(test)]
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    #[cfg(test)]
    pub fn environment_mut(&mut self) -> &mut Environment {
        &mut self.environment
    }

    fn stop_music(&mut self, audio: &mut dyn AudioService) {
        audio.stop(SoundId::EasyMusic, MUSIC_FADE_MS);
        audio.stop(SoundId::IntenseMusic, MUSIC_FADE_MS);
    }

    fn update_music(&mut self, audio: &mut dyn AudioService) {
        let band = MusicBand::for_score(self.environment.score_tracker(), self.intense_threshold);
        if band == self.music {
            return;
        }

        log::debug!("music band {:?} -> {:?}", self.music, band);
        self.stop_music(audio);
        if let Some(track) = band.track() {
            audio.play(track, true);
        }
        self.music = band;
    }

    fn is_dead(&self) -> bool {
        player_collides(&self.player, self.environment.obstacles())
            || self.player.is_out_of_bounds(self.ceiling_y, self.screen_height)
    }
}

impl Scene for PlayingScene {
    fn poll_events(&mut self, input: &FrameInput, audio: &mut dyn AudioService) -> Option<SceneCommand> {
        if input.jump {
            self.player.jump();
            audio.play(SoundId::Flap, false);
        }
        None
    }

    fn update(&mut self, dt: f32, audio: &mut dyn AudioService) -> Option<SceneCommand> {
        self.player.update(dt);
        self.environment.update(dt, &mut self.player);
        self.score.sync_to(self.environment.score_tracker());
        self.update_music(audio);

        if self.is_dead() {
            log::info!(
                "round over: score {} at y={:.1} v={:.1}",
                self.environment.score_tracker(),
                self.player.y(),
                self.player.velocity()
            );
            self.stop_music(audio);
            self.music = MusicBand::Silent;
            audio.play(SoundId::Death, false);
            return Some(SceneCommand::Switch(SceneId::Death));
        }
        None
    }

    fn render(&self, renderer: &mut dyn Renderer) {
        renderer.clear(BLACK);
        let player = &self.player.entity;
        renderer.draw(player.visual, player.position);
        for block in self.environment.obstacles().iter().flat_map(|o| o.blocks()) {
            renderer.draw(block.entity.visual, block.entity.position);
        }
        renderer.draw_text(self.score.text(), self.score.position, WHITE, FontStyle::Score);
    }
}
