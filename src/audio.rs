//! Audio collaborator
//!
//! Scenes talk to sound through `AudioService` so the game logic can run
//! without an audio device. `MacroquadAudio` plays the loaded clips.

use std::collections::HashMap;

use macroquad::audio::{play_sound, set_sound_volume, stop_sound, PlaySoundParams, Sound};

use crate::config::AudioSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundId {
    MenuMusic,
    EasyMusic,
    IntenseMusic,
    Flap,
    Death,
}

impl SoundId {
    pub const ALL: [SoundId; 5] = [
        SoundId::MenuMusic,
        SoundId::EasyMusic,
        SoundId::IntenseMusic,
        SoundId::Flap,
        SoundId::Death,
    ];

    /// Configured level for this sound
    pub fn volume(&self, settings: &AudioSettings) -> f32 {
        match self {
            SoundId::MenuMusic => settings.menu_volume,
            SoundId::EasyMusic => settings.easy_volume,
            SoundId::IntenseMusic => settings.intense_volume,
            SoundId::Flap => settings.flap_volume,
            SoundId::Death => settings.death_volume,
        }
    }
}

pub trait AudioService {
    fn play(&mut self, sound: SoundId, looped: bool);
    /// Stop `sound`, fading out over `fade_ms` where the backend supports it
    fn stop(&mut self, sound: SoundId, fade_ms: u32);
    fn set_volume(&mut self, sound: SoundId, level: f32);
}

/// Plays clips through macroquad's mixer
pub struct MacroquadAudio {
    sounds: HashMap<SoundId, Sound>,
    volumes: HashMap<SoundId, f32>,
}

impl MacroquadAudio {
    pub fn new(sounds: HashMap<SoundId, Sound>) -> Self {
        Self {
            sounds,
            volumes: HashMap::new(),
        }
    }
}

impl AudioService for MacroquadAudio {
    fn play(&mut self, sound: SoundId, looped: bool) {
        let Some(clip) = self.sounds.get(&sound) else {
            log::warn!("no clip loaded for {:?}", sound);
            return;
        };
        let volume = self.volumes.get(&sound).copied().unwrap_or(1.0);
        play_sound(clip, PlaySoundParams { looped, volume });
    }

    fn stop(&mut self, sound: SoundId, _fade_ms: u32) {
        // macroquad has no fades; stop immediately
        if let Some(clip) = self.sounds.get(&sound) {
            stop_sound(clip);
        }
    }

    fn set_volume(&mut self, sound: SoundId, level: f32) {
        let level = level.clamp(0.0, 1.0);
        self.volumes.insert(sound, level);
        if let Some(clip) = self.sounds.get(&sound) {
            set_sound_volume(clip, level);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_volumes() {
        let settings = AudioSettings::default();
        assert_eq!(SoundId::MenuMusic.volume(&settings), 0.2);
        assert_eq!(SoundId::EasyMusic.volume(&settings), 0.1);
        assert_eq!(SoundId::IntenseMusic.volume(&settings), 0.2);
        assert_eq!(SoundId::Flap.volume(&settings), 0.5);
        assert_eq!(SoundId::Death.volume(&settings), 0.5);
    }
}
