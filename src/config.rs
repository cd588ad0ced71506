//! Game configuration
//!
//! All tuning constants live in `GameConfig`. Defaults reproduce the classic
//! feel; a `flabod.ron` next to the executable can override any of them at
//! startup. There is no runtime reconfiguration.
//!
//! Example `flabod.ron`:
//! ```ron
//! (
//!     jump_mode: Reset,
//!     spawn_clock: FrameTicks,
//!     fps_limit: Fps60,
//!     seed: Some(42),
//! )
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::game::obstacle::block_count;
use crate::game::runtime::FpsLimit;
use crate::game::{DifficultyRamp, JumpMode, SpawnClock};

/// Default config file, looked up in the working directory
pub const CONFIG_FILE: &str = "flabod.ron";

/// Window and playfield size. Fixed because the window is created before the
/// config file is read.
pub const SCREEN_WIDTH: f32 = 1280.0;
pub const SCREEN_HEIGHT: f32 = 720.0;

/// Music bands and sound levels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Scores above this switch from the easy track to the intense one
    pub intense_threshold: u32,
    pub menu_volume: f32,
    pub easy_volume: f32,
    pub intense_volume: f32,
    pub flap_volume: f32,
    pub death_volume: f32,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            intense_threshold: 60,
            menu_volume: 0.2,
            easy_volume: 0.1,
            intense_volume: 0.2,
            flap_volume: 0.5,
            death_volume: 0.5,
        }
    }
}

/// Asset file locations, relative to `root`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub root: String,
    pub player_sprite: String,
    pub block_sprite: String,
    pub menu_music: String,
    pub easy_music: String,
    pub intense_music: String,
    pub flap_sound: String,
    pub death_sound: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            root: "assets".to_string(),
            player_sprite: "gfx/bird.png".to_string(),
            block_sprite: "gfx/block.png".to_string(),
            menu_music: "sfx/menu_music.wav".to_string(),
            easy_music: "sfx/easy_music.wav".to_string(),
            intense_music: "sfx/intense_music.wav".to_string(),
            flap_sound: "sfx/flap.wav".to_string(),
            death_sound: "sfx/death.wav".to_string(),
        }
    }
}

impl AssetPaths {
    pub fn resolve(&self, relative: &str) -> String {
        if self.root.is_empty() {
            relative.to_string()
        } else {
            format!("{}/{}", self.root.trim_end_matches('/'), relative)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    #[serde(skip)]
    pub screen_width: f32,
    #[serde(skip)]
    pub screen_height: f32,

    /// Initial downward acceleration (units/s²)
    pub gravity: f32,
    /// Launch velocity when a round starts (negative = upward)
    pub player_velocity: f32,
    pub jump_strength: f32,
    pub jump_mode: JumpMode,

    /// Spawn threshold in timer ticks
    pub obstacle_frequency: f32,
    /// Initial gate velocity (negative = leftward)
    pub obstacle_velocity: f32,
    /// Gap height in blocks (the band is inclusive, so one more block is open)
    pub obstacle_gap: u32,
    /// Inclusive range the gap's first slot is drawn from
    pub gap_location_min: u32,
    pub gap_location_max: u32,
    pub spawn_clock: SpawnClock,
    pub ramp: DifficultyRamp,

    /// Gates left of this x are removed
    pub retire_x: f32,
    /// The player dies above this y (and below the screen bottom)
    pub ceiling_y: f32,

    pub audio: AudioSettings,
    pub fps_limit: FpsLimit,
    /// Fixed RNG seed; the wall clock is used when absent
    pub seed: Option<u64>,
    pub assets: AssetPaths,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            gravity: 1000.0,
            player_velocity: -400.0,
            jump_strength: 450.0,
            jump_mode: JumpMode::default(),
            obstacle_frequency: 1300.0,
            obstacle_velocity: -250.0,
            obstacle_gap: 3,
            gap_location_min: 2,
            gap_location_max: 10,
            spawn_clock: SpawnClock::default(),
            ramp: DifficultyRamp::default(),
            retire_x: -200.0,
            ceiling_y: -40.0,
            audio: AudioSettings::default(),
            fps_limit: FpsLimit::default(),
            seed: None,
            assets: AssetPaths::default(),
        }
    }
}

impl GameConfig {
    /// Load `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!("no {} found, using default settings", path.display());
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_ron(&text).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.display().to_string(),
                source,
            },
            other => other,
        })?;

        log::info!("loaded settings from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a RON document
    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(text).map_err(|source| ConfigError::Parse {
            path: "<inline>".to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("gravity", self.gravity),
            ("player_velocity", self.player_velocity),
            ("jump_strength", self.jump_strength),
            ("obstacle_frequency", self.obstacle_frequency),
            ("obstacle_velocity", self.obstacle_velocity),
            ("retire_x", self.retire_x),
            ("ceiling_y", self.ceiling_y),
            ("ramp.frequency_per_second", self.ramp.frequency_per_second),
            ("ramp.velocity_per_second", self.ramp.velocity_per_second),
            ("ramp.gravity_per_second", self.ramp.gravity_per_second),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(invalid(field, format!("must be finite, got {value}")));
            }
        }

        // Gates are only retired off the left edge
        if self.obstacle_velocity >= 0.0 {
            return Err(invalid(
                "obstacle_velocity",
                format!("must be negative (leftward), got {}", self.obstacle_velocity),
            ));
        }
        if self.ramp.velocity_per_second < 0.0 {
            return Err(invalid(
                "ramp.velocity_per_second",
                format!("must not be negative, got {}", self.ramp.velocity_per_second),
            ));
        }

        if self.gap_location_min > self.gap_location_max {
            return Err(invalid(
                "gap_location_min",
                format!("{} exceeds gap_location_max {}", self.gap_location_min, self.gap_location_max),
            ));
        }

        let slots = block_count(self.screen_height);
        let gap_end = self.gap_location_max.saturating_add(self.obstacle_gap);
        if gap_end >= slots {
            return Err(invalid(
                "obstacle_gap",
                format!(
                    "gap at {}..={} does not fit in {} block slots",
                    self.gap_location_max, gap_end, slots
                ),
            ));
        }

        if let SpawnClock::WallClock { ticks_per_second } = self.spawn_clock {
            if !ticks_per_second.is_finite() || ticks_per_second <= 0.0 {
                return Err(invalid(
                    "spawn_clock",
                    format!("ticks_per_second must be positive, got {ticks_per_second}"),
                ));
            }
        }

        let volumes = [
            ("audio.menu_volume", self.audio.menu_volume),
            ("audio.easy_volume", self.audio.easy_volume),
            ("audio.intense_volume", self.audio.intense_volume),
            ("audio.flap_volume", self.audio.flap_volume),
            ("audio.death_volume", self.audio.death_volume),
        ];
        for (field, value) in volumes {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(field, format!("must be within 0..=1, got {value}")));
            }
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}
