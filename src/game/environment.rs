//! Environment
//!
//! Owns the live gates. Each update moves them, counts the ones that slid past
//! the player, retires the ones that left the screen, spawns new ones on a
//! timer, and ramps the difficulty.
//!
//! Spawn timer units are "ticks". With `SpawnClock::FrameTicks` a tick is one
//! update call, which ties spawn cadence to the frame rate. `WallClock`
//! converts elapsed time into ticks at a fixed rate instead.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::obstacle::Obstacle;
use super::player::Player;
use crate::config::GameConfig;

/// How the spawn timer advances
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SpawnClock {
    /// One tick per update call
    FrameTicks,
    /// `dt * ticks_per_second` ticks per update call
    WallClock { ticks_per_second: f32 },
}

impl Default for SpawnClock {
    fn default() -> Self {
        SpawnClock::WallClock { ticks_per_second: 1000.0 }
    }
}

impl SpawnClock {
    pub fn ticks(&self, dt: f32) -> f32 {
        match self {
            SpawnClock::FrameTicks => 1.0,
            SpawnClock::WallClock { ticks_per_second } => dt * ticks_per_second,
        }
    }
}

/// Per-second difficulty adjustments
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyRamp {
    /// Spawn threshold decrease (ticks/s)
    pub frequency_per_second: f32,
    /// Obstacle speed increase (units/s per second), applied to new gates
    pub velocity_per_second: f32,
    /// Player gravity increase (units/s² per second)
    pub gravity_per_second: f32,
}

impl Default for DifficultyRamp {
    fn default() -> Self {
        Self {
            frequency_per_second: 10.0,
            velocity_per_second: 1.0,
            gravity_per_second: 10.0,
        }
    }
}

pub struct Environment {
    obstacles: Vec<Obstacle>,
    spawn_x: f32,
    screen_height: f32,
    /// Spawn threshold in ticks
    frequency: f32,
    /// Velocity given to newly spawned gates (negative = leftward)
    obstacle_velocity: f32,
    gap_height: u32,
    gap_locations: RangeInclusive<u32>,
    spawn_clock: SpawnClock,
    ramp: DifficultyRamp,
    retire_x: f32,
    spawn_timer: f32,
    /// Gates that have slid past the player
    score_tracker: u32,
    rng: StdRng,
}

impl Environment {
    pub fn new(config: &GameConfig, rng: StdRng) -> Self {
        Self {
            obstacles: Vec::new(),
            spawn_x: config.screen_width,
            screen_height: config.screen_height,
            frequency: config.obstacle_frequency,
            obstacle_velocity: config.obstacle_velocity,
            gap_height: config.obstacle_gap,
            gap_locations: config.gap_location_min..=config.gap_location_max,
            spawn_clock: config.spawn_clock,
            ramp: config.ramp,
            retire_x: config.retire_x,
            spawn_timer: 0.0,
            score_tracker: 0,
            rng,
        }
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn score_tracker(&self) -> u32 {
        self.score_tracker
    }

    #[cfg(test)]
    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    #[cfg(test)]
    pub fn obstacle_velocity(&self) -> f32 {
        self.obstacle_velocity
    }

    #[cfg(test)]
    pub fn spawn_timer(&self) -> f32 {
        self.spawn_timer
    }

    #[cfg(test)]
    pub fn add_obstacle(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    pub fn update(&mut self, dt: f32, player: &mut Player) {
        let player_x = player.x();
        for obstacle in &mut self.obstacles {
            obstacle.update(dt);
            if obstacle.mark_passed(player_x) {
                self.score_tracker += 1;
                log::debug!("gate passed, tracker = {}", self.score_tracker);
            }
        }

        self.retire_obstacles();

        if self.spawn_timer > self.frequency {
            self.spawn_obstacle();
            self.spawn_timer = 0.0;
        }

        self.frequency -= self.ramp.frequency_per_second * dt;
        self.obstacle_velocity -= self.ramp.velocity_per_second * dt;
        player.gravity += self.ramp.gravity_per_second * dt;

        self.spawn_timer += self.spawn_clock.ticks(dt);
    }

    fn retire_obstacles(&mut self) {
        let retire_x = self.retire_x;
        let before = self.obstacles.len();
        self.obstacles.retain(|o| o.x() >= retire_x);
        let retired = before - self.obstacles.len();
        if retired > 0 {
            log::debug!("retired {} gate(s), {} live", retired, self.obstacles.len());
        }
    }

    fn spawn_obstacle(&mut self) {
        let gap_location = self.rng.gen_range(self.gap_locations.clone());
        let obstacle = Obstacle::new(
            self.spawn_x,
            self.obstacle_velocity,
            self.screen_height,
            self.gap_height,
            gap_location,
        );
        log::debug!(
            "spawned gate at x={} gap={:?} velocity={:.1}",
            self.spawn_x,
            obstacle.gap_range(),
            obstacle.velocity()
        );
        self.obstacles.push(obstacle);
    }
}
