//! Player
//!
//! A gravity-driven entity with a jump. Integration is semi-implicit Euler
//! with the position step taken before gravity is applied; the order is part
//! of the game feel and must not be swapped.

use macroquad::math::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Aabb, Entity, Visual};
use crate::config::GameConfig;

/// Drawn sprite size
pub const PLAYER_SPRITE_SIZE: Vec2 = Vec2::new(50.0, 35.0);
/// Hitbox is smaller than the sprite
pub const PLAYER_BOX_SIZE: Vec2 = Vec2::new(35.0, 27.0);
/// Hitbox offset from the entity position
pub const PLAYER_BOX_OFFSET: Vec2 = Vec2::new(0.0, 5.0);

/// What a jump does to the current vertical velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JumpMode {
    /// Subtract the jump strength from the current velocity
    #[default]
    Impulse,
    /// Replace the velocity with `-jump_strength`
    Reset,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub entity: Entity,
    /// Downward acceleration (units/s²). Ramped up by the environment.
    pub gravity: f32,
    pub bounds: Aabb,
    jump_strength: f32,
    jump_mode: JumpMode,
}

impl Player {
    pub fn new(x: f32, y: f32, velocity: f32, gravity: f32, jump_strength: f32, jump_mode: JumpMode) -> Self {
        let entity = Entity::new(x, y, velocity, Visual::Player);
        Self {
            bounds: Aabb::snapped(entity.position, PLAYER_BOX_OFFSET, PLAYER_BOX_SIZE),
            entity,
            gravity,
            jump_strength,
            jump_mode,
        }
    }

    /// Player at the centre of the screen with the configured launch velocity
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.screen_width / 2.0,
            config.screen_height / 2.0,
            config.player_velocity,
            config.gravity,
            config.jump_strength,
            config.jump_mode,
        )
    }

    pub fn x(&self) -> f32 {
        self.entity.position.x
    }

    pub fn y(&self) -> f32 {
        self.entity.position.y
    }

    pub fn velocity(&self) -> f32 {
        self.entity.velocity
    }

    /// Advance by `dt` seconds. `dt` must be finite and non-negative.
    pub fn update(&mut self, dt: f32) {
        debug_assert!(dt.is_finite() && dt >= 0.0, "invalid dt {dt}");
        self.entity.position.y += self.entity.velocity * dt;
        self.entity.velocity += self.gravity * dt;
        self.bounds = Aabb::snapped(self.entity.position, PLAYER_BOX_OFFSET, PLAYER_BOX_SIZE);
        debug_assert!(self.entity.is_finite(), "player left the finite range");
    }

    pub fn jump(&mut self) {
        self.entity.velocity = match self.jump_mode {
            JumpMode::Impulse => self.entity.velocity - self.jump_strength,
            JumpMode::Reset => -self.jump_strength,
        };
    }

    /// Above `ceiling_y` or below the bottom edge of the screen
    pub fn is_out_of_bounds(&self, ceiling_y: f32, screen_height: f32) -> bool {
        self.y() > screen_height || self.y() < ceiling_y
    }
}
