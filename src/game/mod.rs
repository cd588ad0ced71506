//! Simulation core
//!
//! Everything that moves, collides or scores. Nothing in here touches the
//! window, audio device or input devices; scenes drive these types and hand
//! the results to the renderer and audio collaborators.

pub mod entity;
pub mod player;
pub mod obstacle;
pub mod environment;
pub mod collision;
pub mod score;
pub mod runtime;

pub use entity::Visual;
pub use player::{JumpMode, Player};
pub use obstacle::BLOCK_SIZE;
pub use environment::{DifficultyRamp, Environment, SpawnClock};
pub use collision::player_collides;
pub use score::Score;
pub use runtime::{FpsLimit, FrameClock};
