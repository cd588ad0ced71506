//! Input handling with gamepad support
//!
//! Keyboard and window events come from macroquad, gamepad buttons from gilrs
//! (native only). Both are reduced to a per-frame `FrameInput`.

mod actions;
mod gamepad;
mod state;

pub use actions::*;
pub use state::*;
