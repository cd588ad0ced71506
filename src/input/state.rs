//! Input state management
//!
//! Polls the keyboard and window (macroquad) plus the gamepad, and folds them
//! into one `FrameInput` per frame.

use macroquad::prelude::*;

use super::gamepad::{buttons_in_mask, Gamepad};
use super::{FrameInput, InputEvent};

pub struct InputState {
    gamepad: Option<Gamepad>,
    events: Vec<InputEvent>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            gamepad: Gamepad::new(),
            events: Vec::new(),
        }
    }

    /// Call once per frame, before the scene sees input
    pub fn poll_frame(&mut self) -> FrameInput {
        self.events.clear();

        if is_quit_requested() {
            self.events.push(InputEvent::QuitRequested);
        }

        self.events
            .extend(get_keys_pressed().into_iter().map(InputEvent::KeyDown));

        if let Some(gamepad) = self.gamepad.as_mut() {
            gamepad.poll();
            self.events
                .extend(buttons_in_mask(gamepad.pressed_mask()).map(InputEvent::ButtonDown));
        }

        FrameInput::from_events(&self.events)
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
