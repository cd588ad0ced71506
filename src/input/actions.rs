//! Game action definitions
//!
//! Raw keys and buttons map onto three actions. Scenes only ever see the
//! per-frame `FrameInput` built from them.

use macroquad::prelude::KeyCode;

use super::gamepad::button;

/// Everything the player can ask for
///
/// Mappings:
/// - Space / A = Jump (also starts a round from the title screen)
/// - R / Start = Restart (from the death screen)
/// - Escape / window close = Quit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Jump,
    Restart,
    Quit,
}

impl Action {
    pub fn for_key(key: KeyCode) -> Option<Action> {
        match key {
            KeyCode::Space => Some(Action::Jump),
            KeyCode::R => Some(Action::Restart),
            KeyCode::Escape => Some(Action::Quit),
            _ => None,
        }
    }

    pub fn for_button(index: u32) -> Option<Action> {
        match index {
            button::A => Some(Action::Jump),
            button::START => Some(Action::Restart),
            _ => None,
        }
    }
}

/// Raw input collected during one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window close request
    QuitRequested,
    KeyDown(KeyCode),
    /// Gamepad button index (see `gamepad::button`)
    ButtonDown(u32),
}

impl InputEvent {
    pub fn action(&self) -> Option<Action> {
        match self {
            InputEvent::QuitRequested => Some(Action::Quit),
            InputEvent::KeyDown(key) => Action::for_key(*key),
            InputEvent::ButtonDown(index) => Action::for_button(*index),
        }
    }
}

/// Actions requested this frame. Multiple presses of the same key in one
/// frame collapse into one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub jump: bool,
    pub restart: bool,
    pub quit: bool,
}

impl FrameInput {
    /// Unrecognized events are ignored
    pub fn from_events<'a>(events: impl IntoIterator<Item = &'a InputEvent>) -> Self {
        let mut input = FrameInput::default();
        for event in events {
            match event.action() {
                Some(Action::Jump) => input.jump = true,
                Some(Action::Restart) => input.restart = true,
                Some(Action::Quit) => input.quit = true,
                None => {}
            }
        }
        input
    }
}

#[cfg(test)]
impl FrameInput {
    pub fn jump() -> Self {
        Self { jump: true, ..Self::default() }
    }

    pub fn restart() -> Self {
        Self { restart: true, ..Self::default() }
    }

    pub fn quit() -> Self {
        Self { quit: true, ..Self::default() }
    }

    pub fn is_empty(&self) -> bool {
        !(self.jump || self.restart || self.quit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(Action::for_key(KeyCode::Space), Some(Action::Jump));
        assert_eq!(Action::for_key(KeyCode::R), Some(Action::Restart));
        assert_eq!(Action::for_key(KeyCode::Escape), Some(Action::Quit));
        assert_eq!(Action::for_key(KeyCode::Q), None);
    }

    #[test]
    fn test_button_mapping() {
        assert_eq!(Action::for_button(button::A), Some(Action::Jump));
        assert_eq!(Action::for_button(button::START), Some(Action::Restart));
        // East (B) has no action
        assert_eq!(Action::for_button(1), None);
    }

    #[test]
    fn test_frame_input_from_events() {
        let events = [
            InputEvent::KeyDown(KeyCode::Space),
            InputEvent::KeyDown(KeyCode::Space),
            InputEvent::ButtonDown(button::START),
        ];
        let input = FrameInput::from_events(&events);
        assert!(input.jump);
        assert!(input.restart);
        assert!(!input.quit);
    }

    #[test]
    fn test_unrecognized_events_ignored() {
        let events = [InputEvent::KeyDown(KeyCode::W), InputEvent::ButtonDown(1)];
        assert!(FrameInput::from_events(&events).is_empty());
    }

    #[test]
    fn test_window_close_is_quit() {
        let input = FrameInput::from_events(&[InputEvent::QuitRequested]);
        assert_eq!(input, FrameInput::quit());
    }
}
