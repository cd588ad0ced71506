//! Gamepad support
//!
//! Native: gilrs, polled once per frame.
//! WASM: no gamepad backend; every query reports nothing pressed.

// Standard gamepad button indices (Web Gamepad API standard mapping)
pub mod button {
    pub const A: u32 = 0;           // South
    pub const START: u32 = 9;       // Start/Options
}

// ============================================================================
// WASM Implementation
// ============================================================================

#[cfg(target_arch = "wasm32")]
mod platform {
    pub struct Gamepad;

    impl Gamepad {
        pub fn new() -> Option<Self> {
            None
        }

        pub fn poll(&mut self) {}

        pub fn pressed_mask(&self) -> u32 {
            0
        }
    }
}

// ============================================================================
// Native Implementation (gilrs)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    use gilrs::{Button as GilrsButton, Gilrs};

    pub struct Gamepad {
        gilrs: Gilrs,
        last_buttons: u32,
        pressed: u32,
    }

    impl Gamepad {
        /// None when the platform gamepad backend cannot start
        pub fn new() -> Option<Self> {
            match Gilrs::new() {
                Ok(gilrs) => {
                    let count = gilrs.gamepads().count();
                    log::info!("gamepad backend ready, {} connected", count);
                    Some(Self {
                        gilrs,
                        last_buttons: 0,
                        pressed: 0,
                    })
                }
                Err(e) => {
                    log::warn!("gamepad support unavailable: {}", e);
                    None
                }
            }
        }

        /// Drain gilrs events and latch the buttons that went down since the
        /// previous poll
        pub fn poll(&mut self) {
            while let Some(event) = self.gilrs.next_event() {
                match event.event {
                    gilrs::EventType::Connected => log::info!("gamepad {} connected", event.id),
                    gilrs::EventType::Disconnected => log::info!("gamepad {} disconnected", event.id),
                    _ => {}
                }
            }

            let current = self.button_mask();
            self.pressed = current & !self.last_buttons;
            self.last_buttons = current;
        }

        /// Buttons that went down during the last poll
        pub fn pressed_mask(&self) -> u32 {
            self.pressed
        }

        fn button_mask(&self) -> u32 {
            let Some((_, gp)) = self.gilrs.gamepads().next() else { return 0 };
            let mut mask = 0u32;

            if gp.is_pressed(GilrsButton::South) { mask |= 1 << super::button::A; }
            if gp.is_pressed(GilrsButton::Start) { mask |= 1 << super::button::START; }

            mask
        }
    }
}

/// Button indices set in `mask`, lowest first
pub fn buttons_in_mask(mask: u32) -> impl Iterator<Item = u32> {
    (0..32u32).filter(move |&bit| mask & (1u32 << bit) != 0)
}

pub use platform::Gamepad;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons_in_mask() {
        let mask = (1 << button::A) | (1 << button::START);
        let buttons: Vec<u32> = buttons_in_mask(mask).collect();
        assert_eq!(buttons, vec![button::A, button::START]);
        assert_eq!(buttons_in_mask(0).count(), 0);
    }
}
