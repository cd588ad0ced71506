//! Application state and frame driver
//!
//! Owns the scene manager plus the platform collaborators (input, renderer,
//! audio) and runs one frame at a time. `main` awaits `next_frame()` between
//! calls.

use macroquad::prelude::get_time;

use crate::audio::MacroquadAudio;
use crate::game::{FpsLimit, FrameClock};
use crate::input::InputState;
use crate::render::MacroquadRenderer;
use crate::scene::SceneManager;

pub struct App {
    scenes: SceneManager,
    input: InputState,
    renderer: MacroquadRenderer,
    audio: MacroquadAudio,
    clock: FrameClock,
    fps_limit: FpsLimit,
}

impl App {
    pub fn new(
        scenes: SceneManager,
        renderer: MacroquadRenderer,
        audio: MacroquadAudio,
        fps_limit: FpsLimit,
    ) -> Self {
        Self {
            scenes,
            input: InputState::new(),
            renderer,
            audio,
            clock: FrameClock::new(),
            fps_limit,
        }
    }

    /// Poll, update and render one frame. Returns false once quit was requested.
    pub fn frame(&mut self, now: f64) -> bool {
        let dt = self.clock.tick(now);
        let input = self.input.poll_frame();
        self.scenes
            .tick(&input, dt, &mut self.audio, &mut self.renderer);
        !self.scenes.quit_requested()
    }

    /// Hold the frame until the configured frame time has elapsed
    pub fn limit_frame_rate(&self, frame_start: f64) {
        let Some(target_frame_time) = self.fps_limit.frame_time() else { return };
        let remaining = target_frame_time - (get_time() - frame_start);
        if remaining <= 0.0 {
            return;
        }

        // Native: use sleep for bulk, then spin-wait for precision
        #[cfg(not(target_arch = "wasm32"))]
        {
            let spin_margin = 0.002; // 2ms
            while get_time() - frame_start + spin_margin < target_frame_time {
                std::thread::sleep(std::time::Duration::from_millis(1));
            }
            while get_time() - frame_start < target_frame_time {
                std::hint::spin_loop();
            }
        }
        // WASM: just spin-wait (no thread::sleep available)
        #[cfg(target_arch = "wasm32")]
        {
            while get_time() - frame_start < target_frame_time {}
        }
    }
}
