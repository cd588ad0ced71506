//! Frame timing
//!
//! The loop driver owns one `FrameClock` and turns wall-clock timestamps into
//! the `dt` threaded through every update. Nothing else reads the clock.

use serde::{Deserialize, Serialize};

/// Turns successive timestamps (seconds) into frame deltas
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    previous: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { previous: None }
    }

    /// Seconds since the previous tick. The first tick, and any tick whose
    /// timestamp does not move forward, yields 0.
    pub fn tick(&mut self, now: f64) -> f32 {
        let dt = match self.previous {
            Some(previous) if now.is_finite() && now > previous => (now - previous) as f32,
            _ => 0.0,
        };
        if now.is_finite() {
            self.previous = Some(now);
        }
        dt
    }
}

/// FPS limit setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FpsLimit {
    Fps30,
    Fps60,
    /// As fast as the display allows
    #[default]
    Unlocked,
}

impl FpsLimit {
    /// Get the target frame time in seconds (None = unlocked)
    pub fn frame_time(&self) -> Option<f64> {
        match self {
            FpsLimit::Fps30 => Some(1.0 / 30.0),
            FpsLimit::Fps60 => Some(1.0 / 60.0),
            FpsLimit::Unlocked => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FpsLimit::Fps30 => "30",
            FpsLimit::Fps60 => "60",
            FpsLimit::Unlocked => "Unlocked",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(12.5), 0.0);
    }

    #[test]
    fn test_tick_measures_elapsed() {
        let mut clock = FrameClock::new();
        clock.tick(1.0);
        assert!((clock.tick(1.25) - 0.25).abs() < 1e-6);
        assert!((clock.tick(1.26) - 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_backwards_time_is_zero() {
        let mut clock = FrameClock::new();
        clock.tick(5.0);
        assert_eq!(clock.tick(4.0), 0.0);
        // Measures from the latest timestamp
        assert!((clock.tick(4.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_non_finite_timestamp_ignored() {
        let mut clock = FrameClock::new();
        clock.tick(1.0);
        assert_eq!(clock.tick(f64::NAN), 0.0);
        assert!((clock.tick(2.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_fps_limit_frame_time() {
        assert_eq!(FpsLimit::Unlocked.frame_time(), None);
        assert!((FpsLimit::Fps60.frame_time().unwrap() - 1.0 / 60.0).abs() < 1e-12);
        assert_eq!(FpsLimit::Fps30.label(), "30");
    }
}
