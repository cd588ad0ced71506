//! Displayed score
//!
//! Mirrors the environment's score tracker. The text is cached so the renderer
//! does not format a string every frame.

use macroquad::math::Vec2;

#[derive(Debug, Clone)]
pub struct Score {
    value: u32,
    text: String,
    pub position: Vec2,
}

impl Score {
    pub fn new(position: Vec2) -> Self {
        Self {
            value: 0,
            text: "0".to_string(),
            position,
        }
    }

    #[cfg(test)]
    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn add(&mut self) {
        self.value += 1;
    }

    /// Rebuild the cached text from the current value
    pub fn refresh_text(&mut self) {
        self.text = self.value.to_string();
    }

    /// Step one point towards `tracker`. Catches up at most one point per
    /// call, so a burst of passed gates ticks up over consecutive frames.
    pub fn sync_to(&mut self, tracker: u32) {
        if tracker > self.value {
            self.add();
            self.refresh_text();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let score = Score::new(Vec2::new(640.0, 50.0));
        assert_eq!(score.value(), 0);
        assert_eq!(score.text(), "0");
    }

    #[test]
    fn test_text_only_changes_on_refresh() {
        let mut score = Score::new(Vec2::ZERO);
        score.add();
        assert_eq!(score.text(), "0");
        score.refresh_text();
        assert_eq!(score.text(), "1");
    }

    #[test]
    fn test_sync_steps_one_per_call() {
        let mut score = Score::new(Vec2::ZERO);
        score.sync_to(3);
        assert_eq!(score.value(), 1);
        score.sync_to(3);
        score.sync_to(3);
        assert_eq!(score.value(), 3);
        assert_eq!(score.text(), "3");
        score.sync_to(3);
        assert_eq!(score.value(), 3);
    }
}
