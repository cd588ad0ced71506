//! Gates
//!
//! A gate is a column of 48-unit blocks spanning the screen height with one
//! contiguous gap. The gap band is inclusive on both ends: a gate built with
//! `gap_location = 4, gap_height = 3` leaves indices 4..=7 empty, four blocks
//! tall.

use std::ops::RangeInclusive;

use macroquad::math::Vec2;

use super::entity::{Aabb, Entity, Visual};

/// Edge length of a gate block (sprite and hitbox)
pub const BLOCK_SIZE: f32 = 48.0;

/// One solid segment of a gate
#[derive(Debug, Clone)]
pub struct ObstacleBlock {
    pub entity: Entity,
    pub bounds: Aabb,
}

impl ObstacleBlock {
    fn new(x: f32, y: f32, velocity: f32) -> Self {
        let entity = Entity::new(x, y, velocity, Visual::Block);
        Self {
            bounds: Self::bounds_at(entity.position),
            entity,
        }
    }

    fn bounds_at(position: Vec2) -> Aabb {
        Aabb::snapped(position, Vec2::ZERO, Vec2::splat(BLOCK_SIZE))
    }

    fn update(&mut self, dt: f32) {
        self.entity.position.x += self.entity.velocity * dt;
        self.bounds = Self::bounds_at(self.entity.position);
    }
}

#[derive(Debug, Clone)]
pub struct Obstacle {
    x: f32,
    velocity: f32,
    gap_location: u32,
    gap_height: u32,
    blocks: Vec<ObstacleBlock>,
    /// Set once the gate has moved past the player
    passed: bool,
}

impl Obstacle {
    pub fn new(x: f32, velocity: f32, screen_height: f32, gap_height: u32, gap_location: u32) -> Self {
        let blocks = solid_indices(screen_height, gap_location, gap_height)
            .map(|i| ObstacleBlock::new(x, i as f32 * BLOCK_SIZE, velocity))
            .collect();

        Self {
            x,
            velocity,
            gap_location,
            gap_height,
            blocks,
            passed: false,
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn gap_range(&self) -> RangeInclusive<u32> {
        self.gap_location..=self.gap_location.saturating_add(self.gap_height)
    }

    pub fn blocks(&self) -> &[ObstacleBlock] {
        &self.blocks
    }

    #[cfg(test)]
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Move the gate and every block by `velocity * dt`
    pub fn update(&mut self, dt: f32) {
        self.x += self.velocity * dt;
        for block in &mut self.blocks {
            block.update(dt);
        }
    }

    /// Flip `passed` the first time the gate is left of `player_x`.
    /// Returns true only on that first crossing.
    pub fn mark_passed(&mut self, player_x: f32) -> bool {
        if self.passed || self.x >= player_x {
            return false;
        }
        self.passed = true;
        true
    }
}

/// Number of block slots needed to cover the screen height
pub fn block_count(screen_height: f32) -> u32 {
    (screen_height / BLOCK_SIZE).round().max(0.0) as u32
}

/// Slot indices that hold a block, top to bottom
pub fn solid_indices(screen_height: f32, gap_location: u32, gap_height: u32) -> impl Iterator<Item = u32> {
    let gap_end = gap_location.saturating_add(gap_height);
    (0..block_count(screen_height)).filter(move |&i| i < gap_location || i > gap_end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_count() {
        assert_eq!(block_count(720.0), 15);
        assert_eq!(block_count(48.0), 1);
        assert_eq!(block_count(0.0), 0);
        // 740 / 48 = 15.41
        assert_eq!(block_count(740.0), 15);
    }

    #[test]
    fn test_gap_band_is_inclusive() {
        let gate = Obstacle::new(1280.0, -250.0, 720.0, 3, 4);
        let indices: Vec<u32> = gate
            .blocks()
            .iter()
            .map(|b| (b.entity.position.y / BLOCK_SIZE) as u32)
            .collect();

        assert_eq!(indices, vec![0, 1, 2, 3, 8, 9, 10, 11, 12, 13, 14]);
        assert_eq!(gate.gap_range(), 4..=7);
    }

    #[test]
    fn test_every_slot_outside_gap_has_one_block() {
        for gap_location in 2..=10 {
            for gap_height in 0..=4 {
                let gate = Obstacle::new(0.0, -250.0, 720.0, gap_height, gap_location);
                let gap = gate.gap_range();
                for i in 0..block_count(720.0) {
                    let count = gate
                        .blocks()
                        .iter()
                        .filter(|b| b.entity.position.y == i as f32 * BLOCK_SIZE)
                        .count();
                    let expected = if gap.contains(&i) { 0 } else { 1 };
                    assert_eq!(count, expected, "slot {i} gap {gap:?}");
                }
            }
        }
    }

    #[test]
    fn test_block_generation_is_repeatable() {
        let a: Vec<u32> = solid_indices(720.0, 6, 3).collect();
        let b: Vec<u32> = solid_indices(720.0, 6, 3).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_gap_past_bottom_leaves_top_blocks() {
        let indices: Vec<u32> = solid_indices(720.0, 13, 3).collect();
        assert_eq!(indices, (0..13).collect::<Vec<_>>());
    }

    #[test]
    fn test_oversized_gap_does_not_overflow() {
        let gate = Obstacle::new(1280.0, -250.0, 720.0, u32::MAX, 4);
        assert_eq!(gate.gap_range(), 4..=u32::MAX);
        let indices: Vec<u32> = gate
            .blocks()
            .iter()
            .map(|b| (b.entity.position.y / BLOCK_SIZE) as u32)
            .collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_update_moves_gate_and_blocks() {
        let mut gate = Obstacle::new(1280.0, -250.0, 720.0, 3, 5);
        gate.update(0.5);
        assert_eq!(gate.x(), 1155.0);
        for block in gate.blocks() {
            assert_eq!(block.entity.position.x, 1155.0);
            assert_eq!(block.bounds.x, 1155.0);
            assert_eq!(block.bounds.w, BLOCK_SIZE);
        }
    }

    #[test]
    fn test_mark_passed_fires_once() {
        let mut gate = Obstacle::new(700.0, -250.0, 720.0, 3, 5);
        assert!(!gate.mark_passed(640.0));

        gate.update(0.5); // x = 575
        assert!(gate.mark_passed(640.0));
        assert!(gate.passed());
        assert!(!gate.mark_passed(640.0));

        gate.update(0.5);
        assert!(!gate.mark_passed(640.0));
    }

    #[test]
    fn test_gate_at_player_x_is_not_passed() {
        let mut gate = Obstacle::new(640.0, -250.0, 720.0, 3, 5);
        assert!(!gate.mark_passed(640.0));
    }
}
