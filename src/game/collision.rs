//! Collision System
//!
//! Exhaustive AABB test of the player against every block of every live gate.
//! Gate count is bounded by retirement, so no broad phase is needed.

use super::obstacle::Obstacle;
use super::player::Player;

pub fn player_collides(player: &Player, obstacles: &[Obstacle]) -> bool {
    obstacles
        .iter()
        .flat_map(|o| o.blocks())
        .any(|block| block.bounds.overlaps(&player.bounds))
}
