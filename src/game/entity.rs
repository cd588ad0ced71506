//! Entity primitives
//!
//! An entity is a position, a scalar velocity along its axis of motion
//! (vertical for the player, horizontal for gate blocks), and a handle naming
//! the sprite it is drawn with. Entities never own each other: the player
//! belongs to the Playing scene, blocks belong to their gate.

use macroquad::math::Vec2;

/// Opaque visual handle. The renderer maps it to an actual texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visual {
    Player,
    Block,
}

/// Axis-aligned bounding box in screen units (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Box whose corner sits at `position + offset`, truncated to whole units.
    pub fn snapped(position: Vec2, offset: Vec2, size: Vec2) -> Self {
        Self::new(
            (position.x + offset.x).trunc(),
            (position.y + offset.y).trunc(),
            size.x,
            size.y,
        )
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Strict overlap test. Boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Base physics object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entity {
    pub position: Vec2,
    pub velocity: f32,
    pub visual: Visual,
}

impl Entity {
    pub fn new(x: f32, y: f32, velocity: f32, visual: Visual) -> Self {
        Self {
            position: Vec2::new(x, y),
            velocity,
            visual,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }
}
