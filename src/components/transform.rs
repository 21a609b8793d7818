//! Placement of an entity in world space.
//!
//! [`Transform`] merges what a sprite engine usually splits into position,
//! size, pivot and rotation. The world is y-up; `position` is the bottom-left
//! corner of the entity's bounding box and `origin` is the rotation pivot
//! measured from that corner.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Position, size, pivot and rotation (degrees, counter-clockwise).
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec2,
    pub size: Vec2,
    /// Pivot relative to `position`, always inside `[0, size]`.
    pub origin: Vec2,
    pub rotation: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            size: Vec2::ZERO,
            origin: Vec2::ZERO,
            rotation: 0.0,
        }
    }
}

impl Transform {
    /// Create a transform at `(x, y)` with the given size and a centred origin.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        let size = Vec2::new(width.max(0.0), height.max(0.0));
        Self {
            position: Vec2::new(x, y),
            size,
            origin: size * 0.5,
            rotation: 0.0,
        }
    }

    /// Create a transform whose origin sits on `(x, y)`.
    pub fn centered_at(x: f32, y: f32, width: f32, height: f32) -> Self {
        let mut t = Self::new(x, y, width, height);
        t.position -= t.origin;
        t
    }

    /// Replace the pivot. Values outside `[0, size]` are clamped.
    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin.clamp(Vec2::ZERO, self.size);
        self
    }

    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    /// World-space position of the pivot.
    pub fn pivot(&self) -> Vec2 {
        self.position + self.origin
    }

    /// Top edge of the bounding box (y-up).
    pub fn top(&self) -> f32 {
        self.position.y + self.size.y
    }
}
