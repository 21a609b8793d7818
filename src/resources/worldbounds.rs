//! World bounds resource.
//!
//! Stores the logical size of the play field as reported by the viewport
//! collaborator, plus the limits the player ship may not cross. The world is
//! y-up: `floor` is the lowest y the ship may reach and `play_area_top` the
//! highest.

use bevy_ecs::prelude::Resource;

/// Logical world size and player movement limits.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct WorldBounds {
    /// Width in world units.
    pub width: f32,
    /// Height in world units.
    pub height: f32,
    /// Fraction of `height` used as the upper player limit.
    pub play_area_top_ratio: f32,
    /// Upper player limit in world units (derived from the ratio).
    pub play_area_top: f32,
    /// Lower player limit in world units.
    pub floor: f32,
}

impl WorldBounds {
    pub fn new(width: f32, height: f32, play_area_top_ratio: f32, floor: f32) -> Self {
        let ratio = play_area_top_ratio.clamp(0.0, 1.0);
        Self {
            width,
            height,
            play_area_top_ratio: ratio,
            play_area_top: height * ratio,
            floor,
        }
    }

    /// Apply a new viewport size, keeping the ratio and floor.
    pub fn resize(&mut self, width: f32, height: f32) {
        *self = Self::new(width, height, self.play_area_top_ratio, self.floor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_follows_ratio_on_resize() {
        let mut b = WorldBounds::new(480.0, 600.0, 0.5, 64.0);
        assert_eq!(b.play_area_top, 300.0);
        b.resize(800.0, 1000.0);
        assert_eq!(b.width, 800.0);
        assert_eq!(b.play_area_top, 500.0);
        assert_eq!(b.floor, 64.0);
    }

    #[test]
    fn ratio_is_clamped() {
        let b = WorldBounds::new(100.0, 100.0, 1.5, 0.0);
        assert_eq!(b.play_area_top, 100.0);
    }
}
