//! Direction-and-speed motion component.
//!
//! Unlike a velocity vector, [`Movement`] keeps the heading as a unit normal
//! and the magnitude as a separate scalar, so input code can toggle axes
//! without caring about diagonal speed and upgrades can change speed without
//! touching the heading.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Unit-length heading plus speed in world units per second.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct Movement {
    pub normal: Vec2,
    pub speed: f32,
}

impl Movement {
    /// Create a movement heading along `direction` (normalised) at `speed`.
    pub fn new(direction: Vec2, speed: f32) -> Self {
        Self {
            normal: direction.normalize_or_zero(),
            speed,
        }
    }

    /// Set the heading from raw axis values. Diagonals are re-normalised so
    /// that pressing two directions never moves faster than one.
    pub fn set_direction(&mut self, x: f32, y: f32) {
        self.normal = Vec2::new(x, y).normalize_or_zero();
    }

    pub fn stop(&mut self) {
        self.normal = Vec2::ZERO;
    }

    /// Displacement produced over `dt` seconds.
    pub fn displacement(&self, dt: f32) -> Vec2 {
        self.normal * self.speed * dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn diagonal_direction_is_normalised() {
        let mut m = Movement::default();
        m.set_direction(1.0, 1.0);
        assert!(approx_eq(m.normal.length(), 1.0));
        assert!(approx_eq(m.normal.x, std::f32::consts::FRAC_1_SQRT_2));
    }

    #[test]
    fn zero_direction_stays_zero() {
        let mut m = Movement::new(Vec2::Y, 5.0);
        m.set_direction(0.0, 0.0);
        assert_eq!(m.normal, Vec2::ZERO);
    }

    #[test]
    fn displacement_scales_with_dt() {
        let m = Movement::new(Vec2::new(0.0, -2.0), 100.0);
        let d = m.displacement(0.5);
        assert!(approx_eq(d.x, 0.0));
        assert!(approx_eq(d.y, -50.0));
    }
}
