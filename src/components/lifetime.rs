//! Time-to-live component for automatic entity expiry.
//!
//! The [`Lifetime`] component counts down time each frame. When the remaining
//! time reaches zero, the entity is marked for destruction and reclaimed at
//! the end of the frame. There is no callback.
//!
//! # Related
//!
//! - [`crate::systems::lifetime::lifetime_system`] – system that updates and expires entities

use bevy_ecs::prelude::Component;

/// Time budget after which an entity is destroyed.
///
/// The countdown respects [`WorldTime::time_scale`](crate::resources::worldtime::WorldTime).
#[derive(Component, Clone, Copy, Debug)]
pub struct Lifetime {
    /// Remaining time in seconds before destruction.
    pub remaining: f32,
}

impl Lifetime {
    /// Create a new Lifetime with the given duration in seconds.
    pub fn new(seconds: f32) -> Self {
        Lifetime { remaining: seconds }
    }

    /// Lifetime long enough to travel `distance` at `speed`, plus `margin` seconds.
    pub fn for_travel(distance: f32, speed: f32, margin: f32) -> Self {
        if speed <= f32::EPSILON {
            return Self::new(margin);
        }
        Self::new(distance.abs() / speed + margin)
    }
}
