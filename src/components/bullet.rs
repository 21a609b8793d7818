use bevy_ecs::prelude::Component;

/// Marks projectile entities. Position and heading live in
/// [`Transform`](super::transform::Transform) and [`Movement`](super::movement::Movement).
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Bullet;
