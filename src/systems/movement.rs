//! Position integration.
use bevy_ecs::prelude::*;

use crate::components::lifecycle::PendingDestroy;
use crate::components::movement::Movement;
use crate::components::transform::Transform;
use crate::resources::worldtime::WorldTime;

/// `position += normal * speed * delta` for every moving entity. No clamping.
pub fn movement_system(
    mut query: Query<(&mut Transform, &Movement), Without<PendingDestroy>>,
    time: Res<WorldTime>,
) {
    for (mut transform, movement) in query.iter_mut() {
        transform.position += movement.displacement(time.delta);
    }
}
