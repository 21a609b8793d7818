//! Health timers.
//!
//! Only the invincibility and respawn countdowns advance here. Damage is
//! applied by collision reactions, so this pass never changes `health`.
use bevy_ecs::prelude::*;

use crate::components::health::Health;
use crate::components::lifecycle::PendingDestroy;
use crate::resources::worldtime::WorldTime;

pub fn health_system(
    mut query: Query<&mut Health, Without<PendingDestroy>>,
    time: Res<WorldTime>,
) {
    for mut health in query.iter_mut() {
        health.tick(time.delta);
    }
}
