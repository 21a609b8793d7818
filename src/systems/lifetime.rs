//! Lifetime system.
//!
//! Decrements [`Lifetime`](crate::components::lifetime::Lifetime) budgets and
//! marks entities whose budget ran out with
//! [`PendingDestroy`](crate::components::lifecycle::PendingDestroy). The
//! entity itself is despawned at the end of the frame by
//! [`reclaim_destroyed`](crate::systems::lifecycle::reclaim_destroyed).
//!
//! The countdown respects [`WorldTime::time_scale`](crate::resources::worldtime::WorldTime).

use bevy_ecs::prelude::*;
use log::trace;

use crate::components::lifecycle::PendingDestroy;
use crate::components::lifetime::Lifetime;
use crate::resources::worldtime::WorldTime;

pub fn lifetime_system(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Lifetime), Without<PendingDestroy>>,
    mut commands: Commands,
) {
    let dt = world_time.delta; // delta is already scaled by time_scale
    for (entity, mut lifetime) in query.iter_mut() {
        lifetime.remaining -= dt;
        if lifetime.remaining <= 0.0 {
            trace!("lifetime of {:?} expired", entity);
            commands.entity(entity).try_insert(PendingDestroy);
        }
    }
}
