//! End-of-frame entity bookkeeping.
//!
//! [`enforce_pool_capacity`] keeps the number of live world objects under the
//! [`EntityPool`] limit by evicting expendable entities, oldest first.
//! [`reclaim_destroyed`] then despawns everything marked with
//! [`PendingDestroy`]; it must be the last system touching entities so no
//! system ever reads a component of a despawned entity mid-frame.
use bevy_ecs::prelude::*;
use log::{debug, error};

use crate::components::lifecycle::{Expendable, PendingDestroy};
use crate::components::transform::Transform;
use crate::resources::collisionpairs::CollisionPairs;
use crate::resources::entitypool::EntityPool;

pub fn enforce_pool_capacity(
    mut commands: Commands,
    mut pool: ResMut<EntityPool>,
    live: Query<(), (With<Transform>, Without<PendingDestroy>)>,
    expendables: Query<(Entity, &Expendable), (With<Transform>, Without<PendingDestroy>)>,
) {
    pool.exhausted = None;
    let Some(capacity) = pool.capacity else {
        return;
    };
    let live_count = live.iter().count();
    if live_count <= capacity {
        return;
    }
    let excess = live_count - capacity;

    let mut candidates: Vec<(f32, Entity)> =
        expendables.iter().map(|(e, x)| (x.born, e)).collect();
    candidates.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

    let evicted = excess.min(candidates.len());
    for &(_, entity) in candidates.iter().take(evicted) {
        commands.entity(entity).try_insert(PendingDestroy);
    }
    debug!(
        "pool over capacity by {}, evicted {} expendable entities",
        excess, evicted
    );

    if evicted < excess {
        let remaining = live_count - evicted;
        error!(
            "entity pool exhausted: {} live objects, capacity {}, nothing left to evict",
            remaining, capacity
        );
        pool.exhausted = Some(remaining);
    }
}

pub fn reclaim_destroyed(
    mut commands: Commands,
    query: Query<Entity, With<PendingDestroy>>,
    mut pairs: ResMut<CollisionPairs>,
) {
    for entity in query.iter() {
        pairs.forget(entity);
        commands.entity(entity).try_despawn();
    }
}
