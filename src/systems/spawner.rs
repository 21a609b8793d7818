//! Spawner system.
//!
//! Counts every [`Spawner`] down by the frame delta. When a countdown reaches
//! zero the producer is asked for blueprints, the factory queues the new
//! entities on the command buffer and the countdown is redrawn from
//! `[rate_min, rate_max]`.
//!
//! Entities spawned here become visible to the systems that run after this
//! one, never to this pass.
use bevy_ecs::prelude::*;
use log::trace;

use crate::components::lifecycle::PendingDestroy;
use crate::components::spawner::Spawner;
use crate::factory::spawn_blueprint;
use crate::resources::rng::SimRng;
use crate::resources::simconfig::SimConfig;
use crate::resources::worldbounds::WorldBounds;
use crate::resources::worldtime::WorldTime;

pub fn spawner_system(
    mut commands: Commands,
    mut query: Query<(Entity, &mut Spawner), Without<PendingDestroy>>,
    time: Res<WorldTime>,
    config: Res<SimConfig>,
    bounds: Res<WorldBounds>,
    mut rng: ResMut<SimRng>,
) {
    for (entity, mut spawner) in query.iter_mut() {
        spawner.timer -= time.delta;
        if spawner.timer > 0.0 {
            continue;
        }
        let batch = spawner.producer.produce(&mut rng.0, &bounds);
        for blueprint in &batch {
            spawn_blueprint(&mut commands, blueprint, &config, time.elapsed);
        }
        spawner.reset_timer(&mut rng.0);
        trace!(
            "spawner {:?} produced {} entities, next in {:.3}s",
            entity,
            batch.len(),
            spawner.timer
        );
    }
}
