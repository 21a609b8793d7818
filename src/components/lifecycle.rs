//! Liveness and pooling markers.
//!
//! Destroying an entity never removes it on the spot. [`PendingDestroy`] flips
//! its liveness and [`crate::systems::lifecycle::reclaim_destroyed`] despawns
//! it once every system of the frame has run. Systems that must not act on
//! dead entities filter with `Without<PendingDestroy>`.
//!
//! [`Expendable`] marks entities the pool may evict under pressure, oldest first.

use bevy_ecs::prelude::Component;

/// Entity is dead for the rest of the frame and will be despawned at frame end.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct PendingDestroy;

/// Entity can be dropped when the entity pool is over capacity.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Expendable {
    /// Simulation time (seconds) at which the entity was spawned.
    pub born: f32,
}
