//! Collision records produced by the collision pass.
use bevy_ecs::prelude::Entity;

use crate::components::reaction::CollisionPhase;

/// One contact transition observed by the collision system.
///
/// `a` is always the lower entity of the pair. Both participants' reactions
/// have been dispatched (or skipped because one side was already dead) by the
/// time the event is visible in [`CollisionLog`](crate::resources::collisionpairs::CollisionLog).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionEvent {
    pub a: Entity,
    pub b: Entity,
    pub phase: CollisionPhase,
}

impl CollisionEvent {
    pub fn involves(&self, entity: Entity) -> bool {
        self.a == entity || self.b == entity
    }
}
