//! Contact bookkeeping for the collision system.
use bevy_ecs::prelude::*;
use rustc_hash::FxHashSet;

use crate::events::collision::CollisionEvent;

/// Unordered pair key; the lower entity always comes first.
pub type PairKey = (Entity, Entity);

pub fn pair_key(a: Entity, b: Entity) -> PairKey {
    if a <= b { (a, b) } else { (b, a) }
}

/// Pairs that overlapped at the end of the previous collision pass.
#[derive(Resource, Debug, Default)]
pub struct CollisionPairs {
    pub active: FxHashSet<PairKey>,
}

impl CollisionPairs {
    pub fn contains(&self, a: Entity, b: Entity) -> bool {
        self.active.contains(&pair_key(a, b))
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Forget every pair involving `entity`.
    pub fn forget(&mut self, entity: Entity) {
        self.active.retain(|&(a, b)| a != entity && b != entity);
    }
}

/// Transitions observed during the most recent collision pass.
#[derive(Resource, Debug, Default)]
pub struct CollisionLog {
    pub events: Vec<CollisionEvent>,
}

impl CollisionLog {
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &CollisionEvent> {
        self.events.iter()
    }
}
