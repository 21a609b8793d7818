//! Capacity limit for live world objects.
use bevy_ecs::prelude::Resource;

/// Pool limit enforced by [`crate::systems::lifecycle::enforce_pool_capacity`].
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntityPool {
    /// Maximum number of live world objects. `None` disables the limit.
    pub capacity: Option<usize>,
    /// Set when the pool could not get back under capacity; holds the live count.
    pub exhausted: Option<usize>,
}

impl EntityPool {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
            exhausted: None,
        }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }
}
