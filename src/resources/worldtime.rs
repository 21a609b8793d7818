//! Simulation clock resource.
//!
//! [`WorldTime`] is written once per frame by
//! [`update_world_time`](crate::systems::time::update_world_time) before the
//! schedule runs. Every countdown in the simulation (cooldowns, invincibility,
//! respawn, lifetimes, spawners) advances by `delta`, never by wall-clock reads.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    /// Scaled seconds since the simulation started.
    pub elapsed: f32,
    /// Scaled seconds of the current frame.
    pub delta: f32,
    pub time_scale: f32,
    /// Number of frames stepped so far.
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale.max(0.0);
        self
    }
}
