//! Seeded random source shared by spawners.
use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone)]
pub struct SimRng(pub fastrand::Rng);

impl SimRng {
    pub fn seeded(seed: u64) -> Self {
        Self(fastrand::Rng::with_seed(seed))
    }
}

impl Default for SimRng {
    fn default() -> Self {
        Self(fastrand::Rng::new())
    }
}
