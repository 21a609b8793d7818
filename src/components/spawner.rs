//! Timed entity producer component.
//!
//! A [`Spawner`] counts down a randomised interval. When the countdown runs
//! out, the spawner system asks its [`SpawnProducer`] for a batch of
//! [`Blueprint`]s and turns them into entities through the factory, then draws
//! the next interval uniformly from `[rate_min, rate_max]`.
//!
//! Producers are pure: they only read the random generator and the world
//! bounds passed to them, and never touch the ECS world.
//!
//! # Related
//!
//! - [`crate::systems::spawner::spawner_system`] – runs the countdown and registers spawned entities
//! - [`crate::factory::spawn_blueprint`] – builds entities from blueprints

use bevy_ecs::prelude::Component;
use fastrand::Rng;
use smallvec::{SmallVec, smallvec};

use crate::components::reaction::PowerUpKind;
use crate::factory::{Blueprint, POWER_UP_SIZE};
use crate::resources::worldbounds::WorldBounds;

pub type Blueprints = SmallVec<[Blueprint; 2]>;

/// Sample a random f32 in the range [min, max].
/// If the range is empty or smaller than EPSILON, returns min directly.
#[inline]
pub fn random_f32_range(rng: &mut Rng, min: f32, max: f32) -> f32 {
    let range = max - min;
    if range < f32::EPSILON {
        return min;
    }
    min + rng.f32() * range
}

/// Which kind of entities a spawner produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpawnProducer {
    /// One random power-up dropping from just above the top edge.
    PowerUps,
    /// One background star at the top edge with a random depth.
    Starfield,
    /// One asteroid hazard above the top edge.
    Asteroids,
}

impl SpawnProducer {
    /// Decide what to spawn. Positions are chosen inside `bounds`.
    pub fn produce(&self, rng: &mut Rng, bounds: &WorldBounds) -> Blueprints {
        match self {
            SpawnProducer::PowerUps => {
                // Keep it within reach of the player.
                let x = random_f32_range(rng, POWER_UP_SIZE, bounds.width - POWER_UP_SIZE * 2.0);
                let y = bounds.height + 32.0;
                let kind = PowerUpKind::ALL[rng.usize(0..PowerUpKind::ALL.len())];
                smallvec![Blueprint::PowerUp { kind, x, y }]
            }
            SpawnProducer::Starfield => {
                let x = random_f32_range(rng, 0.0, bounds.width);
                let y = bounds.height;
                let z = rng.u8(0..=100);
                let hue = random_f32_range(rng, 180.0, 300.0);
                smallvec![Blueprint::Star { x, y, z, hue }]
            }
            SpawnProducer::Asteroids => {
                let radius = random_f32_range(rng, 12.0, 28.0);
                let x = random_f32_range(rng, radius, bounds.width - radius);
                let y = bounds.height + radius * 2.0;
                let speed = random_f32_range(rng, 90.0, 180.0);
                smallvec![Blueprint::Asteroid { x, y, radius, speed }]
            }
        }
    }
}

/// Periodic producer of new entities.
#[derive(Component, Clone, Debug)]
pub struct Spawner {
    pub producer: SpawnProducer,
    /// Shortest interval between spawns, in seconds.
    pub rate_min: f32,
    /// Longest interval between spawns, in seconds.
    pub rate_max: f32,
    /// Seconds until the next spawn. Starts at 0 so the first batch comes immediately.
    pub timer: f32,
}

impl Spawner {
    /// Create a spawner. The interval bounds are swapped if given in reverse.
    pub fn new(producer: SpawnProducer, rate_min: f32, rate_max: f32) -> Self {
        let (lo, hi) = if rate_min <= rate_max {
            (rate_min, rate_max)
        } else {
            (rate_max, rate_min)
        };
        Self {
            producer,
            rate_min: lo.max(0.0),
            rate_max: hi.max(0.0),
            timer: 0.0,
        }
    }

    /// Draw the next countdown from `[rate_min, rate_max]`.
    pub fn reset_timer(&mut self, rng: &mut Rng) {
        self.timer = random_f32_range(rng, self.rate_min, self.rate_max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> WorldBounds {
        WorldBounds::new(480.0, 640.0, 0.75, 64.0)
    }

    #[test]
    fn reversed_rates_are_swapped() {
        let s = Spawner::new(SpawnProducer::Starfield, 4.0, 2.0);
        assert_eq!((s.rate_min, s.rate_max), (2.0, 4.0));
        assert_eq!(s.timer, 0.0);
    }

    #[test]
    fn reset_timer_stays_in_range() {
        let mut rng = Rng::with_seed(7);
        let mut s = Spawner::new(SpawnProducer::PowerUps, 2.0, 4.0);
        for _ in 0..1000 {
            s.reset_timer(&mut rng);
            assert!(s.timer >= 2.0 && s.timer <= 4.0);
        }
    }

    #[test]
    fn power_ups_spawn_above_screen_within_reach() {
        let mut rng = Rng::with_seed(1);
        let b = bounds();
        for _ in 0..200 {
            let batch = SpawnProducer::PowerUps.produce(&mut rng, &b);
            assert_eq!(batch.len(), 1);
            match batch[0] {
                Blueprint::PowerUp { x, y, .. } => {
                    assert!(x >= POWER_UP_SIZE && x <= b.width - POWER_UP_SIZE * 2.0);
                    assert!(y > b.height);
                }
                ref other => panic!("unexpected blueprint {other:?}"),
            }
        }
    }

    #[test]
    fn stars_have_depth_and_hue_in_range() {
        let mut rng = Rng::with_seed(3);
        let b = bounds();
        for _ in 0..200 {
            let batch = SpawnProducer::Starfield.produce(&mut rng, &b);
            match batch[0] {
                Blueprint::Star { x, y, z, hue } => {
                    assert!((0.0..=b.width).contains(&x));
                    assert_eq!(y, b.height);
                    assert!(z <= 100);
                    assert!((180.0..=300.0).contains(&hue));
                }
                ref other => panic!("unexpected blueprint {other:?}"),
            }
        }
    }

    #[test]
    fn asteroids_fit_horizontally() {
        let mut rng = Rng::with_seed(11);
        let b = bounds();
        for _ in 0..200 {
            let batch = SpawnProducer::Asteroids.produce(&mut rng, &b);
            match batch[0] {
                Blueprint::Asteroid { x, radius, .. } => {
                    assert!(x >= radius && x <= b.width - radius);
                }
                ref other => panic!("unexpected blueprint {other:?}"),
            }
        }
    }

    #[test]
    fn same_seed_same_batch() {
        let b = bounds();
        let a = SpawnProducer::Asteroids.produce(&mut Rng::with_seed(5), &b);
        let c = SpawnProducer::Asteroids.produce(&mut Rng::with_seed(5), &b);
        assert_eq!(a, c);
    }
}
