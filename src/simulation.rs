//! Simulation context.
//!
//! [`Simulation`] owns the ECS [`World`], its resources and the fixed frame
//! [`Schedule`]. It is created once, stepped once per frame by the host, and
//! tears the audio bridge down when dropped. It also exposes the entity
//! registry operations (create, destroy, component access, filtered
//! snapshots) for hosts and tests that need to reach into the world.
use std::path::Path;

use bevy_ecs::component::Mutable;
use bevy_ecs::prelude::*;
use bevy_ecs::query::QueryFilter;
use crossbeam_channel::Receiver;
use log::info;

use crate::components::lifecycle::PendingDestroy;
use crate::components::spawner::SpawnProducer;
use crate::error::SimError;
use crate::events::audio::AudioCmd;
use crate::factory;
use crate::resources::assets::AssetCatalog;
use crate::resources::audio::{setup_audio, shutdown_audio};
use crate::resources::collisionpairs::{CollisionLog, CollisionPairs};
use crate::resources::drawlist::DrawList;
use crate::resources::entitypool::EntityPool;
use crate::resources::input::InputState;
use crate::resources::rng::SimRng;
use crate::resources::simconfig::SimConfig;
use crate::resources::worldbounds::WorldBounds;
use crate::resources::worldtime::WorldTime;
use crate::systems::audio::{forward_audio_cmds, update_bevy_audio_cmds};
use crate::systems::collision::collision_system;
use crate::systems::health::health_system;
use crate::systems::input::player_input_system;
use crate::systems::lifecycle::{enforce_pool_capacity, reclaim_destroyed};
use crate::systems::lifetime::lifetime_system;
use crate::systems::movement::movement_system;
use crate::systems::playercontrol::player_control_system;
use crate::systems::reactions;
use crate::systems::render::build_draw_list;
use crate::systems::spawner::spawner_system;
use crate::systems::time::update_world_time;

/// The per-frame systems in their fixed order.
pub fn frame_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(
        (
            player_input_system,
            player_control_system,
            movement_system,
            collision_system,
            spawner_system,
            lifetime_system,
            health_system,
            enforce_pool_capacity,
            reclaim_destroyed,
            (update_bevy_audio_cmds, forward_audio_cmds).chain(),
            build_draw_list,
        )
            .chain(),
    );
    update
}

/// Insert every resource the frame schedule reads.
///
/// Returns the receiving end of the audio channel.
pub fn insert_resources(world: &mut World, config: SimConfig, seed: u64) -> Receiver<AudioCmd> {
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(config.world_bounds());
    world.insert_resource(config);
    world.insert_resource(InputState::default());
    world.insert_resource(SimRng::seeded(seed));
    world.insert_resource(EntityPool::with_capacity(config.pool_capacity));
    world.insert_resource(CollisionPairs::default());
    world.insert_resource(CollisionLog::default());
    world.insert_resource(AssetCatalog::with_defaults());
    world.insert_resource(DrawList::default());
    setup_audio(world)
}

pub struct Simulation {
    world: World,
    schedule: Schedule,
    audio_rx: Receiver<AudioCmd>,
}

impl Simulation {
    pub fn new(config: SimConfig, seed: u64) -> Self {
        let mut world = World::new();
        let audio_rx = insert_resources(&mut world, config, seed);
        info!(
            "simulation created: world {}x{}, seed {}",
            config.world_width, config.world_height, seed
        );
        Self {
            world,
            schedule: frame_schedule(),
            audio_rx,
        }
    }

    /// Load `path` over the default configuration and build a simulation from it.
    pub fn from_config_file(path: impl AsRef<Path>, seed: u64) -> Result<Self, SimError> {
        let mut config = SimConfig::new();
        config.load_from_file(path)?;
        Ok(Self::new(config, seed))
    }

    /// Spawn the player ship at the respawn point.
    pub fn spawn_player(&mut self) -> Entity {
        let config = *self.world.resource::<SimConfig>();
        let bounds = *self.world.resource::<WorldBounds>();
        self.world.spawn(factory::player(&config, &bounds)).id()
    }

    /// Spawn a spawner entity for `producer` using its configured interval.
    pub fn spawn_spawner(&mut self, producer: SpawnProducer) -> Entity {
        let config = *self.world.resource::<SimConfig>();
        self.world.spawn(factory::spawner(producer, &config)).id()
    }

    /// Player ship plus the power-up, starfield and asteroid spawners.
    /// Returns the player.
    pub fn spawn_scene(&mut self) -> Entity {
        let player = self.spawn_player();
        for producer in [
            SpawnProducer::PowerUps,
            SpawnProducer::Starfield,
            SpawnProducer::Asteroids,
        ] {
            self.spawn_spawner(producer);
        }
        player
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// Fails when the entity pool is over capacity and nothing expendable is
    /// left to evict. The frame has still been fully applied.
    pub fn step(&mut self, dt: f32) -> Result<(), SimError> {
        update_world_time(&mut self.world, dt);
        self.schedule.run(&mut self.world);
        self.world.clear_trackers();
        self.world.resource_mut::<InputState>().end_frame();

        let pool = *self.world.resource::<EntityPool>();
        match (pool.exhausted, pool.capacity) {
            (Some(live), Some(capacity)) => Err(SimError::PoolExhausted { live, capacity }),
            _ => Ok(()),
        }
    }

    pub fn create(&mut self) -> Entity {
        self.world.spawn_empty().id()
    }

    /// Mark `entity` for removal at the end of the next step.
    /// Returns false if it is not alive.
    pub fn destroy(&mut self, entity: Entity) -> bool {
        if !self.is_alive(entity) {
            return false;
        }
        reactions::mark_destroyed(&mut self.world, entity);
        true
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        reactions::is_alive(&self.world, entity)
    }

    /// Insert or replace a component. Returns false if the entity does not exist.
    pub fn add_component<T: Component>(&mut self, entity: Entity, value: T) -> bool {
        match self.world.get_entity_mut(entity) {
            Ok(mut e) => {
                e.insert(value);
                true
            }
            Err(_) => false,
        }
    }

    pub fn get_component<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.world.get::<T>(entity)
    }

    pub fn get_component_mut<T: Component<Mutability = Mutable>>(
        &mut self,
        entity: Entity,
    ) -> Option<Mut<'_, T>> {
        self.world.get_mut::<T>(entity)
    }

    pub fn has_component<T: Component>(&self, entity: Entity) -> bool {
        self.world
            .get_entity(entity)
            .is_ok_and(|e| e.contains::<T>())
    }

    /// Snapshot of live entities matching `F`, e.g.
    /// `sim.query::<(With<Transform>, With<Movement>)>()`.
    ///
    /// The returned list does not change when entities are created or
    /// destroyed afterwards.
    pub fn query<F: QueryFilter>(&mut self) -> Vec<Entity> {
        let mut query = self
            .world
            .query_filtered::<Entity, (F, Without<PendingDestroy>)>();
        let mut entities: Vec<Entity> = query.iter(&self.world).collect();
        entities.sort();
        entities
    }

    pub fn input_mut(&mut self) -> Mut<'_, InputState> {
        self.world.resource_mut::<InputState>()
    }

    /// Viewport collaborator reports a new size.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.world.resource_mut::<WorldBounds>().resize(width, height);
    }

    pub fn bounds(&self) -> WorldBounds {
        *self.world.resource::<WorldBounds>()
    }

    pub fn config(&self) -> &SimConfig {
        self.world.resource::<SimConfig>()
    }

    pub fn time(&self) -> WorldTime {
        *self.world.resource::<WorldTime>()
    }

    pub fn draw_list(&self) -> &DrawList {
        self.world.resource::<DrawList>()
    }

    pub fn collision_log(&self) -> &CollisionLog {
        self.world.resource::<CollisionLog>()
    }

    pub fn assets(&self) -> &AssetCatalog {
        self.world.resource::<AssetCatalog>()
    }

    /// Receiver of the audio commands produced so far.
    pub fn audio(&self) -> &Receiver<AudioCmd> {
        &self.audio_rx
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}

impl Drop for Simulation {
    fn drop(&mut self) {
        shutdown_audio(&mut self.world);
    }
}
