//! Simulation configuration resource.
//!
//! Tuning values loaded from an INI file. Every key is optional; missing keys
//! keep their defaults so a partial or absent file still yields a playable
//! simulation.
//!
//! # Configuration File Format
//!
//! ```ini
//! [world]
//! width = 480
//! height = 640
//! play_area_top_ratio = 0.75
//! floor = 64
//!
//! [player]
//! lives = 3
//! max_health = 100
//! invincibility = 1.5
//! respawn = 2.0
//! respawn_height = 128
//! base_speed = 180
//! max_speed = 300
//! base_fire_rate = 5
//! max_fire_rate = 10
//! bullet_speed = 600
//! bullet_damage = 10
//!
//! [spawners]
//! power_up_min = 2
//! power_up_max = 4
//! star_min = 0.02
//! star_max = 0.05
//! asteroid_min = 1.5
//! asteroid_max = 3
//! asteroid_damage = 25
//! asteroid_health = 30
//!
//! [pool]
//! capacity = 2048
//!
//! [audio]
//! sfx_volume = 0.8
//! ```

use std::path::Path;

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;

use crate::error::SimError;
use crate::resources::worldbounds::WorldBounds;

const DEFAULT_WORLD_WIDTH: f32 = 480.0;
const DEFAULT_WORLD_HEIGHT: f32 = 640.0;
const DEFAULT_PLAY_AREA_TOP_RATIO: f32 = 0.75;
const DEFAULT_FLOOR: f32 = 64.0;
const DEFAULT_LIVES: u32 = 3;
const DEFAULT_MAX_HEALTH: f32 = 100.0;
const DEFAULT_INVINCIBILITY: f32 = 1.5;
const DEFAULT_RESPAWN: f32 = 2.0;
const DEFAULT_RESPAWN_HEIGHT: f32 = 128.0;
const DEFAULT_BASE_SPEED: f32 = 180.0;
const DEFAULT_MAX_SPEED: f32 = 300.0;
const DEFAULT_BASE_FIRE_RATE: f32 = 5.0;
const DEFAULT_MAX_FIRE_RATE: f32 = 10.0;
const DEFAULT_BULLET_SPEED: f32 = 600.0;
const DEFAULT_BULLET_DAMAGE: f32 = 10.0;
const DEFAULT_POOL_CAPACITY: usize = 2048;
const DEFAULT_SFX_VOLUME: f32 = 0.8;

/// Simulation tuning.
///
/// All fields are plain values so the resource is cheap to copy into
/// factories and systems.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    pub world_width: f32,
    pub world_height: f32,
    /// Upper limit of the player area as a fraction of the world height.
    pub play_area_top_ratio: f32,
    /// Lowest y the player ship may reach.
    pub floor: f32,

    pub lives: u32,
    pub max_health: f32,
    /// Invincibility window after a hit or respawn, in seconds.
    pub invincibility: f32,
    /// Delay between death and respawn, in seconds.
    pub respawn: f32,
    /// Height of the respawn point's pivot.
    pub respawn_height: f32,
    pub base_speed: f32,
    pub max_speed: f32,
    /// Shots per second at fire-rate level 0.
    pub base_fire_rate: f32,
    /// Shots per second at the maximum fire-rate level.
    pub max_fire_rate: f32,
    pub bullet_speed: f32,
    pub bullet_damage: f32,

    pub power_up_min: f32,
    pub power_up_max: f32,
    pub star_min: f32,
    pub star_max: f32,
    pub asteroid_min: f32,
    pub asteroid_max: f32,
    pub asteroid_damage: f32,
    pub asteroid_health: f32,

    /// Maximum number of live world objects.
    pub pool_capacity: usize,

    pub sfx_volume: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SimConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            world_width: DEFAULT_WORLD_WIDTH,
            world_height: DEFAULT_WORLD_HEIGHT,
            play_area_top_ratio: DEFAULT_PLAY_AREA_TOP_RATIO,
            floor: DEFAULT_FLOOR,
            lives: DEFAULT_LIVES,
            max_health: DEFAULT_MAX_HEALTH,
            invincibility: DEFAULT_INVINCIBILITY,
            respawn: DEFAULT_RESPAWN,
            respawn_height: DEFAULT_RESPAWN_HEIGHT,
            base_speed: DEFAULT_BASE_SPEED,
            max_speed: DEFAULT_MAX_SPEED,
            base_fire_rate: DEFAULT_BASE_FIRE_RATE,
            max_fire_rate: DEFAULT_MAX_FIRE_RATE,
            bullet_speed: DEFAULT_BULLET_SPEED,
            bullet_damage: DEFAULT_BULLET_DAMAGE,
            power_up_min: 2.0,
            power_up_max: 4.0,
            star_min: 0.02,
            star_max: 0.05,
            asteroid_min: 1.5,
            asteroid_max: 3.0,
            asteroid_damage: 25.0,
            asteroid_health: 30.0,
            pool_capacity: DEFAULT_POOL_CAPACITY,
            sfx_volume: DEFAULT_SFX_VOLUME,
        }
    }

    /// Load configuration from an INI file.
    ///
    /// Missing values retain their current values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<(), SimError> {
        let path = path.as_ref();
        let mut ini = Ini::new();
        ini.load(path)
            .map_err(|e| SimError::Config(format!("{}: {}", path.display(), e)))?;

        let float = |section: &str, key: &str, target: &mut f32| {
            if let Some(v) = ini.getfloat(section, key).ok().flatten() {
                *target = v as f32;
            }
        };

        // [world]
        float("world", "width", &mut self.world_width);
        float("world", "height", &mut self.world_height);
        float("world", "play_area_top_ratio", &mut self.play_area_top_ratio);
        float("world", "floor", &mut self.floor);

        // [player]
        if let Some(lives) = ini.getuint("player", "lives").ok().flatten() {
            self.lives = lives as u32;
        }
        float("player", "max_health", &mut self.max_health);
        float("player", "invincibility", &mut self.invincibility);
        float("player", "respawn", &mut self.respawn);
        float("player", "respawn_height", &mut self.respawn_height);
        float("player", "base_speed", &mut self.base_speed);
        float("player", "max_speed", &mut self.max_speed);
        float("player", "base_fire_rate", &mut self.base_fire_rate);
        float("player", "max_fire_rate", &mut self.max_fire_rate);
        float("player", "bullet_speed", &mut self.bullet_speed);
        float("player", "bullet_damage", &mut self.bullet_damage);

        // [spawners]
        float("spawners", "power_up_min", &mut self.power_up_min);
        float("spawners", "power_up_max", &mut self.power_up_max);
        float("spawners", "star_min", &mut self.star_min);
        float("spawners", "star_max", &mut self.star_max);
        float("spawners", "asteroid_min", &mut self.asteroid_min);
        float("spawners", "asteroid_max", &mut self.asteroid_max);
        float("spawners", "asteroid_damage", &mut self.asteroid_damage);
        float("spawners", "asteroid_health", &mut self.asteroid_health);

        // [pool]
        if let Some(capacity) = ini.getuint("pool", "capacity").ok().flatten() {
            self.pool_capacity = capacity as usize;
        }

        // [audio]
        float("audio", "sfx_volume", &mut self.sfx_volume);

        info!(
            "Loaded config from {}: world {}x{}, lives={}, pool capacity={}",
            path.display(),
            self.world_width,
            self.world_height,
            self.lives,
            self.pool_capacity
        );

        Ok(())
    }

    /// Save configuration to an INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), SimError> {
        let path = path.as_ref();
        let mut ini = Ini::new();
        let mut set = |section: &str, key: &str, value: String| {
            ini.set(section, key, Some(value));
        };

        set("world", "width", self.world_width.to_string());
        set("world", "height", self.world_height.to_string());
        set("world", "play_area_top_ratio", self.play_area_top_ratio.to_string());
        set("world", "floor", self.floor.to_string());

        set("player", "lives", self.lives.to_string());
        set("player", "max_health", self.max_health.to_string());
        set("player", "invincibility", self.invincibility.to_string());
        set("player", "respawn", self.respawn.to_string());
        set("player", "respawn_height", self.respawn_height.to_string());
        set("player", "base_speed", self.base_speed.to_string());
        set("player", "max_speed", self.max_speed.to_string());
        set("player", "base_fire_rate", self.base_fire_rate.to_string());
        set("player", "max_fire_rate", self.max_fire_rate.to_string());
        set("player", "bullet_speed", self.bullet_speed.to_string());
        set("player", "bullet_damage", self.bullet_damage.to_string());

        set("spawners", "power_up_min", self.power_up_min.to_string());
        set("spawners", "power_up_max", self.power_up_max.to_string());
        set("spawners", "star_min", self.star_min.to_string());
        set("spawners", "star_max", self.star_max.to_string());
        set("spawners", "asteroid_min", self.asteroid_min.to_string());
        set("spawners", "asteroid_max", self.asteroid_max.to_string());
        set("spawners", "asteroid_damage", self.asteroid_damage.to_string());
        set("spawners", "asteroid_health", self.asteroid_health.to_string());

        set("pool", "capacity", self.pool_capacity.to_string());
        set("audio", "sfx_volume", self.sfx_volume.to_string());

        ini.write(path)
            .map_err(|e| SimError::Config(format!("{}: {}", path.display(), e)))?;

        info!("Saved config to {}", path.display());

        Ok(())
    }

    /// World bounds derived from this configuration.
    pub fn world_bounds(&self) -> WorldBounds {
        WorldBounds::new(
            self.world_width,
            self.world_height,
            self.play_area_top_ratio,
            self.floor,
        )
    }
}
