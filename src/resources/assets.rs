//! Logical asset keys and the opaque handles the host resolves them to.
//!
//! The simulation refers to sprites and sound cues by name only. The host
//! registers each key once and receives an [`AssetHandle`]; the draw list and
//! audio commands carry handles, never file paths or pixel data.

use bevy_ecs::prelude::Resource;
use log::warn;
use rustc_hash::FxHashMap;

pub const PLAYER: &str = "player";
pub const BULLET: &str = "bullet";
pub const UPGRADE_BASE: &str = "upgrade_base";
pub const UP_ARROW: &str = "up_arrow";
pub const STAR: &str = "star1";
pub const ASTEROID: &str = "asteroid";
pub const LASER_SHOOT: &str = "laser_shoot";
pub const POWERUP: &str = "powerup";

/// Every key the simulation may ask for.
pub const ALL_KEYS: [&str; 8] = [
    PLAYER,
    BULLET,
    UPGRADE_BASE,
    UP_ARROW,
    STAR,
    ASTEROID,
    LASER_SHOOT,
    POWERUP,
];

/// Opaque handle to a host-side asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetHandle(pub u32);

/// Registry from logical key to handle.
#[derive(Resource, Debug, Default)]
pub struct AssetCatalog {
    map: FxHashMap<&'static str, AssetHandle>,
    keys: Vec<&'static str>,
}

impl AssetCatalog {
    /// Catalog with every key in [`ALL_KEYS`] registered in order.
    pub fn with_defaults() -> Self {
        let mut catalog = Self::default();
        for key in ALL_KEYS {
            catalog.register(key);
        }
        catalog
    }

    /// Register `key`, returning its handle. Registering twice returns the same handle.
    pub fn register(&mut self, key: &'static str) -> AssetHandle {
        if let Some(handle) = self.map.get(key) {
            return *handle;
        }
        let handle = AssetHandle(self.keys.len() as u32);
        self.keys.push(key);
        self.map.insert(key, handle);
        handle
    }

    pub fn get(&self, key: &str) -> Option<AssetHandle> {
        let handle = self.map.get(key).copied();
        if handle.is_none() {
            warn!("asset '{}' is not registered", key);
        }
        handle
    }

    /// Logical key behind `handle`.
    pub fn key(&self, handle: AssetHandle) -> Option<&'static str> {
        self.keys.get(handle.0 as usize).copied()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_is_idempotent() {
        let mut catalog = AssetCatalog::default();
        let a = catalog.register(PLAYER);
        let b = catalog.register(PLAYER);
        assert_eq!(a, b);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn defaults_resolve_both_ways() {
        let catalog = AssetCatalog::with_defaults();
        let handle = catalog.get(LASER_SHOOT).unwrap();
        assert_eq!(catalog.key(handle), Some(LASER_SHOOT));
        assert!(catalog.get("missing").is_none());
    }
}
