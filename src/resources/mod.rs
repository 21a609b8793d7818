//! ECS resources made available to systems.
//!
//! Long-lived data injected into the world: timing, bounds, configuration,
//! collaborator seams and the bookkeeping of stateful systems.
//!
//! Overview
//! - `assets` – logical asset keys and opaque handles
//! - `audio` – channel bridge to the host's audio thread
//! - `collisionpairs` – pairs overlapping last frame and the per-pass transition log
//! - `drawlist` – render output built at the end of every step
//! - `entitypool` – live-object capacity and exhaustion flag
//! - `input` – per-frame state of the logical key set
//! - `rng` – seeded random generator
//! - `simconfig` – INI-backed tuning values
//! - `worldbounds` – viewport size and player play area
//! - `worldtime` – simulation time and delta
pub mod assets;
pub mod audio;
pub mod collisionpairs;
pub mod drawlist;
pub mod entitypool;
pub mod input;
pub mod rng;
pub mod simconfig;
pub mod worldbounds;
pub mod worldtime;
