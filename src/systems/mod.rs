//! ECS systems that advance the simulation.
//!
//! Each submodule contains one concern of the frame. The order they run in
//! is fixed by [`crate::simulation::frame_schedule`].
//!
//! Overview
//! - `audio` – rotate audio message buffers and forward commands to the host
//! - `collision` – polygon overlap, solid separation and contact transitions
//! - `health` – invincibility and respawn countdowns
//! - `input` – copy held keys into player intent
//! - `lifecycle` – pool capacity eviction and end-of-frame reclaim
//! - `lifetime` – expire entities whose time budget ran out
//! - `movement` – integrate positions from heading and speed
//! - `playercontrol` – player state machine, bounds, cadence and volleys
//! - `reactions` – per-participant collision reactions
//! - `render` – flatten sprite layers into the draw list
//! - `spawner` – randomised timed producers
//! - `time` – advance the simulation clock
pub mod audio;
pub mod collision;
pub mod health;
pub mod input;
pub mod lifecycle;
pub mod lifetime;
pub mod movement;
pub mod playercontrol;
pub mod reactions;
pub mod render;
pub mod spawner;
pub mod time;
