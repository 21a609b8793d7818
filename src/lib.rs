//! Stardrift simulation core.
//!
//! The ECS heart of a 2D arcade shooter: player control, projectiles,
//! spawners, polygon collision with enter/while/exit reactions, health and
//! entity lifecycle, stepped once per frame in a fixed order. Rendering,
//! audio playback, input polling and asset loading stay with the host and are
//! reached through resources ([`resources::input::InputState`],
//! [`resources::drawlist::DrawList`], the audio channel).
//!
//! Most hosts only need [`simulation::Simulation`].

pub mod components;
pub mod error;
pub mod events;
pub mod factory;
pub mod resources;
pub mod simulation;
pub mod systems;
