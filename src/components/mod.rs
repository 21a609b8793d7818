//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the simulation. Components are plain data; behaviour lives in
//! [`crate::systems`].
//!
//! Submodules overview:
//! - [`bullet`] – marker for player projectiles
//! - [`collider`] – convex polygon collider and separating-axis helpers
//! - [`health`] – health, invincibility window and respawn timer
//! - [`lifecycle`] – deferred-destroy liveness marker and pool eviction marker
//! - [`lifetime`] – countdown after which an entity expires
//! - [`movement`] – unit heading and speed
//! - [`player`] – player intent, upgrades, counters and control state
//! - [`reaction`] – tagged collision reactions and contact phases
//! - [`spawner`] – randomised timer and pure entity producer
//! - [`sprite`] – ordered sprite layers, tint and z-index
//! - [`transform`] – position, size, pivot and rotation

pub mod bullet;
pub mod collider;
pub mod health;
pub mod lifecycle;
pub mod lifetime;
pub mod movement;
pub mod player;
pub mod reaction;
pub mod spawner;
pub mod sprite;
pub mod transform;
