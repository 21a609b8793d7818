//! Render output of a frame.
//!
//! [`crate::systems::render::build_draw_list`] fills [`DrawList`] at the end
//! of every step. The host composites the items in order; the simulation
//! issues no draw calls.
use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::sprite::Tint;
use crate::resources::assets::AssetHandle;

/// One sprite layer of one entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    pub entity: Entity,
    pub sprite: AssetHandle,
    pub z_index: i32,
    /// World-space pivot of the owning entity.
    pub position: Vec2,
    pub size: Vec2,
    /// Pivot relative to the top-left corner of the sprite.
    pub origin: Vec2,
    /// Degrees, counter-clockwise.
    pub rotation: f32,
    pub tint: Tint,
    pub alpha: f32,
}

/// Draw items sorted by z-index; layers of one entity stay bottom-to-top.
#[derive(Resource, Debug, Default)]
pub struct DrawList {
    pub items: Vec<DrawItem>,
}

impl DrawList {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
