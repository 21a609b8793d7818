//! Draw list construction.
//!
//! The simulation draws nothing. At the end of every step this system
//! flattens each visible entity's sprite layers into [`DrawList`], ordered by
//! z-index (then entity, for a stable order); the layers of one entity keep
//! their bottom-to-top order.
use bevy_ecs::prelude::*;

use crate::components::lifecycle::PendingDestroy;
use crate::components::sprite::SpriteList;
use crate::components::transform::Transform;
use crate::resources::assets::AssetCatalog;
use crate::resources::drawlist::{DrawItem, DrawList};

pub fn build_draw_list(
    mut list: ResMut<DrawList>,
    catalog: Res<AssetCatalog>,
    query: Query<(Entity, &Transform, &SpriteList), Without<PendingDestroy>>,
) {
    list.items.clear();
    for (entity, transform, sprites) in query.iter() {
        for layer in &sprites.layers {
            let Some(sprite) = catalog.get(layer.key) else {
                continue;
            };
            list.items.push(DrawItem {
                entity,
                sprite,
                z_index: sprites.z_index,
                position: transform.pivot(),
                size: transform.size,
                origin: transform.origin,
                rotation: transform.rotation,
                tint: layer.tint,
                alpha: layer.alpha,
            });
        }
    }
    // Stable: layers of one entity stay in order.
    list.items
        .sort_by(|a, b| a.z_index.cmp(&b.z_index).then(a.entity.cmp(&b.entity)));
}
