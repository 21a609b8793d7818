//! Collision system.
//!
//! An exclusive system so reactions can reach any component of either
//! participant. Each pass:
//!
//! 1. snapshots every live, non-degenerate collider in world space
//! 2. tests each unordered pair (bounding boxes first, then separating axes)
//! 3. pushes overlapping solid pairs apart by half the minimum translation
//!    each, one pair at a time, repeating until no solid pair overlaps
//! 4. diffs the overlapping set against last frame's to get enter, while and
//!    exit transitions
//! 5. dispatches both participants' reactions, checking liveness before each
//!
//! Reactions may destroy entities; a destroyed entity gets no further
//! callbacks this pass and drops out of the tracked set.
use bevy_ecs::prelude::*;
use glam::Vec2;
use log::trace;
use rustc_hash::FxHashSet;

use crate::components::collider::{Collider, Vertices, bounding_box, boxes_overlap, separation};
use crate::components::lifecycle::PendingDestroy;
use crate::components::reaction::CollisionPhase;
use crate::components::transform::Transform;
use crate::events::collision::CollisionEvent;
use crate::resources::collisionpairs::{CollisionLog, CollisionPairs, PairKey, pair_key};
use crate::systems::reactions::{is_alive, react};

/// Upper bound on separation sweeps over the solid bodies per pass.
const SEPARATION_ITERATIONS: usize = 16;

#[derive(Clone)]
struct Body {
    entity: Entity,
    solid: bool,
    vertices: Vertices,
    bounds: (Vec2, Vec2),
}

impl Body {
    fn translate(&mut self, offset: Vec2) {
        for v in self.vertices.iter_mut() {
            *v += offset;
        }
        self.bounds.0 += offset;
        self.bounds.1 += offset;
    }
}

/// Push overlapping solid bodies apart and return the total offset per entity.
///
/// Each pair is resolved against the positions left by the pairs before it,
/// so a body squeezed from both sides ends up moving. Sweeps repeat until
/// one finds nothing to resolve or the iteration cap is hit.
fn separate_solids(bodies: &[Body]) -> Vec<(Entity, Vec2)> {
    let mut solids: Vec<Body> = bodies.iter().filter(|b| b.solid).cloned().collect();
    let mut offsets = vec![Vec2::ZERO; solids.len()];

    for _ in 0..SEPARATION_ITERATIONS {
        let mut resolved = false;
        for i in 0..solids.len() {
            for j in i + 1..solids.len() {
                if !boxes_overlap(solids[i].bounds, solids[j].bounds) {
                    continue;
                }
                let Some(mtv) = separation(&solids[i].vertices, &solids[j].vertices) else {
                    continue;
                };
                let half = mtv * 0.5;
                solids[i].translate(-half);
                solids[j].translate(half);
                offsets[i] -= half;
                offsets[j] += half;
                resolved = true;
            }
        }
        if !resolved {
            break;
        }
    }

    solids
        .iter()
        .zip(offsets)
        .filter(|(_, offset)| *offset != Vec2::ZERO)
        .map(|(body, offset)| (body.entity, offset))
        .collect()
}

pub fn collision_system(world: &mut World) {
    world.resource_mut::<CollisionLog>().clear();

    let mut bodies: Vec<Body> = {
        let mut query =
            world.query_filtered::<(Entity, &Transform, &Collider), Without<PendingDestroy>>();
        query
            .iter(world)
            .filter(|(_, _, collider)| !collider.body.is_degenerate())
            .map(|(entity, transform, collider)| {
                let vertices = collider.body.world_vertices(transform);
                Body {
                    entity,
                    solid: collider.solid,
                    bounds: bounding_box(&vertices),
                    vertices,
                }
            })
            .collect()
    };
    // Stable pair order for dispatch.
    bodies.sort_by_key(|b| b.entity);

    let mut overlapping: Vec<PairKey> = Vec::new();
    for (i, a) in bodies.iter().enumerate() {
        for b in &bodies[i + 1..] {
            if !boxes_overlap(a.bounds, b.bounds) {
                continue;
            }
            if separation(&a.vertices, &b.vertices).is_some() {
                overlapping.push(pair_key(a.entity, b.entity));
            }
        }
    }

    for (entity, offset) in separate_solids(&bodies) {
        if let Some(mut transform) = world.get_mut::<Transform>(entity) {
            transform.position += offset;
        }
    }

    let current: FxHashSet<PairKey> = overlapping.iter().copied().collect();
    let transitions: Vec<CollisionEvent> = {
        let previous = world.resource::<CollisionPairs>();
        let mut transitions: Vec<CollisionEvent> = overlapping
            .iter()
            .map(|&(a, b)| CollisionEvent {
                a,
                b,
                phase: if previous.contains(a, b) {
                    CollisionPhase::While
                } else {
                    CollisionPhase::Enter
                },
            })
            .collect();
        let mut exits: Vec<PairKey> = previous.active.difference(&current).copied().collect();
        exits.sort();
        transitions.extend(exits.into_iter().map(|(a, b)| CollisionEvent {
            a,
            b,
            phase: CollisionPhase::Exit,
        }));
        transitions
    };

    for event in &transitions {
        // Exit is only reported between two live entities.
        if !(is_alive(world, event.a) && is_alive(world, event.b)) {
            continue;
        }
        react(world, event.a, event.b, event.phase);
        if is_alive(world, event.a) && is_alive(world, event.b) {
            react(world, event.b, event.a, event.phase);
        }
        trace!("{:?} {:?} <-> {:?}", event.phase, event.a, event.b);
        world.resource_mut::<CollisionLog>().events.push(*event);
    }

    let still_touching: FxHashSet<PairKey> = current
        .into_iter()
        .filter(|&(a, b)| is_alive(world, a) && is_alive(world, b))
        .collect();
    world.resource_mut::<CollisionPairs>().active = still_touching;
}
