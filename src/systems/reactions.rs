//! Collision reaction dispatch.
//!
//! [`react`] runs the reaction of one participant of a contact transition.
//! The collision system calls it once per side. Each effect of a contact is
//! owned by exactly one side:
//!
//! - a bullet damages the hazard it hits and consumes itself
//! - a hazard damages the player and shatters if the damage landed
//! - a power-up upgrades the player and consumes itself
//!
//! so when the first side's handler destroys an entity and the second side is
//! skipped, no effect is lost.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::collider::Collider;
use crate::components::health::Health;
use crate::components::lifecycle::PendingDestroy;
use crate::components::player::{Player, PlayerState};
use crate::components::reaction::{CollisionPhase, CollisionReaction, PowerUpKind};
use crate::events::audio::AudioCmd;
use crate::resources::assets::{self, AssetCatalog};
use crate::resources::simconfig::SimConfig;

/// Whether `entity` exists and has not been marked for destruction.
pub fn is_alive(world: &World, entity: Entity) -> bool {
    world
        .get_entity(entity)
        .is_ok_and(|e| !e.contains::<PendingDestroy>())
}

/// Flip the liveness of `entity`; it is despawned at frame end.
pub fn mark_destroyed(world: &mut World, entity: Entity) {
    if let Ok(mut e) = world.get_entity_mut(entity) {
        e.insert(PendingDestroy);
    }
}

/// Run the reaction of `me` to a contact with `other`.
pub fn react(world: &mut World, me: Entity, other: Entity, phase: CollisionPhase) {
    let Some(reaction) = world.get::<Collider>(me).map(|c| c.reaction) else {
        return;
    };
    match (reaction, phase) {
        (CollisionReaction::Inert, _) => {}
        (CollisionReaction::PlayerBullet { damage }, CollisionPhase::Enter) => {
            bullet_hit(world, me, other, damage)
        }
        (CollisionReaction::Hazard { damage }, CollisionPhase::Enter | CollisionPhase::While) => {
            hazard_contact(world, me, other, damage)
        }
        (CollisionReaction::PowerUp(kind), CollisionPhase::Enter) => {
            collect(world, me, other, kind)
        }
        _ => {}
    }
}

/// Player that can currently be hit or collect power-ups.
fn active_player(world: &World, entity: Entity) -> bool {
    world
        .get::<Player>(entity)
        .is_some_and(|p| !p.revive && p.state != PlayerState::OutOfLives)
}

fn bullet_hit(world: &mut World, bullet: Entity, target: Entity, damage: f32) {
    let is_hazard = world
        .get::<Collider>(target)
        .is_some_and(|c| c.reaction.is_hazard());
    if !is_hazard {
        return;
    }
    if let Some(mut health) = world.get_mut::<Health>(target) {
        health.take_damage(damage);
        if health.is_dead() {
            debug!("{:?} destroyed by bullet {:?}", target, bullet);
            mark_destroyed(world, target);
        }
    }
    mark_destroyed(world, bullet);
}

fn hazard_contact(world: &mut World, hazard: Entity, target: Entity, damage: f32) {
    if !active_player(world, target) {
        return;
    }
    let landed = world
        .get_mut::<Health>(target)
        .is_some_and(|mut health| health.take_damage(damage));
    if landed {
        debug!("hazard {:?} hit player {:?} for {}", hazard, target, damage);
        mark_destroyed(world, hazard);
    }
}

fn collect(world: &mut World, power_up: Entity, target: Entity, kind: PowerUpKind) {
    if !active_player(world, target) {
        return;
    }
    match kind {
        PowerUpKind::Health => {
            if let Some(mut health) = world.get_mut::<Health>(target) {
                health.heal_full();
            }
        }
        PowerUpKind::FireRate | PowerUpKind::Speed | PowerUpKind::BulletDamage => {
            if let Some(mut player) = world.get_mut::<Player>(target) {
                let level = match kind {
                    PowerUpKind::FireRate => &mut player.up_fire_rate,
                    PowerUpKind::Speed => &mut player.up_speed,
                    _ => &mut player.up_bullet_damage,
                };
                Player::upgrade(level);
            }
        }
    }
    debug!("player {:?} collected {:?}", target, kind);
    mark_destroyed(world, power_up);

    let cue = world
        .get_resource::<AssetCatalog>()
        .and_then(|catalog| catalog.get(assets::POWERUP));
    let volume = world
        .get_resource::<SimConfig>()
        .map_or(1.0, |config| config.sfx_volume);
    if let (Some(cue), Some(mut messages)) = (cue, world.get_resource_mut::<Messages<AudioCmd>>())
    {
        messages.write(AudioCmd::PlayFx { cue, volume });
    }
}
