//! Player control system.
//!
//! Drives each player ship through its control states once per frame:
//!
//! - `Alive`: turn intent into a heading (refusing moves that would cross the
//!   play area), tick the shot cooldown and fire volleys.
//! - `DyingReset`: health hit zero with lives left. The ship is hidden,
//!   stopped, stripped of upgrades and moved to the respawn point.
//! - `RespawnWait`: hidden until the health system runs the respawn timer out.
//! - `Respawned`: a life is spent, health and visibility are restored and a
//!   fresh invincibility window starts.
//! - `OutOfLives`: terminal. Collider, sprites and movement are removed so
//!   the ship stops interacting; `Player` and `Health` stay readable.
//!
//! Time alive is counted in whole seconds from the frame delta.
use bevy_ecs::prelude::*;
use glam::Vec2;
use log::{debug, info};

use crate::components::collider::Collider;
use crate::components::health::Health;
use crate::components::lifecycle::PendingDestroy;
use crate::components::movement::Movement;
use crate::components::player::{Player, PlayerState};
use crate::components::sprite::SpriteList;
use crate::components::transform::Transform;
use crate::events::audio::AudioCmd;
use crate::factory::{bullet_pattern, lerp, player_bullet, respawn_point};
use crate::resources::assets::{self, AssetCatalog};
use crate::resources::simconfig::SimConfig;
use crate::resources::worldbounds::WorldBounds;
use crate::resources::worldtime::WorldTime;

/// Sprite alpha while invincible.
const INVINCIBLE_ALPHA: f32 = 0.5;

type PlayerQuery<'w, 's> = Query<
    'w,
    's,
    (
        Entity,
        &'static mut Player,
        &'static mut Health,
        &'static mut Transform,
        Option<&'static mut Movement>,
        Option<&'static mut SpriteList>,
    ),
    Without<PendingDestroy>,
>;

pub fn player_control_system(
    mut commands: Commands,
    mut query: PlayerQuery,
    time: Res<WorldTime>,
    config: Res<SimConfig>,
    bounds: Res<WorldBounds>,
    catalog: Res<AssetCatalog>,
    mut audio: MessageWriter<AudioCmd>,
) {
    let dt = time.delta;
    for (entity, mut player, mut health, mut transform, mut movement, mut sprites) in
        query.iter_mut()
    {
        if player.state == PlayerState::OutOfLives {
            continue;
        }

        player.alive_clock += dt;
        while player.alive_clock >= 1.0 {
            player.alive_clock -= 1.0;
            player.time_alive += 1;
        }

        if player.lives == 0 {
            player.state = PlayerState::OutOfLives;
            player.clear_intent();
            commands
                .entity(entity)
                .try_remove::<(Collider, SpriteList, Movement)>();
            info!(
                "player {:?} is out of lives after {}s, {} shots",
                entity, player.time_alive, player.shots_fired
            );
            continue;
        }

        if player.revive {
            if health.respawn_timer > 0.0 {
                player.state = PlayerState::RespawnWait;
                continue;
            }
            player.lives -= 1;
            health.heal_full();
            health.grant_invincibility();
            if let Some(sprites) = sprites.as_deref_mut() {
                sprites.set_base_alpha(1.0);
            }
            player.revive = false;
            player.state = PlayerState::Respawned;
            info!("player {:?} respawned, {} lives left", entity, player.lives);
            continue;
        }

        if health.percent() <= 0.0 {
            if let Some(sprites) = sprites.as_deref_mut() {
                sprites.set_base_alpha(0.0);
            }
            if let Some(movement) = movement.as_deref_mut() {
                movement.stop();
            }
            player.clear_intent();
            player.reset_upgrades();
            player.shots_per_second = config.base_fire_rate;
            player.shoot_timer = 1.0;
            let at = respawn_point(&config, &bounds);
            transform.position = at - transform.origin;
            health.arm_respawn();
            player.revive = true;
            player.state = PlayerState::DyingReset;
            info!("player {:?} died, respawning", entity);
            continue;
        }

        player.state = PlayerState::Alive;

        if let Some(movement) = movement.as_deref_mut() {
            let speed = lerp(
                config.base_speed,
                config.max_speed,
                Player::level_fraction(player.up_speed),
            );
            movement.speed = speed;
            let step = speed * dt;
            if player.up == 1 && transform.top() + step > bounds.play_area_top {
                player.up = 0;
            }
            if player.down == 1 && transform.position.y - step < bounds.floor {
                player.down = 0;
            }
            if player.left == 1 && transform.position.x - step < 0.0 {
                player.left = 0;
            }
            if player.right == 1 && transform.position.x + transform.size.x + step > bounds.width {
                player.right = 0;
            }
            movement.set_direction(
                f32::from(player.right) - f32::from(player.left),
                f32::from(player.up) - f32::from(player.down),
            );
        }

        player.shots_per_second = lerp(
            config.base_fire_rate,
            config.max_fire_rate,
            Player::level_fraction(player.up_fire_rate),
        );
        player.shoot_timer = (player.shoot_timer - player.shots_per_second * dt).clamp(0.0, 1.0);

        if player.shoot && player.shoot_timer <= 0.0 {
            let pivot = transform.pivot();
            let top = transform.top();
            let pattern = bullet_pattern(player.up_bullet_damage);
            for slot in &pattern {
                let at = Vec2::new(pivot.x + slot.dx, top + slot.dy);
                commands.spawn(player_bullet(at, slot.angle, &config, &bounds));
            }
            let fired = 1 + u32::from(player.up_bullet_damage);
            player.shoot_timer = 1.0;
            player.shots_fired += fired;
            debug!("player {:?} fired {} bullets", entity, pattern.len());
            if let Some(cue) = catalog.get(assets::LASER_SHOOT) {
                audio.write(AudioCmd::PlayFx {
                    cue,
                    volume: config.sfx_volume,
                });
            }
        }

        if let Some(sprites) = sprites.as_deref_mut() {
            let alpha = if health.invincible {
                INVINCIBLE_ALPHA
            } else {
                1.0
            };
            sprites.set_base_alpha(alpha);
        }
    }
}
