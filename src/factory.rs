//! Entity factory.
//!
//! Every entity the simulation creates is assembled here. Each builder
//! returns a plain component tuple that can be handed to `World::spawn` or
//! `Commands::spawn`; a reused entity slot therefore always starts from fresh
//! component values.
//!
//! Spawners describe what they want with a [`Blueprint`];
//! [`spawn_blueprint`] turns it into an entity.

use arrayvec::ArrayVec;
use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::bullet::Bullet;
use crate::components::collider::{Collider, Polygon};
use crate::components::health::Health;
use crate::components::lifecycle::Expendable;
use crate::components::lifetime::Lifetime;
use crate::components::movement::Movement;
use crate::components::player::Player;
use crate::components::reaction::{CollisionReaction, PowerUpKind};
use crate::components::spawner::{SpawnProducer, Spawner};
use crate::components::sprite::{SpriteLayer, SpriteList, Tint};
use crate::components::transform::Transform;
use crate::resources::assets;
use crate::resources::simconfig::SimConfig;
use crate::resources::worldbounds::WorldBounds;

pub const PLAYER_SIZE: Vec2 = Vec2::new(32.0, 32.0);
pub const BULLET_SIZE: Vec2 = Vec2::new(6.0, 16.0);
pub const POWER_UP_SIZE: f32 = 24.0;
pub const POWER_UP_SPEED: f32 = 120.0;

const Z_ASTEROID: i32 = 5;
const Z_POWER_UP: i32 = 8;
const Z_BULLET: i32 = 10;
const Z_PLAYER: i32 = 20;

/// Entity description produced by a spawner.
#[derive(Clone, Debug, PartialEq)]
pub enum Blueprint {
    /// Bottom-left corner at `(x, y)`.
    PowerUp { kind: PowerUpKind, x: f32, y: f32 },
    /// `z` is depth in `[0, 100]`; 0 is nearest.
    Star { x: f32, y: f32, z: u8, hue: f32 },
    /// Centre at `(x, y)`.
    Asteroid { x: f32, y: f32, radius: f32, speed: f32 },
}

/// Where one bullet of a volley leaves the ship.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BulletSlot {
    /// Horizontal offset from the ship's pivot.
    pub dx: f32,
    /// Vertical offset from the ship's top edge.
    pub dy: f32,
    /// Heading in degrees, counter-clockwise from straight up.
    pub angle: f32,
}

const fn slot(dx: f32, dy: f32, angle: f32) -> BulletSlot {
    BulletSlot { dx, dy, angle }
}

const PATTERNS: [&[BulletSlot]; 5] = [
    &[slot(0.0, 10.0, 0.0)],
    &[slot(-8.0, 10.0, 0.0), slot(8.0, 10.0, 0.0)],
    &[
        slot(0.0, 10.0, 0.0),
        slot(-16.0, 10.0, 0.0),
        slot(16.0, 10.0, 0.0),
    ],
    &[
        slot(-8.0, 10.0, 0.0),
        slot(8.0, 10.0, 0.0),
        slot(-24.0, -10.0, 6.0),
        slot(24.0, -10.0, -6.0),
    ],
    &[
        slot(0.0, 10.0, 0.0),
        slot(-16.0, 10.0, 0.0),
        slot(16.0, 10.0, 0.0),
        slot(-32.0, -10.0, 6.0),
        slot(32.0, -10.0, -6.0),
    ],
];

/// Volley shape for a bullet-damage upgrade level. Levels above 4 use level 4.
///
/// The volley always has `level + 1` bullets.
pub fn bullet_pattern(level: u8) -> ArrayVec<BulletSlot, 5> {
    let index = usize::from(level).min(PATTERNS.len() - 1);
    PATTERNS[index].iter().copied().collect()
}

/// Unit heading for an angle in degrees, counter-clockwise from +y.
pub fn heading(degrees: f32) -> Vec2 {
    Vec2::Y.rotate(Vec2::from_angle(degrees.to_radians()))
}

/// Pivot of a freshly (re)spawned player.
pub fn respawn_point(config: &SimConfig, bounds: &WorldBounds) -> Vec2 {
    Vec2::new(bounds.width * 0.5, config.respawn_height)
}

pub fn player(
    config: &SimConfig,
    bounds: &WorldBounds,
) -> (Player, Transform, Movement, Collider, SpriteList, Health) {
    let at = respawn_point(config, bounds);
    (
        Player::new(config.lives, config.base_fire_rate),
        Transform::centered_at(at.x, at.y, PLAYER_SIZE.x, PLAYER_SIZE.y),
        Movement::new(Vec2::ZERO, config.base_speed),
        Collider::solid(
            Polygon::rect(PLAYER_SIZE.x, PLAYER_SIZE.y),
            CollisionReaction::Inert,
        ),
        SpriteList::single(SpriteLayer::new(assets::PLAYER)).with_z_index(Z_PLAYER),
        Health::new(config.max_health, config.invincibility).with_respawn(config.respawn),
    )
}

/// Bullet whose centre sits at `at`, heading `angle` degrees off vertical.
pub fn player_bullet(
    at: Vec2,
    angle: f32,
    config: &SimConfig,
    bounds: &WorldBounds,
) -> (Bullet, Transform, Movement, Collider, SpriteList, Lifetime) {
    (
        Bullet,
        Transform::centered_at(at.x, at.y, BULLET_SIZE.x, BULLET_SIZE.y).with_rotation(angle),
        Movement::new(heading(angle), config.bullet_speed),
        Collider::trigger(
            Polygon::rect(BULLET_SIZE.x, BULLET_SIZE.y),
            CollisionReaction::PlayerBullet {
                damage: config.bullet_damage,
            },
        ),
        SpriteList::single(SpriteLayer::new(assets::BULLET)).with_z_index(Z_BULLET),
        Lifetime::for_travel(bounds.height, config.bullet_speed, 0.5),
    )
}

pub fn power_up(
    kind: PowerUpKind,
    x: f32,
    y: f32,
) -> (Transform, Movement, Collider, SpriteList, Lifetime) {
    (
        Transform::new(x, y, POWER_UP_SIZE, POWER_UP_SIZE),
        Movement::new(Vec2::NEG_Y, POWER_UP_SPEED),
        Collider::trigger(
            Polygon::rect(POWER_UP_SIZE, POWER_UP_SIZE),
            CollisionReaction::PowerUp(kind),
        ),
        SpriteList::single(SpriteLayer::new(assets::UPGRADE_BASE).with_tint(kind.tint()))
            .with_layer(SpriteLayer::new(assets::UP_ARROW))
            .with_z_index(Z_POWER_UP),
        // Falls from `y` past the bottom edge.
        Lifetime::for_travel(y + POWER_UP_SIZE, POWER_UP_SPEED, 1.0),
    )
}

/// Background star. Nearer stars are larger, faster and drawn on top.
pub fn star(
    x: f32,
    y: f32,
    z: u8,
    hue: f32,
    born: f32,
) -> (Transform, Movement, SpriteList, Lifetime, Expendable) {
    let nearness = 1.0 - f32::from(z.min(100)) / 100.0;
    let size = lerp(3.0, 6.0, nearness);
    let speed = lerp(180.0, 600.0, nearness);
    (
        Transform::new(x, y, size, size),
        Movement::new(Vec2::NEG_Y, speed),
        SpriteList::single(SpriteLayer::new(assets::STAR).with_tint(Tint::from_hsv(hue, 0.6, 1.0)))
            .with_z_index(-100 - i32::from(z)),
        Lifetime::for_travel(y + size, speed, 0.1),
        Expendable { born },
    )
}

/// Octagonal hazard centred at `(x, y)`, falling at `speed`.
pub fn asteroid(
    x: f32,
    y: f32,
    radius: f32,
    speed: f32,
    config: &SimConfig,
) -> (Transform, Movement, Collider, SpriteList, Health, Lifetime) {
    let diameter = radius * 2.0;
    (
        Transform::centered_at(x, y, diameter, diameter),
        Movement::new(Vec2::NEG_Y, speed),
        Collider::solid(
            Polygon::regular(8, radius),
            CollisionReaction::Hazard {
                damage: config.asteroid_damage,
            },
        ),
        SpriteList::single(SpriteLayer::new(assets::ASTEROID).with_tint(Tint::GREY))
            .with_z_index(Z_ASTEROID),
        Health::new(config.asteroid_health, 0.0),
        Lifetime::for_travel(y + diameter, speed, 1.0),
    )
}

/// Spawner entity for one of the built-in producers, with its configured interval.
pub fn spawner(producer: SpawnProducer, config: &SimConfig) -> Spawner {
    let (min, max) = match producer {
        SpawnProducer::PowerUps => (config.power_up_min, config.power_up_max),
        SpawnProducer::Starfield => (config.star_min, config.star_max),
        SpawnProducer::Asteroids => (config.asteroid_min, config.asteroid_max),
    };
    Spawner::new(producer, min, max)
}

/// Build the entity described by `blueprint`. `born` is the current simulation time.
pub fn spawn_blueprint(
    commands: &mut Commands,
    blueprint: &Blueprint,
    config: &SimConfig,
    born: f32,
) -> Entity {
    match *blueprint {
        Blueprint::PowerUp { kind, x, y } => commands.spawn(power_up(kind, x, y)).id(),
        Blueprint::Star { x, y, z, hue } => commands.spawn(star(x, y, z, hue, born)).id(),
        Blueprint::Asteroid {
            x,
            y,
            radius,
            speed,
        } => commands.spawn(asteroid(x, y, radius, speed, config)).id(),
    }
}

pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t.clamp(0.0, 1.0)
}
