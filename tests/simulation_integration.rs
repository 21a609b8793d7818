//! End-to-end scenarios through the `Simulation` facade.

use std::io::Write;

use bevy_ecs::prelude::*;
use glam::Vec2;

use stardrift::components::bullet::Bullet;
use stardrift::components::collider::Collider;
use stardrift::components::health::Health;
use stardrift::components::movement::Movement;
use stardrift::components::player::{Player, PlayerState};
use stardrift::components::sprite::SpriteList;
use stardrift::components::transform::Transform;
use stardrift::error::SimError;
use stardrift::events::audio::AudioCmd;
use stardrift::factory;
use stardrift::resources::assets;
use stardrift::resources::input::InputAction;
use stardrift::resources::simconfig::SimConfig;
use stardrift::simulation::Simulation;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn player_state(sim: &Simulation, player: Entity) -> PlayerState {
    sim.get_component::<Player>(player).unwrap().state
}

/// Step until the player reaches `state`, failing after `max_frames`.
fn step_until(sim: &mut Simulation, player: Entity, state: PlayerState, dt: f32, max_frames: u32) {
    for _ in 0..max_frames {
        sim.step(dt).unwrap();
        if player_state(sim, player) == state {
            return;
        }
    }
    panic!("player never reached {state:?}");
}

#[test]
fn lethal_damage_resets_then_respawns() {
    let config = SimConfig::new();
    let mut sim = Simulation::new(config, 1);
    let player = sim.spawn_player();
    let bounds = sim.bounds();

    {
        let mut p = sim.get_component_mut::<Player>(player).unwrap();
        p.up_fire_rate = 3;
        p.up_speed = 2;
    }
    sim.get_component_mut::<Transform>(player).unwrap().position = Vec2::new(10.0, 300.0);
    sim.get_component_mut::<Health>(player).unwrap().health = 0.0;

    sim.step(0.1).unwrap();

    let p = sim.get_component::<Player>(player).unwrap();
    assert_eq!(p.state, PlayerState::DyingReset);
    assert!(p.revive);
    assert_eq!(p.lives, 3);
    assert_eq!((p.up_fire_rate, p.up_speed, p.up_bullet_damage), (0, 0, 0));
    assert!(approx_eq(p.shoot_timer, 1.0));
    let sprites = sim.get_component::<SpriteList>(player).unwrap();
    assert_eq!(sprites.base_alpha(), Some(0.0));
    let pivot = sim.get_component::<Transform>(player).unwrap().pivot();
    assert_eq!(pivot, factory::respawn_point(&config, &bounds));
    assert_eq!(
        sim.get_component::<Movement>(player).unwrap().normal,
        Vec2::ZERO
    );

    sim.step(0.1).unwrap();
    assert_eq!(player_state(&sim, player), PlayerState::RespawnWait);

    step_until(&mut sim, player, PlayerState::Respawned, 0.1, 40);

    let p = sim.get_component::<Player>(player).unwrap();
    assert_eq!(p.lives, 2);
    assert!(!p.revive);
    let h = sim.get_component::<Health>(player).unwrap();
    assert!(approx_eq(h.health, 100.0));
    assert!(h.invincible);
    // The health system already ran once after the respawn.
    assert!(approx_eq(h.invincibility_timer, config.invincibility - 0.1));
    assert_eq!(
        sim.get_component::<SpriteList>(player).unwrap().base_alpha(),
        Some(1.0)
    );

    sim.step(0.1).unwrap();
    assert_eq!(player_state(&sim, player), PlayerState::Alive);
    // Translucent while invincible.
    assert_eq!(
        sim.get_component::<SpriteList>(player).unwrap().base_alpha(),
        Some(0.5)
    );
}

#[test]
fn level_two_volley_spawns_three_bullets() {
    let mut sim = Simulation::new(SimConfig::new(), 1);
    let player = sim.spawn_player();
    {
        let mut p = sim.get_component_mut::<Player>(player).unwrap();
        p.up_bullet_damage = 2;
        p.shoot_timer = 0.0;
    }
    sim.input_mut().press(InputAction::Shoot);

    sim.step(0.016).unwrap();

    assert_eq!(sim.query::<With<Bullet>>().len(), 3);
    let p = sim.get_component::<Player>(player).unwrap();
    assert_eq!(p.shots_fired, 3);
    assert!(approx_eq(p.shoot_timer, 1.0));

    let cue = sim.assets().get(assets::LASER_SHOOT).unwrap();
    let cues: Vec<AudioCmd> = sim.audio().try_iter().collect();
    assert!(cues.iter().any(|c| matches!(c, AudioCmd::PlayFx { cue: c2, .. } if *c2 == cue)));

    // Cooldown blocks the next frame.
    sim.step(0.016).unwrap();
    assert_eq!(sim.query::<With<Bullet>>().len(), 3);
}

#[test]
fn cadence_follows_fire_rate_level() {
    let config = SimConfig::new();
    let mut sim = Simulation::new(config, 1);
    let player = sim.spawn_player();
    sim.get_component_mut::<Player>(player).unwrap().up_fire_rate = 4;

    sim.step(0.01).unwrap();

    let p = sim.get_component::<Player>(player).unwrap();
    assert!(approx_eq(p.shots_per_second, config.max_fire_rate));
}

#[test]
fn intent_past_the_play_area_is_refused() {
    let config = SimConfig::new();
    let mut sim = Simulation::new(config, 1);
    let player = sim.spawn_player();
    let bounds = sim.bounds();

    sim.get_component_mut::<Transform>(player).unwrap().position = Vec2::new(1.0, 200.0);
    sim.input_mut().press(InputAction::Left);
    sim.step(0.1).unwrap();
    let t = *sim.get_component::<Transform>(player).unwrap();
    assert!(approx_eq(t.position.x, 1.0));
    assert_eq!(sim.get_component::<Player>(player).unwrap().left, 0);

    sim.input_mut().release(InputAction::Left);
    sim.input_mut().press(InputAction::Up);
    let below_top = bounds.play_area_top - t.size.y - 1.0;
    sim.get_component_mut::<Transform>(player).unwrap().position = Vec2::new(200.0, below_top);
    sim.step(0.1).unwrap();
    let top = sim.get_component::<Transform>(player).unwrap().top();
    assert!(top <= bounds.play_area_top);
}

#[test]
fn intent_past_the_right_edge_and_floor_is_refused() {
    let config = SimConfig::new();
    let mut sim = Simulation::new(config, 1);
    let player = sim.spawn_player();
    let bounds = sim.bounds();
    let size = sim.get_component::<Transform>(player).unwrap().size;

    let near_right = Vec2::new(bounds.width - size.x - 1.0, 200.0);
    sim.get_component_mut::<Transform>(player).unwrap().position = near_right;
    sim.input_mut().press(InputAction::Right);
    sim.step(0.1).unwrap();
    let t = *sim.get_component::<Transform>(player).unwrap();
    assert_eq!(sim.get_component::<Player>(player).unwrap().right, 0);
    assert!(approx_eq(t.position.x, near_right.x));
    assert!(t.position.x >= 0.0 && t.position.x + t.size.x <= bounds.width);

    sim.input_mut().release(InputAction::Right);
    sim.input_mut().press(InputAction::Down);
    let near_floor = Vec2::new(200.0, bounds.floor + 1.0);
    sim.get_component_mut::<Transform>(player).unwrap().position = near_floor;
    sim.step(0.1).unwrap();
    let t = *sim.get_component::<Transform>(player).unwrap();
    assert_eq!(sim.get_component::<Player>(player).unwrap().down, 0);
    assert!(approx_eq(t.position.y, near_floor.y));
    assert!(t.position.y >= bounds.floor);
}

#[test]
fn diagonal_intent_is_normalized() {
    let mut sim = Simulation::new(SimConfig::new(), 1);
    let player = sim.spawn_player();
    sim.get_component_mut::<Transform>(player).unwrap().position = Vec2::new(200.0, 200.0);
    sim.input_mut().press(InputAction::Up);
    sim.input_mut().press(InputAction::Right);

    sim.step(0.016).unwrap();

    let normal = sim.get_component::<Movement>(player).unwrap().normal;
    assert!(approx_eq(normal.length(), 1.0));
    assert!(normal.x > 0.0 && normal.y > 0.0);
}

#[test]
fn out_of_lives_strips_interaction_but_keeps_stats() {
    let mut config = SimConfig::new();
    config.lives = 1;
    config.respawn = 0.2;
    let mut sim = Simulation::new(config, 1);
    let player = sim.spawn_player();
    sim.get_component_mut::<Health>(player).unwrap().health = 0.0;

    step_until(&mut sim, player, PlayerState::Respawned, 0.1, 20);
    assert_eq!(sim.get_component::<Player>(player).unwrap().lives, 0);

    sim.step(0.1).unwrap();
    assert_eq!(player_state(&sim, player), PlayerState::OutOfLives);
    assert!(!sim.has_component::<Collider>(player));
    assert!(!sim.has_component::<SpriteList>(player));
    assert!(!sim.has_component::<Movement>(player));
    assert!(sim.has_component::<Health>(player));
    assert!(sim.has_component::<Player>(player));
    assert!(sim.is_alive(player));
    assert_eq!(sim.query::<With<Player>>(), vec![player]);

    let time_alive = sim.get_component::<Player>(player).unwrap().time_alive;
    for _ in 0..30 {
        sim.step(0.1).unwrap();
    }
    assert_eq!(player_state(&sim, player), PlayerState::OutOfLives);
    assert_eq!(sim.get_component::<Player>(player).unwrap().time_alive, time_alive);
}

#[test]
fn time_alive_counts_whole_seconds() {
    let mut sim = Simulation::new(SimConfig::new(), 1);
    let player = sim.spawn_player();
    for _ in 0..10 {
        sim.step(0.25).unwrap();
    }
    let p = sim.get_component::<Player>(player).unwrap();
    assert_eq!(p.time_alive, 2);
    assert!(approx_eq(p.alive_clock, 0.5));
}

#[test]
fn registry_defers_destruction_to_frame_end() {
    let mut sim = Simulation::new(SimConfig::new(), 1);
    let entity = sim.create();
    assert!(sim.add_component(entity, Transform::new(0.0, 0.0, 4.0, 4.0)));
    assert!(sim.add_component(entity, Movement::new(Vec2::X, 10.0)));
    assert!(sim.has_component::<Movement>(entity));

    let snapshot = sim.query::<(With<Transform>, With<Movement>)>();
    assert_eq!(snapshot, vec![entity]);

    assert!(sim.destroy(entity));
    assert!(!sim.is_alive(entity));
    assert!(!sim.destroy(entity));
    // Still readable until the frame ends.
    assert!(sim.get_component::<Transform>(entity).is_some());
    assert!(sim.query::<With<Transform>>().is_empty());
    assert_eq!(snapshot, vec![entity]);

    sim.step(0.016).unwrap();
    assert!(sim.get_component::<Transform>(entity).is_none());
    assert!(!sim.add_component(entity, Health::new(1.0, 0.0)));

    let reused = sim.create();
    assert_ne!(reused, entity);
    assert!(!sim.has_component::<Transform>(reused));
    assert!(!sim.has_component::<Movement>(reused));
}

#[test]
fn pool_over_capacity_evicts_oldest_stars() {
    let mut config = SimConfig::new();
    config.pool_capacity = 2;
    let mut sim = Simulation::new(config, 1);
    let player = sim.spawn_player();
    let stars: Vec<Entity> = (0..4)
        .map(|i| {
            sim.world_mut()
                .spawn(factory::star(100.0, 300.0, 50, 200.0, i as f32))
                .id()
        })
        .collect();

    sim.step(0.016).unwrap();

    assert_eq!(sim.query::<With<Transform>>(), vec![player, stars[3]]);
}

#[test]
fn pool_exhaustion_is_fatal() {
    let mut config = SimConfig::new();
    config.pool_capacity = 0;
    let mut sim = Simulation::new(config, 1);
    let player = sim.spawn_player();

    let err = sim.step(0.016);
    assert!(matches!(
        err,
        Err(SimError::PoolExhausted {
            live: 1,
            capacity: 0
        })
    ));
    assert!(sim.is_alive(player));
}

#[test]
fn same_seed_runs_are_identical() {
    let run = |seed: u64| {
        let mut sim = Simulation::new(SimConfig::new(), seed);
        sim.spawn_scene();
        for _ in 0..240 {
            sim.step(1.0 / 60.0).unwrap();
        }
        let positions: Vec<(i32, Vec2)> = sim
            .draw_list()
            .items
            .iter()
            .map(|item| (item.z_index, item.position))
            .collect();
        positions
    };
    let a = run(7);
    assert!(!a.is_empty());
    assert_eq!(a, run(7));
}

#[test]
fn config_file_drives_the_scene() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[player]\nlives = 5\n\n[world]\nwidth = 800\nheight = 600").unwrap();

    let mut sim = Simulation::from_config_file(file.path(), 3).unwrap();
    let player = sim.spawn_player();

    assert_eq!(sim.get_component::<Player>(player).unwrap().lives, 5);
    let pivot = sim.get_component::<Transform>(player).unwrap().pivot();
    assert!(approx_eq(pivot.x, 400.0));
}

#[test]
fn resize_moves_the_play_area() {
    let mut sim = Simulation::new(SimConfig::new(), 1);
    sim.resize(800.0, 600.0);
    let bounds = sim.bounds();
    assert_eq!(bounds.width, 800.0);
    assert!(approx_eq(bounds.play_area_top, 450.0));
}
