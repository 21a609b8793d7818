//! Headless driver for the stardrift simulation core.
//!
//! Runs the simulation for a fixed number of frames with scripted input
//! (strafing left and right while holding fire), drains audio cues into the
//! log and prints a JSON summary of the run.
use std::path::PathBuf;
use std::process::ExitCode;

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{debug, error, info};
use serde::Serialize;

use stardrift::components::health::Health;
use stardrift::components::player::Player;
use stardrift::components::transform::Transform;
use stardrift::events::audio::AudioCmd;
use stardrift::resources::input::InputAction;
use stardrift::resources::simconfig::SimConfig;
use stardrift::simulation::Simulation;

/// Stardrift headless simulation runner
#[derive(Parser)]
#[command(version, about = "Steps the stardrift simulation without a window and reports the outcome.")]
struct Cli {
    /// INI file with simulation tuning. Defaults are used when omitted.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 600)]
    frames: u32,

    /// Seconds per frame.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Random seed for spawners.
    #[arg(long, default_value_t = 0x5eed)]
    seed: u64,
}

#[derive(Serialize)]
struct RunSummary {
    frames: u32,
    elapsed: f32,
    seed: u64,
    player_state: String,
    lives: u32,
    health: f32,
    shots_fired: u32,
    time_alive: u32,
    live_objects: usize,
    draw_items: usize,
    sound_cues: usize,
    pool_exhausted: bool,
}

/// Flip strafing direction every this many frames.
const STRAFE_PERIOD: u32 = 90;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = SimConfig::new();
    if let Some(path) = &cli.config {
        if let Err(e) = config.load_from_file(path) {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    }

    let mut sim = Simulation::new(config, cli.seed);
    let player = sim.spawn_scene();
    info!("running {} frames at dt={}", cli.frames, cli.dt);

    let mut sound_cues = 0;
    let mut frames_run = 0;
    let mut pool_exhausted = false;
    for frame in 0..cli.frames {
        {
            let mut input = sim.input_mut();
            let leftwards = (frame / STRAFE_PERIOD) % 2 == 0;
            input.set(InputAction::Left, leftwards);
            input.set(InputAction::Right, !leftwards);
            input.set(InputAction::Shoot, true);
        }

        let result = sim.step(cli.dt);
        frames_run += 1;

        for cmd in sim.audio().try_iter() {
            if let AudioCmd::PlayFx { cue, volume } = cmd {
                sound_cues += 1;
                debug!(
                    "frame {}: play '{}' at {:.2}",
                    frame,
                    sim.assets().key(cue).unwrap_or("?"),
                    volume
                );
            }
        }

        if let Err(e) = result {
            error!("stopping at frame {}: {}", frame, e);
            pool_exhausted = true;
            break;
        }
    }

    let live_objects = sim.query::<With<Transform>>().len();
    let (player_state, lives, shots_fired, time_alive) = sim
        .get_component::<Player>(player)
        .map(|p| (format!("{:?}", p.state), p.lives, p.shots_fired, p.time_alive))
        .unwrap_or_else(|| ("Missing".to_string(), 0, 0, 0));
    let health = sim
        .get_component::<Health>(player)
        .map_or(0.0, |h| h.health);

    let summary = RunSummary {
        frames: frames_run,
        elapsed: sim.time().elapsed,
        seed: cli.seed,
        player_state,
        lives,
        health,
        shots_fired,
        time_alive,
        live_objects,
        draw_items: sim.draw_list().len(),
        sound_cues,
        pool_exhausted,
    };

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            error!("could not serialize run summary: {e}");
            return ExitCode::FAILURE;
        }
    }

    if pool_exhausted {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
