//! Cozy Headless Runner
//!
//! Runs a scripted session against the configured world without a window,
//! checks the player never ends a frame inside a wall, then replays the same
//! script to confirm the simulation is deterministic.

use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cozy_core::{
    GameConfig, InputFrame, VERSION,
    game::{tick, replay, Axis},
};

/// Built-in session: walk into every wall, then into two corners.
fn script(fps: u32) -> Vec<(&'static str, InputFrame, u32)> {
    let secs = |s: f32| (s * fps as f32).round() as u32;
    vec![
        ("right", InputFrame::from_keys(false, true, false, false), secs(4.0)),
        ("down", InputFrame::from_keys(false, false, false, true), secs(3.0)),
        ("left", InputFrame::from_keys(true, false, false, false), secs(5.0)),
        ("up", InputFrame::from_keys(false, false, true, false), secs(3.0)),
        ("up-right", InputFrame::from_keys(false, true, true, false), secs(4.0)),
        ("down-left", InputFrame::from_keys(true, false, false, true), secs(4.0)),
        ("idle", InputFrame::IDLE, secs(0.5)),
    ]
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Cozy headless runner v{}", VERSION);

    let config = GameConfig::from_env(Path::new("cozy.json")).context("loading config")?;
    let world = config.build_world();
    let dt = config.frame_dt();
    let speed = config.player_speed;

    info!("Frame rate: {} Hz, speed: {} px/s", config.fps, speed);

    let initial = config.spawn_player();
    let mut player = initial;
    let mut recorded: Vec<InputFrame> = Vec::new();
    let mut frame = 0u32;

    for (name, input, frames) in script(config.fps) {
        let mut x_contacts = 0usize;
        let mut y_contacts = 0usize;

        for _ in 0..frames {
            let result = tick(&mut player, &world, &input, dt, speed);
            recorded.push(input);
            frame += 1;

            for contact in &result.contacts {
                debug!("Frame {}: {:?} contact with collider {}", frame, contact.axis, contact.collider);
                match contact.axis {
                    Axis::X => x_contacts += 1,
                    Axis::Y => y_contacts += 1,
                }
            }

            if let Some(index) = world.first_overlap(&player.rect) {
                bail!("frame {}: player {} overlaps collider {}", frame, player.rect, index);
            }
        }

        info!(
            "{:>9}: {} frames, ended at {:?}, facing {}, {} X / {} Y contacts",
            name,
            frames,
            player.position(),
            if player.facing_right { "right" } else { "left" },
            x_contacts,
            y_contacts,
        );
    }

    info!("=== Verifying Determinism ===");
    let (replayed, contacts) = replay(initial, &world, &recorded, dt, speed);
    info!("Replay: {} frames, {} contacts, final {}", recorded.len(), contacts.len(), replayed.rect);

    if replayed == player {
        info!("DETERMINISM VERIFIED: final states match");
        Ok(())
    } else {
        bail!("replay diverged: {} vs {}", replayed.rect, player.rect)
    }
}
