//! Demo binary: a synthetic duel played through the real-time game loop.

use std::thread;

use tracing::{info, warn};

use artillery_app::config::AppConfig;
use artillery_app::game_loop::TICK_DURATION;
use artillery_app::state::AppState;
use artillery_app::telemetry::init_tracing;
use artillery_core::commands::MatchCommand;
use artillery_sim::synthetic::{is_standard_arena, SyntheticDuel};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    init_tracing(&config.log_level);

    info!(
        width = config.arena.width,
        height = config.arena.height,
        camera_width = config.camera_width,
        seed = config.seed,
        "Starting artillery duel"
    );
    if !is_standard_arena(&config.arena) {
        warn!("Synthetic aim is tuned for the default arena; the duel may not end in a hit");
    }

    let state = AppState::new();
    state.start(config.sim_config())?;
    state.send_command(MatchCommand::StartMatch)?;

    let mut duel = SyntheticDuel::standard(config.camera_width, config.seed);
    let mut elapsed = 0.0;
    loop {
        state.send_frame(duel.frame(elapsed))?;
        thread::sleep(TICK_DURATION);

        let Some(snapshot) = state.snapshot()? else {
            continue;
        };
        elapsed = snapshot.time.elapsed_secs;

        if let Some(winner) = snapshot.winner {
            let shots: Vec<u32> = snapshot.players.iter().map(|p| p.shot_count).collect();
            info!(%winner, tick = snapshot.time.tick, ?shots, "Duel finished");
            break;
        }
        if elapsed >= config.max_seconds {
            warn!(elapsed, "No winner before the time limit");
            break;
        }
    }

    state.shutdown()?;
    Ok(())
}
