//! Game loop thread: runs the match engine at 60Hz and publishes snapshots.
//!
//! The engine is created inside the thread and never leaves it. Frames and
//! commands arrive via an `mpsc` channel; the latest snapshot is stored in
//! shared state for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tracing::{debug, info};

use artillery_core::constants::TICK_RATE;
use artillery_core::pose::PoseObservation;
use artillery_core::state::MatchSnapshot;
use artillery_sim::engine::{MatchEngine, SimConfig};

use crate::state::GameLoopCommand;

/// Duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Whether the loop keeps running after draining the channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Spawns the game loop in a new thread and returns its command sender.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<MatchSnapshot>>>,
) -> std::io::Result<mpsc::Sender<GameLoopCommand>> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("artillery-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot);
        })?;

    Ok(cmd_tx)
}

/// Tick once with the pending frame and consume it. A tick without a fresh
/// frame sees no observations, so stale poses are never replayed.
pub fn step(engine: &mut MatchEngine, frame: &mut Vec<PoseObservation>) -> MatchSnapshot {
    let poses = std::mem::take(frame);
    engine.tick(&poses)
}

/// Apply every pending message. Frames replace `frame`; commands are queued.
pub fn drain_commands(
    engine: &mut MatchEngine,
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
    frame: &mut Vec<PoseObservation>,
) -> LoopControl {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::Frame(poses)) => *frame = poses,
            Ok(GameLoopCommand::Match(cmd)) => {
                debug!(?cmd, "Command queued");
                engine.queue_command(cmd);
            }
            Ok(GameLoopCommand::Shutdown) => return LoopControl::Stop,
            Err(mpsc::TryRecvError::Empty) => return LoopControl::Continue,
            Err(mpsc::TryRecvError::Disconnected) => return LoopControl::Stop,
        }
    }
}

/// The game loop. Runs until Shutdown or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<MatchSnapshot>>,
) {
    let mut engine = MatchEngine::new(config);
    let mut frame: Vec<PoseObservation> = Vec::new();
    let mut next_tick_time = Instant::now();
    info!("Game loop started");

    loop {
        if drain_commands(&mut engine, &cmd_rx, &mut frame) == LoopControl::Stop {
            break;
        }

        let snapshot = step(&mut engine, &mut frame);

        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind: drop the backlog instead of catching up.
            next_tick_time = now;
        }
    }

    info!(tick = engine.time().tick, "Game loop stopped");
}
