//! Host-facing API: start the game loop, push frames and commands, poll snapshots.
//!
//! These are the calls a frontend (renderer, camera pipeline) makes. They
//! bridge requests to the game loop thread via its channel.

use artillery_core::commands::MatchCommand;
use artillery_core::pose::PoseObservation;
use artillery_core::state::MatchSnapshot;
use artillery_sim::engine::SimConfig;

use crate::game_loop;
use crate::state::{AppState, GameLoopCommand};

/// Errors surfaced to the host.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("Game loop already running")]
    AlreadyRunning,

    #[error("Game loop not started")]
    NotStarted,

    #[error("Game loop has shut down")]
    Disconnected,

    #[error("Shared state lock poisoned")]
    Poisoned,

    #[error("Failed to spawn game loop thread: {0}")]
    Spawn(#[from] std::io::Error),
}

impl AppState {
    /// Spawn the game loop thread if it is not already running.
    pub fn start(&self, config: SimConfig) -> Result<(), HostError> {
        let mut running = self.running.lock().map_err(|_| HostError::Poisoned)?;
        if *running {
            return Err(HostError::AlreadyRunning);
        }

        let cmd_tx = game_loop::spawn_game_loop(config, self.latest_snapshot.clone())?;

        let mut tx_lock = self.command_tx.lock().map_err(|_| HostError::Poisoned)?;
        *tx_lock = Some(cmd_tx);
        *running = true;
        Ok(())
    }

    /// Forward a match command.
    pub fn send_command(&self, command: MatchCommand) -> Result<(), HostError> {
        self.send(GameLoopCommand::Match(command))
    }

    /// Replace the pose frame the loop ticks with.
    pub fn send_frame(&self, poses: Vec<PoseObservation>) -> Result<(), HostError> {
        self.send(GameLoopCommand::Frame(poses))
    }

    /// Latest snapshot, if the loop has ticked at least once.
    pub fn snapshot(&self) -> Result<Option<MatchSnapshot>, HostError> {
        let lock = self.latest_snapshot.lock().map_err(|_| HostError::Poisoned)?;
        Ok(lock.clone())
    }

    /// Stop the game loop. A no-op when it is not running.
    pub fn shutdown(&self) -> Result<(), HostError> {
        let mut running = self.running.lock().map_err(|_| HostError::Poisoned)?;
        let mut tx_lock = self.command_tx.lock().map_err(|_| HostError::Poisoned)?;
        if let Some(tx) = tx_lock.take() {
            // The loop may already have exited.
            let _ = tx.send(GameLoopCommand::Shutdown);
        }
        *running = false;
        Ok(())
    }

    fn send(&self, message: GameLoopCommand) -> Result<(), HostError> {
        let tx_lock = self.command_tx.lock().map_err(|_| HostError::Poisoned)?;
        match tx_lock.as_ref() {
            Some(tx) => tx.send(message).map_err(|_| HostError::Disconnected),
            None => Err(HostError::NotStarted),
        }
    }
}
