//! Host state shared between the caller and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use artillery_core::commands::MatchCommand;
use artillery_core::pose::PoseObservation;
use artillery_core::state::MatchSnapshot;

/// Messages sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// Latest pose-model output. Consumed by the next tick only.
    Frame(Vec<PoseObservation>),
    /// A match command to forward to the engine.
    Match(MatchCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared host state.
///
/// - `mpsc::Sender` sits behind a `Mutex` so the state is `Sync`
/// - the latest snapshot is `Arc`-shared with the game loop thread
pub struct AppState {
    /// `None` until the game loop is started.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Updated by the game loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<MatchSnapshot>>>,
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
