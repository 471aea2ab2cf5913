//! Match engine: the core of the game.
//!
//! `MatchEngine` owns the hecs world of projectiles, both actor slots and
//! the outcome, processes host commands, runs one tick of interpretation,
//! launch dispatch and ballistics, and produces `MatchSnapshot`s.
//! Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use tracing::info;

use artillery_core::commands::MatchCommand;
use artillery_core::constants::{DEFAULT_CAMERA_WIDTH, DT};
use artillery_core::enums::{GamePhase, Side};
use artillery_core::events::MatchEvent;
use artillery_core::pose::PoseObservation;
use artillery_core::state::MatchSnapshot;
use artillery_core::types::{Arena, SimTime};
use artillery_pose::assignment::{assign_sides, SidedFrames};
use artillery_pose::fsm::interpret;

use crate::match_state::{ActorSlot, MatchOutcome};
use crate::systems;
use crate::world_setup::TankLayout;

/// Configuration for starting a new match engine.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// Playfield bounds; tank positions derive from it.
    pub arena: Arena,
    /// Width of the camera frame. Subjects are split at half of it.
    pub camera_width: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            arena: Arena::default(),
            camera_width: DEFAULT_CAMERA_WIDTH,
        }
    }
}

/// The match engine. Owns the ECS world and all match state.
pub struct MatchEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    arena: Arena,
    tanks: TankLayout,
    divider_x: f64,
    actors: [ActorSlot; 2],
    outcome: MatchOutcome,
    command_queue: VecDeque<MatchCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<MatchEvent>,
}

impl MatchEngine {
    /// Create a new engine in the lobby with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            arena: config.arena,
            tanks: TankLayout::for_arena(&config.arena),
            divider_x: config.camera_width / 2.0,
            actors: ActorSlot::pair(),
            outcome: MatchOutcome::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: MatchCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = MatchCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance by one fixed tick with this frame's pose observations.
    pub fn tick(&mut self, poses: &[PoseObservation]) -> MatchSnapshot {
        self.tick_with_dt(poses, DT)
    }

    /// Advance by `dt` seconds. Observations are routed to sides by position.
    pub fn tick_with_dt(&mut self, poses: &[PoseObservation], dt: f64) -> MatchSnapshot {
        let frames = assign_sides(poses, self.divider_x);
        self.tick_sided(frames, dt)
    }

    /// Advance by `dt` seconds with observations already labeled by side.
    /// A side without an observation is not interpreted this tick.
    pub fn tick_sided(&mut self, frames: SidedFrames<'_>, dt: f64) -> MatchSnapshot {
        self.process_commands();

        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        if self.phase == GamePhase::Active {
            self.run_systems(frames, dt);
            self.time.advance_by(dt);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.actors,
            &self.tanks,
            &self.outcome,
            events,
        )
    }

    /// Get the current match phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn winner(&self) -> Option<Side> {
        self.outcome.winner()
    }

    pub fn actor(&self, side: Side) -> &ActorSlot {
        &self.actors[side.index()]
    }

    pub fn arena(&self) -> Arena {
        self.arena
    }

    pub fn tanks(&self) -> &TankLayout {
        &self.tanks
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for tests that place projectiles directly.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single host command.
    fn handle_command(&mut self, command: MatchCommand) {
        match command {
            MatchCommand::StartMatch => {
                if self.phase == GamePhase::Lobby {
                    self.reset_match();
                    self.phase = GamePhase::Active;
                    info!("Match started");
                }
            }
            MatchCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                    info!(tick = self.time.tick, "Match paused");
                }
            }
            MatchCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                    info!(tick = self.time.tick, "Match resumed");
                }
            }
            MatchCommand::Rematch => {
                if self.phase != GamePhase::Lobby {
                    self.reset_match();
                    self.phase = GamePhase::Active;
                    info!("Rematch started");
                }
            }
        }
    }

    /// Clear projectiles, actors, outcome and clock.
    fn reset_match(&mut self) {
        self.world.clear();
        self.actors = ActorSlot::pair();
        self.outcome = MatchOutcome::default();
        self.time = SimTime::default();
        self.events.clear();
    }

    /// Run all systems in order. A projectile spawned this tick is advanced
    /// and collision-tested in this same tick.
    fn run_systems(&mut self, frames: SidedFrames<'_>, dt: f64) {
        let now_ms = self.time.elapsed_ms();

        // 1. Interpret both actors before any dispatch. An unobserved actor keeps its state.
        for slot in self.actors.iter_mut() {
            if let Some(frame) = frames.get(slot.side) {
                slot.pose = interpret(frame, &slot.pose, slot.side, now_ms);
            }
        }
        // 2. Launch dispatch (resets firing actors)
        systems::launch::run(
            &mut self.world,
            &mut self.actors,
            &self.tanks,
            self.time.tick,
            &mut self.events,
        );
        // 3. Ballistics, pruning and impact
        let winner = systems::ballistics::advance(
            &mut self.world,
            dt,
            &self.arena,
            &self.tanks,
            &mut self.outcome,
            &mut self.despawn_buffer,
            &mut self.events,
        );

        if let Some(winner) = winner {
            self.phase = GamePhase::MatchOver;
            info!(%winner, tick = self.time.tick, "Match over");
        }
    }
}
