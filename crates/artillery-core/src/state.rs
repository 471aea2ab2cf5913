//! Match state snapshot: the complete visible state handed to the host each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::MatchEvent;
use crate::types::{Position, SimTime, TankBox, Velocity};

/// Complete match state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub players: Vec<PlayerView>,
    pub projectiles: Vec<ProjectileView>,
    pub tanks: Vec<TankView>,
    pub winner: Option<Side>,
    pub events: Vec<MatchEvent>,
}

/// One player's aim and draw, for the HUD.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub side: Side,
    /// Smoothed aim angle (radians).
    pub angle: f64,
    pub power_state: PowerStateKind,
    /// Current draw power (0 when at ease).
    pub power: f64,
    pub shot_count: u32,
    pub last_launch: Option<LaunchRecord>,
}

/// A committed shot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub angle: f64,
    pub power: f64,
    /// Tick on which the shot fired.
    pub tick: u64,
}

/// A live projectile for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub shooter: Side,
    pub position: Position,
    pub velocity: Velocity,
    /// Orientation (radians), follows the velocity vector.
    pub heading: f64,
}

/// A tank hitbox for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TankView {
    pub side: Side,
    pub hitbox: TankBox,
}
