//! Events emitted by the simulation for UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::Side;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MatchEvent {
    /// A held draw committed and a projectile was launched.
    ShotFired { side: Side, angle: f64, power: f64 },
    /// A projectile left the playfield.
    ProjectileLost { shooter: Side },
    /// A projectile is inside the opposing tank's box.
    TankHit { shooter: Side },
    /// The match has a winner. Emitted once per match.
    MatchWon { winner: Side },
}
