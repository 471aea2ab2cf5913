//! Per-match state held by the engine outside the ECS world:
//! one slot per actor and the write-once outcome.

use artillery_core::enums::Side;
use artillery_core::pose::ActorPose;
use artillery_core::state::LaunchRecord;

/// Everything the engine tracks for one player.
#[derive(Debug, Clone)]
pub struct ActorSlot {
    pub side: Side,
    /// Interpreted pose. Never observed in the `Firing` state between ticks.
    pub pose: ActorPose,
    pub shot_count: u32,
    pub last_launch: Option<LaunchRecord>,
}

impl ActorSlot {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            pose: ActorPose::at_ease(),
            shot_count: 0,
            last_launch: None,
        }
    }

    /// Both slots, left first.
    pub fn pair() -> [ActorSlot; 2] {
        [ActorSlot::new(Side::Left), ActorSlot::new(Side::Right)]
    }
}

/// Match result. The first recorded hit is final.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOutcome {
    winner: Option<Side>,
}

impl MatchOutcome {
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn is_decided(&self) -> bool {
        self.winner.is_some()
    }

    /// Record a hit by `shooter`. Returns true only for the deciding hit.
    pub fn record_hit(&mut self, shooter: Side) -> bool {
        if self.winner.is_some() {
            return false;
        }
        self.winner = Some(shooter);
        true
    }
}
