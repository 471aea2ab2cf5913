//! Snapshot system: queries the world and builds a complete MatchSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use artillery_core::components::{Heading, Projectile};
use artillery_core::enums::{GamePhase, Side};
use artillery_core::events::MatchEvent;
use artillery_core::state::*;
use artillery_core::types::{Position, SimTime, Velocity};

use crate::match_state::{ActorSlot, MatchOutcome};
use crate::world_setup::TankLayout;

/// Build a complete MatchSnapshot from the current match state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    actors: &[ActorSlot],
    tanks: &TankLayout,
    outcome: &MatchOutcome,
    events: Vec<MatchEvent>,
) -> MatchSnapshot {
    MatchSnapshot {
        time: *time,
        phase,
        players: actors.iter().map(build_player).collect(),
        projectiles: build_projectiles(world),
        tanks: Side::ALL
            .iter()
            .map(|&side| TankView {
                side,
                hitbox: *tanks.tank(side),
            })
            .collect(),
        winner: outcome.winner(),
        events,
    }
}

fn build_player(slot: &ActorSlot) -> PlayerView {
    PlayerView {
        side: slot.side,
        angle: slot.pose.angle,
        power_state: slot.pose.power_state.kind(),
        power: slot.pose.power_state.power(),
        shot_count: slot.shot_count,
        last_launch: slot.last_launch,
    }
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Projectile, &Position, &Velocity, &Heading)>()
        .iter()
        .map(|(_, (projectile, pos, vel, heading))| ProjectileView {
            shooter: projectile.shooter,
            position: *pos,
            velocity: *vel,
            heading: heading.radians,
        })
        .collect()
}
