//! Projectile engine: one tick of flight for the whole live set.

use hecs::{Entity, World};

use artillery_core::enums::Side;
use artillery_core::events::MatchEvent;
use artillery_core::types::Arena;

use crate::match_state::MatchOutcome;
use crate::systems::{cleanup, impact, movement};
use crate::world_setup::TankLayout;

/// Advance every projectile by `dt`: integrate, prune out-of-bounds, then
/// test the survivors against the opposing tank. Returns the match winner.
///
/// Safe to call after a winner exists; the outcome is never overwritten.
pub fn advance(
    world: &mut World,
    dt: f64,
    arena: &Arena,
    tanks: &TankLayout,
    outcome: &mut MatchOutcome,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<MatchEvent>,
) -> Option<Side> {
    movement::run(world, dt);
    cleanup::run(world, arena, despawn_buffer, events);
    impact::run(world, tanks, outcome, events)
}
