//! Impact system: tests each projectile against the opposing tank.

use hecs::World;
use tracing::info;

use artillery_core::components::Projectile;
use artillery_core::enums::Side;
use artillery_core::events::MatchEvent;
use artillery_core::types::Position;

use crate::match_state::MatchOutcome;
use crate::world_setup::TankLayout;

/// Check every projectile against its opponent's tank and record the winner.
/// A hit does not remove the projectile. Returns the (possibly earlier) winner.
pub fn run(
    world: &World,
    tanks: &TankLayout,
    outcome: &mut MatchOutcome,
    events: &mut Vec<MatchEvent>,
) -> Option<Side> {
    let mut query = world.query::<(&Position, &Projectile)>();
    for (_entity, (pos, projectile)) in query.iter() {
        let shooter = projectile.shooter;
        if !tanks.tank(shooter.opponent()).contains(pos) {
            continue;
        }

        events.push(MatchEvent::TankHit { shooter });
        if outcome.record_hit(shooter) {
            info!(winner = %shooter, x = pos.x, y = pos.y, "Tank destroyed");
            events.push(MatchEvent::MatchWon { winner: shooter });
        }
    }

    outcome.winner()
}
