//! Cleanup system: removes projectiles that left the arena.

use hecs::{Entity, World};
use tracing::debug;

use artillery_core::components::Projectile;
use artillery_core::events::MatchEvent;
use artillery_core::types::{Arena, Position};

/// Despawn every projectile outside the arena. Leaving the arena records no outcome.
/// Uses a pre-allocated buffer so removal never disturbs the query.
pub fn run(
    world: &mut World,
    arena: &Arena,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<MatchEvent>,
) {
    despawn_buffer.clear();

    for (entity, (pos, projectile)) in world.query_mut::<(&Position, &Projectile)>() {
        if !arena.contains(pos) {
            debug!(shooter = %projectile.shooter, x = pos.x, y = pos.y, "Projectile left arena");
            events.push(MatchEvent::ProjectileLost {
                shooter: projectile.shooter,
            });
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
