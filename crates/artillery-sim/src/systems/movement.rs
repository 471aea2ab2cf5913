//! Ballistic integration for projectiles.
//!
//! Position first with the current velocity, then gravity on vy, then the
//! heading is realigned with the new velocity.

use hecs::World;

use artillery_core::components::{Heading, Projectile};
use artillery_core::constants::EFFECTIVE_GRAVITY;
use artillery_core::types::{Position, Velocity};

/// Integrate every live projectile over `dt` seconds.
pub fn run(world: &mut World, dt: f64) {
    for (_entity, (pos, vel, heading, _projectile)) in
        world.query_mut::<(&mut Position, &mut Velocity, &mut Heading, &Projectile)>()
    {
        pos.x += vel.x * dt;
        pos.y += vel.y * dt;
        vel.y += EFFECTIVE_GRAVITY * dt;
        heading.radians = vel.heading();
    }
}
