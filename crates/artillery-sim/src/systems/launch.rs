//! Launch dispatcher: turns a firing pulse into a projectile.
//!
//! Runs after both actors have been interpreted. The firing actor is reset
//! to at-ease in the same call, so `Firing` never survives the tick.

use hecs::World;
use tracing::info;

use artillery_core::constants::LAUNCH_SPEED;
use artillery_core::events::MatchEvent;
use artillery_core::pose::ActorPose;
use artillery_core::state::LaunchRecord;
use artillery_core::types::Velocity;

use crate::match_state::ActorSlot;
use crate::world_setup::{spawn_projectile, TankLayout};

/// Initial velocity for a shot. Both sides share the formula; the role
/// mapping makes each aiming arm point outward, which mirrors the shot.
pub fn launch_velocity(angle: f64, power: f64) -> Velocity {
    let speed = power * LAUNCH_SPEED;
    Velocity::new(-angle.cos() * speed, angle.sin() * speed)
}

/// Dispatch every actor currently in the firing pulse. Returns the number of launches.
pub fn run(
    world: &mut World,
    actors: &mut [ActorSlot],
    tanks: &TankLayout,
    current_tick: u64,
    events: &mut Vec<MatchEvent>,
) -> usize {
    let mut launched = 0;

    for slot in actors.iter_mut() {
        let Some(power) = slot.pose.firing_power() else {
            continue;
        };
        let angle = slot.pose.angle;

        spawn_projectile(
            world,
            slot.side,
            tanks.muzzle(slot.side),
            launch_velocity(angle, power),
            angle,
        );

        slot.pose = ActorPose::at_ease();
        slot.shot_count += 1;
        slot.last_launch = Some(LaunchRecord {
            angle,
            power,
            tick: current_tick,
        });
        launched += 1;

        info!(side = %slot.side, angle, power, shot = slot.shot_count, "Shot fired");
        events.push(MatchEvent::ShotFired {
            side: slot.side,
            angle,
            power,
        });
    }

    launched
}
