//! Static match geometry and projectile spawn factory.

use hecs::World;

use artillery_core::components::{Heading, Projectile};
use artillery_core::constants::*;
use artillery_core::enums::Side;
use artillery_core::types::{Arena, Position, TankBox, Velocity};

/// The two tank hitboxes. Fixed for the whole match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TankLayout {
    pub left: TankBox,
    pub right: TankBox,
}

impl TankLayout {
    /// Tanks at 10% and 90% of the arena width, 80% down.
    pub fn for_arena(arena: &Arena) -> Self {
        let y = arena.height * TANK_Y_FRACTION;
        Self {
            left: TankBox::new(
                Position::new(arena.width * LEFT_TANK_X_FRACTION, y),
                TANK_WIDTH,
                TANK_HEIGHT,
            ),
            right: TankBox::new(
                Position::new(arena.width * RIGHT_TANK_X_FRACTION, y),
                TANK_WIDTH,
                TANK_HEIGHT,
            ),
        }
    }

    pub fn tank(&self, side: Side) -> &TankBox {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Launch point: the tank edge facing the opponent.
    pub fn muzzle(&self, side: Side) -> Position {
        match side {
            Side::Left => self.left.right_edge(),
            Side::Right => self.right.left_edge(),
        }
    }
}

/// Spawn a live projectile.
pub fn spawn_projectile(
    world: &mut World,
    shooter: Side,
    position: Position,
    velocity: Velocity,
    heading: f64,
) -> hecs::Entity {
    world.spawn((
        Projectile { shooter },
        position,
        velocity,
        Heading { radians: heading },
    ))
}
