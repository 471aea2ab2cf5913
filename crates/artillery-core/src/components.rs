//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.
//! `Position` and `Velocity` from `types` are also used as components.

use serde::{Deserialize, Serialize};

use crate::enums::Side;

/// Marks an entity as a live projectile fired by `shooter`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub shooter: Side,
}

/// Visual orientation of a projectile (radians), following its velocity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    pub radians: f64,
}
