//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only)
//! plus the engine-owned state they need. They hold no state of their own.

pub mod ballistics;
pub mod cleanup;
pub mod impact;
pub mod launch;
pub mod movement;
pub mod snapshot;
