//! Simulation engine for the pose-driven artillery duel.
//!
//! Owns the hecs world of live projectiles and the two actor slots,
//! runs interpretation, launch dispatch and ballistics each tick, and
//! produces `MatchSnapshot`s for the host.

pub mod engine;
pub mod match_state;
pub mod synthetic;
pub mod systems;
pub mod world_setup;

pub use artillery_core as core;
pub use engine::MatchEngine;
