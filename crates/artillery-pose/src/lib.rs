//! Pose interpretation for the artillery duel.
//!
//! Turns noisy per-frame keypoints into a smoothed aim angle and a
//! hold-to-fire power state machine, and routes observations to sides.

pub mod assignment;
pub mod fsm;
pub mod roles;

pub use artillery_core as core;
pub use fsm::interpret;

#[cfg(test)]
mod tests;
