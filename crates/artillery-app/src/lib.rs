//! Headless host for the artillery duel.
//!
//! Wires the simulation crates to a fixed-rate game loop thread, reads
//! configuration from the environment and sets up tracing. A renderer or
//! camera pipeline talks to it through `AppState`.

pub mod config;
pub mod game_loop;
pub mod host;
pub mod state;
pub mod telemetry;

pub use artillery_core as core;
