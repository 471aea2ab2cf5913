//! Core types and definitions for the pose-driven artillery duel.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, pose observations, actor state, components, commands,
//! snapshots, events, and tuning constants.
//! It has no dependency on any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod pose;
pub mod state;
pub mod types;
