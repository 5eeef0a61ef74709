//! Simulation engine for Numeric Invasion.
//!
//! Owns the entity pools, runs the per-tick system pass, and produces
//! `RenderSnapshot`s for the frontend. Completely headless (no window,
//! audio, or file dependency beyond save/load), enabling deterministic
//! testing.

pub mod engine;
pub mod systems;

pub use engine::{GameEngine, SimConfig};
pub use invasion_core as core;
