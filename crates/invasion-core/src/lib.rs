//! Core types and definitions for the Numeric Invasion simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! entity records, fixed-capacity pools, enums, frame events, input,
//! render snapshots, and tuning constants. It has no dependency on any
//! rendering or audio framework.

pub mod constants;
pub mod entities;
pub mod enums;
pub mod events;
pub mod input;
pub mod pool;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
