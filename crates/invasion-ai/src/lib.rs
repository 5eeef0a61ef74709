//! Enemy decision logic for Numeric Invasion.
//!
//! Implements the formation dive/return state machine and the
//! table-driven boss fire-pattern catalog. Pure functions over plain
//! data with no pool or engine dependency, independently testable.

pub mod fsm;
pub mod patterns;

pub use invasion_core as core;
