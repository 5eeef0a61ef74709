//! Systems that run over the entity pools each tick, in a fixed serial
//! order. Systems are free functions; all state lives in the pools or
//! in the small state structs the engine passes in.

pub mod boss;
pub mod collision;
pub mod effects;
pub mod formation;
pub mod player_control;
pub mod projectiles;
pub mod snapshot;
pub mod spawn;
