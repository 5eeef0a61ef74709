//! Formation enemy dive/return state machine.
//!
//! Pure functions that compute position and state transitions for one
//! formation enemy. Contact with the player is not resolved here; the
//! collision pass owns all damage, so the FSM stays a pure map from
//! (state, surroundings) to (state, position).

use glam::Vec2;

use invasion_core::constants::*;
use invasion_core::enums::DiveState;

/// Input to the dive FSM for a single enemy.
pub struct DiveContext {
    pub state: DiveState,
    pub pos: Vec2,
    /// Formation anchor captured at spawn.
    pub base_pos: Vec2,
    /// Net drift of the formation since spawn, sampled from a peer still
    /// in formation; zero when no such peer exists.
    pub formation_shift: Vec2,
    /// Shared horizontal direction of the formation: -1.0 or 1.0.
    pub formation_dir: f32,
    /// Frame delta in seconds.
    pub dt: f32,
}

/// Output of one FSM evaluation.
#[derive(Debug, Clone, Copy)]
pub struct DiveUpdate {
    pub new_state: DiveState,
    pub new_pos: Vec2,
}

/// Evaluate the FSM for one enemy over a frame delta.
pub fn evaluate(ctx: &DiveContext) -> DiveUpdate {
    match ctx.state {
        DiveState::Normal => evaluate_normal(ctx),
        DiveState::Attacking => evaluate_attacking(ctx),
        DiveState::Returning => evaluate_returning(ctx),
    }
}

fn evaluate_normal(ctx: &DiveContext) -> DiveUpdate {
    let mut pos = ctx.pos;
    pos.x += ctx.formation_dir * FORMATION_SPEED * ctx.dt;
    DiveUpdate {
        new_state: DiveState::Normal,
        new_pos: pos,
    }
}

fn evaluate_attacking(ctx: &DiveContext) -> DiveUpdate {
    let mut pos = ctx.pos;
    pos.y += DIVE_SPEED * ctx.dt;

    // Past the bottom band without contact: turn around and rejoin.
    let new_state = if pos.y > FIELD_HEIGHT - DIVE_BOTTOM_MARGIN {
        DiveState::Returning
    } else {
        DiveState::Attacking
    };

    DiveUpdate {
        new_state,
        new_pos: pos,
    }
}

fn evaluate_returning(ctx: &DiveContext) -> DiveUpdate {
    let target = ctx.base_pos + ctx.formation_shift;
    let to_target = target - ctx.pos;
    let dist = to_target.length();

    if dist < RETURN_EPSILON {
        // Snap onto the anchor and resume formation movement.
        return DiveUpdate {
            new_state: DiveState::Normal,
            new_pos: target,
        };
    }

    DiveUpdate {
        new_state: DiveState::Returning,
        new_pos: ctx.pos + to_target / dist * RETURN_SPEED * ctx.dt,
    }
}
