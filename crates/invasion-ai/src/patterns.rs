//! Boss phase and fire-pattern catalog.
//!
//! Every boss behavior is a row in a static table keyed by
//! (archetype, phase), so the full pattern space is enumerable in tests.
//! The engine resolves a row each time a boss's fire cooldown expires,
//! spawns bullets for the volley, and applies summon/charge side effects.

use glam::Vec2;

use invasion_core::constants::ENEMY_BULLET_SPEED;
use invasion_core::enums::BossArchetype;

/// Lowest boss phase.
pub const PHASE_MIN: u8 = 1;
/// Highest boss phase.
pub const PHASE_MAX: u8 = 4;

/// Phase as a pure function of health ratio. Monotone non-decreasing
/// as hp falls: >75% ⇒ 1, >50% ⇒ 2, >25% ⇒ 3, else 4.
pub fn phase_for_health(hp: i32, max_hp: i32) -> u8 {
    if max_hp <= 0 {
        return PHASE_MAX;
    }
    let ratio = hp as f32 / max_hp as f32;
    if ratio > 0.75 {
        1
    } else if ratio > 0.5 {
        2
    } else if ratio > 0.25 {
        3
    } else {
        4
    }
}

/// Per-phase fire cooldown scale; bosses fire faster under pressure.
pub const fn cooldown_scale(phase: u8) -> f32 {
    match phase {
        1 => 0.8,
        2 => 0.7,
        3 => 0.6,
        _ => 0.5,
    }
}

/// Shape of one bullet volley.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Volley {
    /// One straight shot.
    Single,
    /// Straight-down bullets for i in -lanes..=lanes with vx = i * dx_step.
    Fan {
        lanes: i8,
        dx_step: f32,
        speed_scale: f32,
    },
    /// Two bullets at ±dx, no center shot.
    Pair { dx: f32 },
    /// Straight shots stacked at staggered speeds.
    Stacked { speed_scales: &'static [f32] },
    /// Full ring of bullets; the ring rotates by `advance` radians per
    /// volley (the caller accumulates the angle per boss).
    Radial { count: u8, advance: f32 },
}

/// Minions injected into the enemy pool by a Summoner volley.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummonSpec {
    pub count: u8,
    /// Minion hp = hp_base + level.
    pub hp_base: i32,
    pub radius: f32,
    /// Horizontal spawn offset drawn from U(-spread_x, spread_x).
    pub spread_x: f32,
    /// Vertical spawn offset below the boss.
    pub drop_y: f32,
    /// When set, a random pool slot is rolled per minion and the summon
    /// is skipped if that slot is occupied.
    pub random_slot: bool,
}

/// One (archetype, phase) row of the catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhasePattern {
    pub volley: Volley,
    pub summon: Option<SummonSpec>,
    /// First firing at this phase puts the boss itself into attack mode.
    pub triggers_charge: bool,
    pub cooldown_scale: f32,
}

impl PhasePattern {
    const fn plain(volley: Volley, phase: u8) -> Self {
        Self {
            volley,
            summon: None,
            triggers_charge: false,
            cooldown_scale: cooldown_scale(phase),
        }
    }
}

/// Resolve the catalog row for a boss archetype at a phase (clamped
/// to 1..=4).
pub fn pattern(archetype: BossArchetype, phase: u8) -> PhasePattern {
    let phase = phase.clamp(PHASE_MIN, PHASE_MAX);
    match archetype {
        BossArchetype::Shooter => shooter(phase),
        BossArchetype::Spread => spread(phase),
        BossArchetype::Summoner => summoner(phase),
        BossArchetype::Charger => charger(phase),
        BossArchetype::Laser => laser(phase),
    }
}

fn shooter(phase: u8) -> PhasePattern {
    let volley = match phase {
        1 => Volley::Single,
        2 => Volley::Fan {
            lanes: 1,
            dx_step: 60.0,
            speed_scale: 1.0,
        },
        3 => Volley::Fan {
            lanes: 2,
            dx_step: 40.0,
            speed_scale: 1.0,
        },
        _ => Volley::Radial {
            count: 8,
            advance: 0.2,
        },
    };
    PhasePattern::plain(volley, phase)
}

fn spread(phase: u8) -> PhasePattern {
    let volley = match phase {
        1 => Volley::Fan {
            lanes: 1,
            dx_step: 100.0,
            speed_scale: 1.0,
        },
        2 => Volley::Fan {
            lanes: 2,
            dx_step: 80.0,
            speed_scale: 1.0,
        },
        3 => Volley::Fan {
            lanes: 3,
            dx_step: 60.0,
            speed_scale: 1.0,
        },
        _ => Volley::Fan {
            lanes: 5,
            dx_step: 50.0,
            speed_scale: 1.0,
        },
    };
    PhasePattern::plain(volley, phase)
}

fn summoner(phase: u8) -> PhasePattern {
    match phase {
        1 => PhasePattern::plain(Volley::Single, 1),
        2 => PhasePattern::plain(Volley::Pair { dx: 80.0 }, 2),
        3 => PhasePattern {
            summon: Some(SummonSpec {
                count: 1,
                hp_base: 6,
                radius: 18.0,
                spread_x: 50.0,
                drop_y: 40.0,
                random_slot: false,
            }),
            ..PhasePattern::plain(Volley::Single, 3)
        },
        _ => PhasePattern {
            summon: Some(SummonSpec {
                count: 2,
                hp_base: 8,
                radius: 20.0,
                spread_x: 100.0,
                drop_y: 50.0,
                random_slot: true,
            }),
            ..PhasePattern::plain(
                Volley::Fan {
                    lanes: 2,
                    dx_step: 70.0,
                    speed_scale: 1.0,
                },
                4,
            )
        },
    }
}

fn charger(phase: u8) -> PhasePattern {
    match phase {
        1 => PhasePattern::plain(Volley::Single, 1),
        2 => PhasePattern::plain(Volley::Pair { dx: 100.0 }, 2),
        3 => PhasePattern {
            triggers_charge: true,
            ..PhasePattern::plain(Volley::Single, 3)
        },
        _ => PhasePattern {
            triggers_charge: true,
            ..PhasePattern::plain(
                Volley::Fan {
                    lanes: 3,
                    dx_step: 70.0,
                    speed_scale: 1.0,
                },
                4,
            )
        },
    }
}

fn laser(phase: u8) -> PhasePattern {
    let volley = match phase {
        1 => Volley::Single,
        2 => Volley::Stacked {
            speed_scales: &[1.5, 1.2],
        },
        3 => Volley::Fan {
            lanes: 2,
            dx_step: 20.0,
            speed_scale: 1.5,
        },
        _ => Volley::Fan {
            lanes: 6,
            dx_step: 40.0,
            speed_scale: 1.6,
        },
    };
    PhasePattern::plain(volley, phase)
}

/// Expand a volley into bullet velocities. `pattern_angle` is the
/// boss's accumulated radial rotation.
pub fn bullet_velocities(volley: Volley, pattern_angle: f32) -> Vec<Vec2> {
    match volley {
        Volley::Single => vec![Vec2::new(0.0, ENEMY_BULLET_SPEED)],
        Volley::Fan {
            lanes,
            dx_step,
            speed_scale,
        } => (-lanes..=lanes)
            .map(|i| Vec2::new(i as f32 * dx_step, ENEMY_BULLET_SPEED * speed_scale))
            .collect(),
        Volley::Pair { dx } => vec![
            Vec2::new(-dx, ENEMY_BULLET_SPEED),
            Vec2::new(dx, ENEMY_BULLET_SPEED),
        ],
        Volley::Stacked { speed_scales } => speed_scales
            .iter()
            .map(|s| Vec2::new(0.0, ENEMY_BULLET_SPEED * s))
            .collect(),
        Volley::Radial { count, .. } => {
            let step = std::f32::consts::TAU / count as f32;
            (0..count)
                .map(|i| {
                    let angle = pattern_angle + i as f32 * step;
                    Vec2::new(angle.cos(), angle.sin()) * ENEMY_BULLET_SPEED
                })
                .collect()
        }
    }
}
