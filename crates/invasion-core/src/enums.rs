//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Difficulty mode. Selects the spawn director strategy and the
/// per-mode scaling constants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    Normal,
    Hard,
    Survival,
}

impl GameMode {
    /// Stable integer used by the save and high-score files.
    pub fn to_int(self) -> i32 {
        match self {
            GameMode::Normal => 0,
            GameMode::Hard => 1,
            GameMode::Survival => 2,
        }
    }

    pub fn from_int(value: i32) -> Option<Self> {
        match value {
            0 => Some(GameMode::Normal),
            1 => Some(GameMode::Hard),
            2 => Some(GameMode::Survival),
            _ => None,
        }
    }

    pub const ALL: [GameMode; 3] = [GameMode::Normal, GameMode::Hard, GameMode::Survival];
}

/// Player fire style. Switched by style items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShootingStyle {
    #[default]
    Single,
    Double,
    Spread,
}

impl ShootingStyle {
    pub fn to_int(self) -> i32 {
        match self {
            ShootingStyle::Single => 0,
            ShootingStyle::Double => 1,
            ShootingStyle::Spread => 2,
        }
    }

    pub fn from_int(value: i32) -> Option<Self> {
        match value {
            0 => Some(ShootingStyle::Single),
            1 => Some(ShootingStyle::Double),
            2 => Some(ShootingStyle::Spread),
            _ => None,
        }
    }
}

/// Item kinds dropped by dying enemies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    /// Permanently raises bullet damage by one.
    DamageUp,
    SingleStyle,
    DoubleStyle,
    SpreadStyle,
    /// Restores hit points, capped at the maximum.
    Heal,
}

impl ItemKind {
    pub fn to_int(self) -> i32 {
        match self {
            ItemKind::DamageUp => 0,
            ItemKind::SingleStyle => 1,
            ItemKind::DoubleStyle => 2,
            ItemKind::SpreadStyle => 3,
            ItemKind::Heal => 4,
        }
    }

    pub fn from_int(value: i32) -> Option<Self> {
        match value {
            0 => Some(ItemKind::DamageUp),
            1 => Some(ItemKind::SingleStyle),
            2 => Some(ItemKind::DoubleStyle),
            3 => Some(ItemKind::SpreadStyle),
            4 => Some(ItemKind::Heal),
            _ => None,
        }
    }

    /// Ring color of the pickup effect this item triggers.
    pub fn color(self) -> crate::types::Color {
        use crate::types::Color;
        match self {
            ItemKind::DamageUp => Color::new(0, 255, 0),
            ItemKind::SingleStyle => Color::new(0, 255, 255),
            ItemKind::DoubleStyle => Color::new(255, 0, 255),
            ItemKind::SpreadStyle => Color::new(255, 255, 0),
            ItemKind::Heal => Color::new(0, 255, 0),
        }
    }
}

/// Boss archetype. Selects the (archetype, phase) fire-pattern row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BossArchetype {
    #[default]
    Shooter,
    Spread,
    Summoner,
    Charger,
    Laser,
}

impl BossArchetype {
    pub const ALL: [BossArchetype; 5] = [
        BossArchetype::Shooter,
        BossArchetype::Spread,
        BossArchetype::Summoner,
        BossArchetype::Charger,
        BossArchetype::Laser,
    ];

    pub fn to_int(self) -> i32 {
        match self {
            BossArchetype::Shooter => 0,
            BossArchetype::Spread => 1,
            BossArchetype::Summoner => 2,
            BossArchetype::Charger => 3,
            BossArchetype::Laser => 4,
        }
    }

    pub fn from_int(value: i32) -> Option<Self> {
        match value {
            0 => Some(BossArchetype::Shooter),
            1 => Some(BossArchetype::Spread),
            2 => Some(BossArchetype::Summoner),
            3 => Some(BossArchetype::Charger),
            4 => Some(BossArchetype::Laser),
            _ => None,
        }
    }

    /// Archetype for the nth boss in a cycling sequence.
    pub fn cycled(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }
}

/// Formation enemy behavior state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiveState {
    /// Moving with the formation's shared horizontal velocity.
    #[default]
    Normal,
    /// Diving straight toward the player's side.
    Attacking,
    /// Seeking the formation anchor after a missed dive.
    Returning,
}

/// Top-level simulation phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Playing,
    GameOver,
}

/// Sound intents consumed by the external audio collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundKind {
    Shoot,
    Explosion,
    Death,
    Hit,
    Crash,
    Powerup,
}
