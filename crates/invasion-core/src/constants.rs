//! Simulation constants and tuning parameters.

// --- Playfield ---

/// Playfield width in pixels.
pub const FIELD_WIDTH: f32 = 1500.0;

/// Playfield height in pixels.
pub const FIELD_HEIGHT: f32 = 800.0;

// --- Player ---

/// Horizontal player speed (px/s).
pub const PLAYER_SPEED: f32 = 300.0;

/// Player collision radius.
pub const PLAYER_RADIUS: f32 = 20.0;

/// Starting (and maximum) player hit points.
pub const PLAYER_MAX_HP: i32 = 100;

/// Starting bullet damage.
pub const PLAYER_START_DAMAGE: i32 = 20;

/// Player spawn position offset from the bottom edge.
pub const PLAYER_SPAWN_OFFSET_Y: f32 = 70.0;

/// Player bullets spawn this far above the top of the player circle.
pub const PLAYER_MUZZLE_OFFSET: f32 = 8.0;

// --- Bullets ---

/// Player bullet speed (px/s, upward).
pub const PLAYER_BULLET_SPEED: f32 = 520.0;

/// Enemy bullet base speed (px/s, downward).
pub const ENEMY_BULLET_SPEED: f32 = 240.0;

/// Bullet collision radius.
pub const BULLET_RADIUS: f32 = 14.0;

/// Lateral separation of the two Double-style muzzle points.
pub const DOUBLE_STYLE_OFFSET_X: f32 = 15.0;

/// Horizontal velocity of the angled Spread-style bullets.
pub const SPREAD_STYLE_VEL_X: f32 = 120.0;

/// Damage cap for enemy and boss bullets.
pub const ENEMY_BULLET_DAMAGE_CAP: i32 = 64;

// --- Pool capacities ---

pub const MAX_PLAYER_BULLETS: usize = 64;
pub const MAX_ENEMY_BULLETS: usize = 64;
pub const MAX_ENEMIES: usize = 36;
pub const MAX_ITEMS: usize = 16;
pub const MAX_EXPLOSIONS: usize = 32;
pub const MAX_PICKUP_EFFECTS: usize = 16;

// --- Formation ---

/// Shared horizontal formation speed (px/s).
pub const FORMATION_SPEED: f32 = 90.0;

/// Distance from either screen edge that triggers a direction flip.
pub const FORMATION_MARGIN: f32 = 60.0;

/// Downward step applied to the formation on each flip.
pub const FORMATION_DROP_Y: f32 = 24.0;

pub const FORMATION_ROWS: usize = 3;
pub const FORMATION_COLS: usize = 6;
pub const FORMATION_START_X: f32 = 120.0;
pub const FORMATION_START_Y: f32 = 110.0;
pub const FORMATION_GAP_X: f32 = 110.0;
pub const FORMATION_GAP_Y: f32 = 70.0;

// --- Dive behavior ---

/// Downward speed of a diving enemy (px/s).
pub const DIVE_SPEED: f32 = 300.0;

/// Seek speed of an enemy returning to its formation anchor (px/s).
pub const RETURN_SPEED: f32 = 200.0;

/// Distance at which a returning enemy snaps back onto its anchor.
pub const RETURN_EPSILON: f32 = 5.0;

/// A dive begins once per tick with probability 1 / DIVE_TRIGGER_ODDS.
pub const DIVE_TRIGGER_ODDS: u32 = 300;

/// Cooldown after any dive trigger before another may begin (seconds).
pub const DIVE_TRIGGER_COOLDOWN: f32 = 1.2;

/// Bottom margin at which a dive turns into a return.
pub const DIVE_BOTTOM_MARGIN: f32 = 30.0;

/// Damage dealt by an enemy crashing into the player.
pub const CONTACT_DAMAGE: i32 = 10;

// --- Enemies ---

/// Regular enemy collision radius.
pub const ENEMY_RADIUS: f32 = 26.0;

/// Boss collision radius.
pub const BOSS_RADIUS: f32 = 36.0;

/// Enemy bullets spawn this far below the bottom of the firing circle.
pub const ENEMY_MUZZLE_OFFSET: f32 = 10.0;

/// Base enemy fire cooldown (seconds).
pub const ENEMY_FIRE_BASE_COOLDOWN: f32 = 2.5;

/// Random additive jitter applied to regular enemy fire cooldowns.
pub const ENEMY_FIRE_COOLDOWN_JITTER: f32 = 0.6;

/// Random additive jitter applied to summoned minion fire cooldowns.
pub const SUMMON_FIRE_COOLDOWN_JITTER: f32 = 1.0;

/// Base hit points of a formation enemy before level scaling.
pub const ENEMY_BASE_HP: i32 = 10;

/// Extra formation enemy hit points per campaign level.
pub const ENEMY_HP_PER_LEVEL: i32 = 4;

/// Base boss hit points before per-level scaling.
pub const BOSS_BASE_HP: i32 = 60;

/// Vertical spawn position of a boss.
pub const BOSS_SPAWN_Y: f32 = 120.0;

/// Duration of the hit flash shown when an enemy takes damage (seconds).
pub const HIT_FLASH_DURATION: f32 = 0.1;

// --- Scoring ---

pub const SCORE_PER_ENEMY: i32 = 10;
pub const SCORE_PER_BOSS: i32 = 150;

/// Survival score accrues at this rate per elapsed second.
pub const SURVIVAL_SCORE_RATE: i32 = 10;

// --- Items ---

/// Falling speed of dropped items (px/s).
pub const ITEM_FALL_SPEED: f32 = 120.0;

/// Item collision radius.
pub const ITEM_RADIUS: f32 = 16.0;

/// Percent chance that a dead enemy drops an item.
pub const DROP_CHANCE_PERCENT: u32 = 36;

/// Hit points restored by a Heal item.
pub const HEAL_AMOUNT: i32 = 20;

// --- Survival mode ---

/// Initial interval between survival spawns (seconds).
pub const SURVIVAL_SPAWN_BASE_COOLDOWN: f32 = 2.0;

/// Minimum survival spawn interval (seconds).
pub const SURVIVAL_SPAWN_MIN_COOLDOWN: f32 = 0.5;

/// The spawn interval shrinks by one second per this many survival seconds.
pub const SURVIVAL_SPAWN_RAMP_SECS: f32 = 30.0;

/// Survival enemy hp grows by one per this many survival seconds.
pub const SURVIVAL_HP_RAMP_SECS: f32 = 20.0;

/// Width of one survival boss bucket (seconds).
pub const SURVIVAL_BOSS_BUCKET_SECS: f32 = 60.0;

/// Base hit points of a survival trickle spawn.
pub const SURVIVAL_ENEMY_BASE_HP: i32 = 6;

/// Vertical spawn position of survival trickle spawns.
pub const SURVIVAL_SPAWN_Y: f32 = 80.0;

/// Horizontal margin kept clear on both edges for survival spawns.
pub const SURVIVAL_SPAWN_MARGIN_X: f32 = 50.0;

/// Base hit points of the first survival boss.
pub const SURVIVAL_BOSS_BASE_HP: i32 = 80;

/// Extra survival boss hit points per completed bucket.
pub const SURVIVAL_BOSS_HP_PER_CYCLE: i32 = 30;

/// Fire-cooldown multiplier applied to survival bosses.
pub const SURVIVAL_BOSS_COOLDOWN_SCALE: f32 = 0.6;

// --- Effects ---

/// Number of frames in an explosion animation.
pub const EXPLOSION_FRAMES: u32 = 16;

/// Seconds each explosion frame is shown.
pub const EXPLOSION_FRAME_DURATION: f32 = 0.05;

/// Pickup effect ring expansion speed (px/s).
pub const EFFECT_EXPAND_SPEED: f32 = 200.0;

/// Pickup effect fade speed (alpha/s).
pub const EFFECT_FADE_SPEED: f32 = 500.0;

/// Margin beyond the playfield at which bullets are culled.
pub const BULLET_CULL_MARGIN: f32 = 40.0;

/// Margin below the playfield at which items are culled.
pub const ITEM_CULL_MARGIN: f32 = 30.0;
