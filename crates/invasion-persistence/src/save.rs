//! Save-slot codec.
//!
//! File layout (`Save<slot>.txt`), all whitespace-separated:
//!
//! ```text
//! LEVEL <level>
//! SCORE <score>
//! PLAYER <hp> <damage> <x> <y> <style>
//! ENEMIES <count>
//! <active> <boss> <type> <phase> <hp> <x> <y> <attacking> <returning> <cooldown>   (x count)
//! ITEMS <count>
//! <active> <type> <x> <y>                                                          (x count)
//! ```
//!
//! The enemy position column holds the formation anchor. Bullets and
//! transient effects are intentionally not persisted.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::str::{FromStr, SplitWhitespace};

use glam::Vec2;

use invasion_core::constants::{MAX_ENEMIES, MAX_ITEMS};
use invasion_core::enums::ShootingStyle;

/// A fully decoded save slot. Record vectors always have pool length;
/// rows past the file's own count are inactive.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveState {
    pub level: i32,
    pub score: i32,
    pub player_hp: i32,
    pub player_damage: i32,
    pub player_pos: Vec2,
    pub style: ShootingStyle,
    pub enemies: Vec<EnemyRecord>,
    pub items: Vec<ItemRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyRecord {
    pub active: bool,
    pub boss: bool,
    /// Boss archetype as its stable integer; out-of-range values are
    /// resolved by the engine on apply.
    pub archetype: i32,
    pub phase: i32,
    pub hp: i32,
    /// Formation anchor.
    pub pos: Vec2,
    pub attacking: bool,
    pub returning: bool,
    pub fire_cooldown: f32,
}

impl Default for EnemyRecord {
    fn default() -> Self {
        Self {
            active: false,
            boss: false,
            archetype: 0,
            phase: 1,
            hp: 0,
            pos: Vec2::ZERO,
            attacking: false,
            returning: false,
            fire_cooldown: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ItemRecord {
    pub active: bool,
    /// `None` for inactive rows (stored as type -1).
    pub kind: Option<invasion_core::enums::ItemKind>,
    pub pos: Vec2,
}

fn slot_path(dir: &Path, slot: u32) -> PathBuf {
    dir.join(format!("Save{slot}.txt"))
}

/// Encode and write a save state to `Save<slot>.txt` under `dir`.
pub fn save_slot(dir: &Path, slot: u32, state: &SaveState) -> Result<(), String> {
    let path = slot_path(dir, slot);
    std::fs::write(&path, encode(state))
        .map_err(|e| format!("failed to write {}: {e}", path.display()))
}

/// Read and decode `Save<slot>.txt` under `dir`.
pub fn load_slot(dir: &Path, slot: u32) -> Result<SaveState, String> {
    let path = slot_path(dir, slot);
    let text = std::fs::read_to_string(&path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    decode(&text).map_err(|e| format!("{}: {e}", path.display()))
}

pub fn encode(state: &SaveState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "LEVEL {}", state.level);
    let _ = writeln!(out, "SCORE {}", state.score);
    let _ = writeln!(
        out,
        "PLAYER {} {} {} {} {}",
        state.player_hp,
        state.player_damage,
        state.player_pos.x,
        state.player_pos.y,
        state.style.to_int()
    );

    let _ = writeln!(out, "ENEMIES {}", state.enemies.len());
    for e in &state.enemies {
        let _ = writeln!(
            out,
            "{} {} {} {} {} {} {} {} {} {}",
            e.active as i32,
            e.boss as i32,
            e.archetype,
            e.phase,
            e.hp,
            e.pos.x,
            e.pos.y,
            e.attacking as i32,
            e.returning as i32,
            e.fire_cooldown
        );
    }

    let _ = writeln!(out, "ITEMS {}", state.items.len());
    for i in &state.items {
        let kind = i.kind.map(|k| k.to_int()).unwrap_or(-1);
        let _ = writeln!(
            out,
            "{} {} {} {}",
            i.active as i32,
            kind,
            i.pos.x,
            i.pos.y
        );
    }
    out
}

/// Decode a save file. Any tag mismatch or unparsable token fails the
/// whole decode; nothing partial is ever returned.
pub fn decode(text: &str) -> Result<SaveState, String> {
    let mut toks = Tokens::new(text);

    toks.expect_tag("LEVEL")?;
    let level = toks.parse::<i32>("level")?;
    toks.expect_tag("SCORE")?;
    let score = toks.parse::<i32>("score")?;

    toks.expect_tag("PLAYER")?;
    let player_hp = toks.parse::<i32>("player hp")?;
    let player_damage = toks.parse::<i32>("player damage")?;
    let px = toks.parse::<f32>("player x")?;
    let py = toks.parse::<f32>("player y")?;
    let style_int = toks.parse::<i32>("style")?;
    let style = ShootingStyle::from_int(style_int).unwrap_or_default();

    toks.expect_tag("ENEMIES")?;
    let enemy_count = toks.parse::<usize>("enemy count")?;
    let mut enemies = vec![EnemyRecord::default(); MAX_ENEMIES];
    for i in 0..enemy_count {
        let rec = decode_enemy_row(&mut toks)?;
        // Rows past pool capacity are consumed and discarded.
        if let Some(slot) = enemies.get_mut(i) {
            *slot = rec;
        }
    }

    toks.expect_tag("ITEMS")?;
    let item_count = toks.parse::<usize>("item count")?;
    let mut items = vec![ItemRecord::default(); MAX_ITEMS];
    for i in 0..item_count {
        let rec = decode_item_row(&mut toks)?;
        if let Some(slot) = items.get_mut(i) {
            *slot = rec;
        }
    }

    Ok(SaveState {
        level,
        score,
        player_hp,
        player_damage,
        player_pos: Vec2::new(px, py),
        style,
        enemies,
        items,
    })
}

fn decode_enemy_row(toks: &mut Tokens) -> Result<EnemyRecord, String> {
    let active = toks.parse::<i32>("enemy active")? != 0;
    let boss = toks.parse::<i32>("enemy boss")? != 0;
    let archetype = toks.parse::<i32>("enemy type")?;
    let phase = toks.parse::<i32>("enemy phase")?;
    let hp = toks.parse::<i32>("enemy hp")?;
    let x = toks.parse::<f32>("enemy x")?;
    let y = toks.parse::<f32>("enemy y")?;
    let attacking = toks.parse::<i32>("enemy attacking")? != 0;
    let returning = toks.parse::<i32>("enemy returning")? != 0;
    let fire_cooldown = toks.parse::<f32>("enemy cooldown")?;
    Ok(EnemyRecord {
        // A saved corpse stays dead.
        active: active && hp > 0,
        boss,
        archetype,
        phase,
        hp,
        pos: Vec2::new(x, y),
        attacking,
        returning,
        fire_cooldown,
    })
}

fn decode_item_row(toks: &mut Tokens) -> Result<ItemRecord, String> {
    let active = toks.parse::<i32>("item active")? != 0;
    let kind_int = toks.parse::<i32>("item type")?;
    let x = toks.parse::<f32>("item x")?;
    let y = toks.parse::<f32>("item y")?;
    let kind = invasion_core::enums::ItemKind::from_int(kind_int);
    Ok(ItemRecord {
        active: active && kind.is_some(),
        kind,
        pos: Vec2::new(x, y),
    })
}

/// Whitespace token cursor over the file text.
struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
        }
    }

    fn next(&mut self, what: &str) -> Result<&'a str, String> {
        self.inner
            .next()
            .ok_or_else(|| format!("unexpected end of file, expected {what}"))
    }

    fn expect_tag(&mut self, tag: &str) -> Result<(), String> {
        let tok = self.next(tag)?;
        if tok != tag {
            return Err(format!("expected tag {tag}, found {tok:?}"));
        }
        Ok(())
    }

    fn parse<T: FromStr>(&mut self, what: &str) -> Result<T, String> {
        let tok = self.next(what)?;
        tok.parse()
            .map_err(|_| format!("invalid {what}: {tok:?}"))
    }
}
