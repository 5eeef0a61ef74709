use std::path::PathBuf;

use glam::Vec2;

use invasion_core::constants::{MAX_ENEMIES, MAX_ITEMS};
use invasion_core::enums::{GameMode, ItemKind, ShootingStyle};

use crate::highscores::{record_score, HighScoreEntry, HighScores, MAX_ENTRIES};
use crate::save::{decode, encode, load_slot, save_slot, EnemyRecord, ItemRecord, SaveState};

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("invasion-test-{name}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn make_state() -> SaveState {
    let mut enemies = vec![EnemyRecord::default(); MAX_ENEMIES];
    enemies[0] = EnemyRecord {
        active: true,
        boss: true,
        archetype: 2,
        phase: 3,
        hp: 44,
        pos: Vec2::new(750.0, 120.0),
        attacking: false,
        returning: false,
        fire_cooldown: 1.25,
    };
    enemies[5] = EnemyRecord {
        active: true,
        boss: false,
        archetype: 0,
        phase: 1,
        hp: 14,
        pos: Vec2::new(340.0, 180.0),
        attacking: true,
        returning: false,
        fire_cooldown: 0.5,
    };

    let mut items = vec![ItemRecord::default(); MAX_ITEMS];
    items[2] = ItemRecord {
        active: true,
        kind: Some(ItemKind::Heal),
        pos: Vec2::new(400.0, 300.0),
    };

    SaveState {
        level: 7,
        score: 910,
        player_hp: 60,
        player_damage: 23,
        player_pos: Vec2::new(750.0, 730.0),
        style: ShootingStyle::Spread,
        enemies,
        items,
    }
}

#[test]
fn save_state_roundtrip() {
    let state = make_state();
    let restored = decode(&encode(&state)).unwrap();
    assert_eq!(restored, state);
}

#[test]
fn save_slot_roundtrip_on_disk() {
    let dir = temp_dir("slot");
    let state = make_state();
    save_slot(&dir, 1, &state).unwrap();
    let restored = load_slot(&dir, 1).unwrap();
    assert_eq!(restored, state);
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn load_missing_slot_fails() {
    let dir = temp_dir("missing");
    assert!(load_slot(&dir, 9).is_err());
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn decode_rejects_bad_tag() {
    let mut text = encode(&make_state());
    text = text.replacen("SCORE", "SCRE", 1);
    let err = decode(&text).unwrap_err();
    assert!(err.contains("SCORE"), "unexpected error: {err}");
}

#[test]
fn decode_rejects_truncated_file() {
    let text = encode(&make_state());
    let cut = &text[..text.len() / 2];
    assert!(decode(cut).is_err());
}

#[test]
fn decode_rejects_non_numeric_field() {
    let text = encode(&make_state()).replacen("910", "abc", 1);
    assert!(decode(&text).is_err());
}

#[test]
fn decode_drops_dead_and_unknown_rows() {
    let mut state = make_state();
    state.enemies[1] = EnemyRecord {
        active: true,
        hp: 0, // dead on save
        ..EnemyRecord::default()
    };
    state.items[3] = ItemRecord {
        active: true,
        kind: None, // stored as type -1
        pos: Vec2::new(1.0, 2.0),
    };
    let restored = decode(&encode(&state)).unwrap();
    assert!(!restored.enemies[1].active);
    assert!(!restored.items[3].active);
}

#[test]
fn decode_pads_short_tables_and_discards_excess() {
    // Fewer rows than the pool: the rest must be inactive.
    let mut short = make_state();
    short.enemies.truncate(3);
    short.items.truncate(1);
    let restored = decode(&encode(&short)).unwrap();
    assert_eq!(restored.enemies.len(), MAX_ENEMIES);
    assert_eq!(restored.items.len(), MAX_ITEMS);
    assert!(restored.enemies[3..].iter().all(|e| !e.active));

    // More rows than the pool: extras are consumed, not kept.
    let mut long = make_state();
    long.enemies
        .extend(vec![EnemyRecord::default(); 4]);
    let restored = decode(&encode(&long)).unwrap();
    assert_eq!(restored.enemies.len(), MAX_ENEMIES);
}

#[test]
fn decode_falls_back_on_unknown_style() {
    let text = encode(&make_state());
    // Style is the last PLAYER column.
    let text = text.replacen(
        &format!("PLAYER 60 23 750 730 {}", ShootingStyle::Spread.to_int()),
        "PLAYER 60 23 750 730 9",
        1,
    );
    let restored = decode(&text).unwrap();
    assert_eq!(restored.style, ShootingStyle::Single);
}

#[test]
fn high_scores_sorted_and_truncated() {
    let mut scores = HighScores::default();
    for (i, s) in [300, 100, 500, 200, 400, 250, 600].iter().enumerate() {
        scores.add(
            GameMode::Normal,
            HighScoreEntry {
                score: *s,
                level: i as i32 + 1,
            },
        );
    }
    let top = scores.top(GameMode::Normal);
    assert_eq!(top.len(), MAX_ENTRIES);
    assert_eq!(top[0].score, 600);
    assert!(top.windows(2).all(|w| w[0].score >= w[1].score));
    assert_eq!(top.last().unwrap().score, 250);
}

#[test]
fn high_scores_keep_modes_separate() {
    let mut scores = HighScores::default();
    scores.add(GameMode::Normal, HighScoreEntry { score: 10, level: 1 });
    scores.add(GameMode::Hard, HighScoreEntry { score: 20, level: 2 });
    assert_eq!(scores.top(GameMode::Normal).len(), 1);
    assert_eq!(scores.top(GameMode::Hard).len(), 1);
    assert!(scores.top(GameMode::Survival).is_empty());
}

#[test]
fn high_scores_reader_restores_table_invariant() {
    let dir = temp_dir("untrusted");
    let path = dir.join("HighScores.txt");
    // Hand-edited file: unsorted, and more rows than the table keeps.
    let text = "MODE 0\n7\n10 1\n500 4\n20 1\n300 2\n40 1\n250 3\n600 5\n";
    std::fs::write(&path, text).unwrap();

    let scores = HighScores::load(&path);
    let top = scores.top(GameMode::Normal);
    assert_eq!(top.len(), MAX_ENTRIES);
    assert_eq!(top[0].score, 600);
    assert!(top.windows(2).all(|w| w[0].score >= w[1].score));
    assert_eq!(top.last().unwrap().score, 40);
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn high_scores_file_roundtrip() {
    let dir = temp_dir("scores");
    let path = dir.join("HighScores.txt");

    record_score(&path, GameMode::Hard, HighScoreEntry { score: 120, level: 3 }).unwrap();
    record_score(&path, GameMode::Hard, HighScoreEntry { score: 80, level: 2 }).unwrap();
    record_score(&path, GameMode::Survival, HighScoreEntry { score: 900, level: 1 }).unwrap();

    let scores = HighScores::load(&path);
    assert_eq!(scores.top(GameMode::Hard).len(), 2);
    assert_eq!(scores.top(GameMode::Hard)[0].score, 120);
    assert_eq!(scores.top(GameMode::Survival)[0].score, 900);
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn high_scores_missing_file_is_empty() {
    let dir = temp_dir("noscores");
    let scores = HighScores::load(&dir.join("HighScores.txt"));
    assert!(scores.top(GameMode::Normal).is_empty());
    std::fs::remove_dir_all(&dir).ok();
}
