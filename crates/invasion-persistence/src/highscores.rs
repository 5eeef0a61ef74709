//! High-score table codec (`HighScores.txt`).
//!
//! One block per mode:
//!
//! ```text
//! MODE <mode>
//! <count>
//! <score> <level>   (x count)
//! ```
//!
//! Each mode keeps its top five scores, descending.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::Path;

use invasion_core::enums::GameMode;

/// Entries kept per mode.
pub const MAX_ENTRIES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighScoreEntry {
    pub score: i32,
    pub level: i32,
}

/// All per-mode high-score tables.
#[derive(Debug, Clone, Default)]
pub struct HighScores {
    tables: HashMap<GameMode, Vec<HighScoreEntry>>,
}

impl HighScores {
    /// Load the table from disk. A missing or unreadable file yields an
    /// empty table; scores are a nicety, not a hard dependency.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::parse(&text),
            Err(e) => {
                log::warn!("no high scores at {}: {e}", path.display());
                Self::default()
            }
        }
    }

    fn parse(text: &str) -> Self {
        let mut tables: HashMap<GameMode, Vec<HighScoreEntry>> = HashMap::new();
        let mut toks = text.split_whitespace();
        while let Some(tag) = toks.next() {
            if tag != "MODE" {
                continue;
            }
            let Some(mode) = toks.next().and_then(|t| t.parse().ok()).and_then(GameMode::from_int)
            else {
                continue;
            };
            let Some(count) = toks.next().and_then(|t| t.parse::<usize>().ok()) else {
                continue;
            };
            let mut entries = Vec::new();
            for _ in 0..count {
                let (Some(score), Some(level)) = (
                    toks.next().and_then(|t| t.parse().ok()),
                    toks.next().and_then(|t| t.parse().ok()),
                ) else {
                    break;
                };
                entries.push(HighScoreEntry { score, level });
            }
            // A hand-edited file may be unsorted or over-long; restore
            // the table invariant on the way in.
            entries.sort_by(|a, b| b.score.cmp(&a.score));
            entries.truncate(MAX_ENTRIES);
            tables.insert(mode, entries);
        }
        Self { tables }
    }

    /// Write every mode's table, in mode order.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let mut out = String::new();
        for mode in GameMode::ALL {
            let Some(entries) = self.tables.get(&mode) else {
                continue;
            };
            let _ = writeln!(out, "MODE {}", mode.to_int());
            let _ = writeln!(out, "{}", entries.len());
            for e in entries {
                let _ = writeln!(out, "{} {}", e.score, e.level);
            }
        }
        std::fs::write(path, out)
            .map_err(|e| format!("failed to write {}: {e}", path.display()))
    }

    /// Scores for one mode, best first.
    pub fn top(&self, mode: GameMode) -> &[HighScoreEntry] {
        self.tables.get(&mode).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Insert a run result, keeping the table sorted descending and
    /// truncated to `MAX_ENTRIES`.
    pub fn add(&mut self, mode: GameMode, entry: HighScoreEntry) {
        let entries = self.tables.entry(mode).or_default();
        entries.push(entry);
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(MAX_ENTRIES);
    }
}

/// Load-modify-save convenience used at game over.
pub fn record_score(path: &Path, mode: GameMode, entry: HighScoreEntry) -> Result<(), String> {
    let mut scores = HighScores::load(path);
    scores.add(mode, entry);
    scores.save(path)
}
