//! Aggregate statistics
//!
//! Three blocks: `normal` (Run mode), `endless`, and `total`. Counters land in the mode block
//! and in `total`; best-run fields are peaks in both.

use crate::game::upgrades::UpgradeKind;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One set of counters, persisted with camelCase field names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatBlock {
    pub total_gold_earned: u64,
    pub total_words_solved: u64,
    pub total_words_attempted: u64,
    pub total_bosses_solved: u64,
    pub total_bosses_attempted: u64,
    pub total_hints_used: [u64; UpgradeKind::COUNT],
    pub total_guesses: u64,
    pub runs_played: u64,
    pub runs_completed: u64,
    pub best_run_words: u64,
    pub best_run_boss: u64,
    /// Fewest guesses over a completed run; 0 until the first run completes
    pub best_run_guesses: u64,
    pub endless_best_words: u64,
}

impl StatBlock {
    /// Lenient field-by-field decode; any missing or ill-typed field keeps its default
    fn from_value(value: &Value) -> Self {
        let mut block = Self::default();
        let Some(map) = value.as_object() else {
            log::warn!("stat block is not an object, using defaults");
            return block;
        };

        let field = |key: &str, slot: &mut u64| match map.get(key) {
            None => {}
            Some(raw) => match raw.as_u64() {
                Some(n) => *slot = n,
                None => log::warn!("type mismatch for {key} in loaded stats, using default"),
            },
        };
        field("totalGoldEarned", &mut block.total_gold_earned);
        field("totalWordsSolved", &mut block.total_words_solved);
        field("totalWordsAttempted", &mut block.total_words_attempted);
        field("totalBossesSolved", &mut block.total_bosses_solved);
        field("totalBossesAttempted", &mut block.total_bosses_attempted);
        field("totalGuesses", &mut block.total_guesses);
        field("runsPlayed", &mut block.runs_played);
        field("runsCompleted", &mut block.runs_completed);
        field("bestRunWords", &mut block.best_run_words);
        field("bestRunBoss", &mut block.best_run_boss);
        field("bestRunGuesses", &mut block.best_run_guesses);
        field("endlessBestWords", &mut block.endless_best_words);

        if let Some(raw) = map.get("totalHintsUsed") {
            match hint_counts(raw) {
                Some(counts) => block.total_hints_used = counts,
                None => log::warn!("invalid totalHintsUsed in loaded stats, using zeros"),
            }
        }
        block
    }

    pub const fn add_hint(&mut self, kind: UpgradeKind) {
        self.total_hints_used[kind.index()] += 1;
    }

    #[must_use]
    pub const fn hints_used(&self, kind: UpgradeKind) -> u64 {
        self.total_hints_used[kind.index()]
    }

    /// Fold a completed Run into the best-run peaks
    pub fn note_completed_run(&mut self, words: u64, bosses: u64, guesses: u64) {
        self.best_run_words = self.best_run_words.max(words);
        self.best_run_boss = self.best_run_boss.max(bosses);
        if self.best_run_guesses == 0 || guesses < self.best_run_guesses {
            self.best_run_guesses = guesses;
        }
    }

    /// Raise the Endless peak; true if `words` beat it
    pub fn note_endless_words(&mut self, words: u64) -> bool {
        if words > self.endless_best_words {
            self.endless_best_words = words;
            return true;
        }
        false
    }

    /// Super, positive, negative and bonus uses per solved word
    #[must_use]
    // Allow: display-only averages
    #[allow(clippy::cast_precision_loss)]
    pub fn hints_per_solved(&self) -> Option<f64> {
        let hints: u64 = [
            UpgradeKind::SuperHint,
            UpgradeKind::PositiveHint,
            UpgradeKind::NegativeHint,
            UpgradeKind::BonusGuess,
        ]
        .into_iter()
        .map(|kind| self.hints_used(kind))
        .sum();
        (self.total_words_solved > 0).then(|| hints as f64 / self.total_words_solved as f64)
    }

    #[must_use]
    // Allow: display-only averages
    #[allow(clippy::cast_precision_loss)]
    pub fn guesses_per_solved(&self) -> Option<f64> {
        (self.total_words_solved > 0)
            .then(|| self.total_guesses as f64 / self.total_words_solved as f64)
    }
}

/// Exactly seven non-negative integers, or nothing
fn hint_counts(raw: &Value) -> Option<[u64; UpgradeKind::COUNT]> {
    let entries = raw.as_array()?;
    if entries.len() != UpgradeKind::COUNT {
        return None;
    }
    let mut counts = [0; UpgradeKind::COUNT];
    for (slot, entry) in counts.iter_mut().zip(entries) {
        *slot = entry.as_u64()?;
    }
    Some(counts)
}

/// Which mode block a checkpoint belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ledger {
    Normal,
    Endless,
}

/// Which block to report on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatsView {
    Normal,
    Endless,
    #[default]
    Total,
}

impl StatsView {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Normal => "Normal Mode",
            Self::Endless => "Endless Mode",
            Self::Total => "Total",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub normal: StatBlock,
    pub endless: StatBlock,
    pub total: StatBlock,
}

impl Stats {
    /// Decode persisted stats, migrating the legacy flat layout
    ///
    /// The current layout has `normal`, `endless` and `total` objects. Anything else is a
    /// legacy flat block: it seeds `total`, its `endlessBestWords` moves to the endless block,
    /// and `total.endlessBestWords` restarts from zero. Never fails.
    #[must_use]
    pub fn from_json(raw: &str) -> Self {
        let value: Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("stats blob is not valid JSON ({e}), starting fresh");
                return Self::default();
            }
        };

        if let Some(map) = value.as_object()
            && let Some((normal, endless, total)) = split_blocks(map)
        {
            return Self {
                normal: StatBlock::from_value(normal),
                endless: StatBlock::from_value(endless),
                total: StatBlock::from_value(total),
            };
        }

        log::info!("migrating legacy flat stats");
        let mut total = StatBlock::from_value(&value);
        let mut endless = StatBlock::default();
        if let Some(best) = value.get("endlessBestWords").and_then(Value::as_u64) {
            endless.endless_best_words = best;
        }
        total.endless_best_words = 0;
        Self {
            normal: StatBlock::default(),
            endless,
            total,
        }
    }

    #[must_use]
    pub const fn view(&self, view: StatsView) -> &StatBlock {
        match view {
            StatsView::Normal => &self.normal,
            StatsView::Endless => &self.endless,
            StatsView::Total => &self.total,
        }
    }

    /// Apply the same update to a mode block and to `total`
    pub fn record(&mut self, ledger: Ledger, update: impl Fn(&mut StatBlock)) {
        match ledger {
            Ledger::Normal => update(&mut self.normal),
            Ledger::Endless => update(&mut self.endless),
        }
        update(&mut self.total);
    }
}

fn split_blocks(map: &Map<String, Value>) -> Option<(&Value, &Value, &Value)> {
    let present = |key: &str| map.get(key).filter(|v| !v.is_null());
    Some((present("normal")?, present("endless")?, present("total")?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(StatBlock::default()).unwrap();
        assert!(json.get("totalGoldEarned").is_some());
        assert!(json.get("totalHintsUsed").is_some());
        assert!(json.get("bestRunGuesses").is_some());
        assert!(json.get("endlessBestWords").is_some());
        assert!(json.get("total_gold_earned").is_none());
    }

    #[test]
    fn round_trip() {
        let mut stats = Stats::default();
        stats.record(Ledger::Normal, |b| {
            b.total_words_solved += 3;
            b.add_hint(UpgradeKind::SuperHint);
        });
        stats.record(Ledger::Endless, |b| {
            b.note_endless_words(12);
        });
        let json = serde_json::to_string(&stats).unwrap();
        assert_eq!(Stats::from_json(&json), stats);
    }

    #[test]
    fn record_hits_mode_and_total() {
        let mut stats = Stats::default();
        stats.record(Ledger::Endless, |b| b.total_guesses += 4);
        assert_eq!(stats.endless.total_guesses, 4);
        assert_eq!(stats.total.total_guesses, 4);
        assert_eq!(stats.normal.total_guesses, 0);
    }

    #[test]
    fn malformed_hint_counts_load_as_zeros() {
        for bad in [
            r#"[1,2,3]"#,
            r#"[1,2,3,4,5,6,7,8]"#,
            r#"["a",2,3,4,5,6,7]"#,
            r#""seven""#,
        ] {
            let raw = format!(
                r#"{{"normal":{{"totalHintsUsed":{bad},"totalGuesses":9}},"endless":{{}},"total":{{}}}}"#
            );
            let stats = Stats::from_json(&raw);
            assert_eq!(stats.normal.total_hints_used, [0; 7], "{bad}");
            assert_eq!(stats.normal.total_guesses, 9);
        }
    }

    #[test]
    fn mistyped_fields_fall_back_individually() {
        let raw = r#"{"normal":{"totalGoldEarned":"lots","runsPlayed":4,"bestRunWords":-1},
                      "endless":{"endlessBestWords":7},"total":{"runsPlayed":4}}"#;
        let stats = Stats::from_json(raw);
        assert_eq!(stats.normal.total_gold_earned, 0);
        assert_eq!(stats.normal.runs_played, 4);
        assert_eq!(stats.normal.best_run_words, 0);
        assert_eq!(stats.endless.endless_best_words, 7);
    }

    #[test]
    fn legacy_flat_stats_migrate() {
        let raw = r#"{"totalGoldEarned":120,"totalWordsSolved":30,"totalHintsUsed":[0,1,2,3,4],
                      "runsPlayed":6,"endlessBestWords":14}"#;
        let stats = Stats::from_json(raw);

        assert_eq!(stats.total.total_gold_earned, 120);
        assert_eq!(stats.total.total_words_solved, 30);
        assert_eq!(stats.total.runs_played, 6);
        // five-slot legacy hint array is not seven long
        assert_eq!(stats.total.total_hints_used, [0; 7]);
        assert_eq!(stats.total.endless_best_words, 0);
        assert_eq!(stats.endless.endless_best_words, 14);
        assert_eq!(stats.normal, StatBlock::default());
    }

    #[test]
    fn partial_new_layout_is_legacy() {
        let stats = Stats::from_json(r#"{"normal":{"runsPlayed":2},"total":{}}"#);
        assert_eq!(stats.normal, StatBlock::default());
    }

    #[test]
    fn garbage_starts_fresh() {
        assert_eq!(Stats::from_json("{{{"), Stats::default());
        assert_eq!(Stats::from_json("[1,2]"), Stats::default());
    }

    #[test]
    fn best_run_guesses_treats_zero_as_unset() {
        let mut block = StatBlock::default();
        block.note_completed_run(5, 0, 12);
        assert_eq!(block.best_run_guesses, 12);
        block.note_completed_run(3, 1, 20);
        assert_eq!(block.best_run_guesses, 12);
        assert_eq!(block.best_run_words, 5);
        assert_eq!(block.best_run_boss, 1);
        block.note_completed_run(5, 0, 9);
        assert_eq!(block.best_run_guesses, 9);
    }

    #[test]
    fn averages_need_a_solved_word() {
        let mut block = StatBlock::default();
        assert_eq!(block.guesses_per_solved(), None);
        assert_eq!(block.hints_per_solved(), None);
        block.total_words_solved = 4;
        block.total_guesses = 10;
        block.total_hints_used = [0, 1, 1, 1, 1, 9, 9];
        assert_eq!(block.guesses_per_solved(), Some(2.5));
        assert_eq!(block.hints_per_solved(), Some(1.0));
    }
}
