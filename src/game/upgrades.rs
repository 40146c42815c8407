//! Upgrade catalog
//!
//! Seven fixed upgrade kinds. `UpgradeLevels` is the permanent "levels owned" progression,
//! `UpgradeUses` is the per-session "uses left" projection of it.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The seven upgrade kinds, index-addressed in persisted data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpgradeKind {
    ExtraGuess,
    SuperHint,
    PositiveHint,
    NegativeHint,
    BonusGuess,
    ExtraLife,
    WordReroll,
}

/// Static catalog entry
#[derive(Debug, Clone, Copy)]
pub struct UpgradeInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub cost: u32,
    pub max_level: u32,
}

const CATALOG: [UpgradeInfo; UpgradeKind::COUNT] = [
    UpgradeInfo {
        name: "+1 Guess for all words",
        description: "Gain +1 guess each word.",
        long_description: "Every word gives one extra guess. Always active once unlocked.",
        cost: 30,
        max_level: 1,
    },
    UpgradeInfo {
        name: "Super Hint",
        description: "Reveal a letter in place for current word.",
        long_description: "Use to reveal a letter in the correct position for the current word. \
                           Each level adds one use per run.",
        cost: 25,
        max_level: 5,
    },
    UpgradeInfo {
        name: "Positive Hint",
        description: "Reveal a letter in word.",
        long_description: "Use to reveal a letter that exists somewhere in the word. \
                           Each level adds one use per run.",
        cost: 15,
        max_level: 5,
    },
    UpgradeInfo {
        name: "Negative Hint",
        description: "Reveal a letter NOT in word.",
        long_description: "Use to reveal a letter that is NOT in the word. \
                           Each level adds one use per run.",
        cost: 10,
        max_level: 5,
    },
    UpgradeInfo {
        name: "Bonus Guess",
        description: "Get an extra guess this word.",
        long_description: "Use to get an extra guess for the current word. \
                           Each level adds one use per run.",
        cost: 17,
        max_level: 5,
    },
    UpgradeInfo {
        name: "Extra Life (endless only)",
        description: "Continue if you get a word wrong in endless.",
        long_description: "Lets you retry the same word if you get it wrong in endless mode. \
                           Each level adds one life per run.",
        cost: 40,
        max_level: 2,
    },
    UpgradeInfo {
        name: "Word Reroll",
        description: "Reroll the current word.",
        long_description: "Use to reroll the current word. Resets your guesses and timer for this \
                           word, but does NOT restore used hints. Does not count toward words solved.",
        cost: 25,
        max_level: 3,
    },
];

impl UpgradeKind {
    pub const COUNT: usize = 7;

    pub const ALL: [Self; Self::COUNT] = [
        Self::ExtraGuess,
        Self::SuperHint,
        Self::PositiveHint,
        Self::NegativeHint,
        Self::BonusGuess,
        Self::ExtraLife,
        Self::WordReroll,
    ];

    /// Position in persisted arrays
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub const fn info(self) -> &'static UpgradeInfo {
        &CATALOG[self.index()]
    }

    #[must_use]
    pub const fn cost(self) -> u32 {
        self.info().cost
    }

    #[must_use]
    pub const fn max_level(self) -> u32 {
        self.info().max_level
    }

    /// Kinds the player activates during a round
    #[must_use]
    pub const fn is_consumable(self) -> bool {
        matches!(
            self,
            Self::SuperHint | Self::PositiveHint | Self::NegativeHint | Self::BonusGuess | Self::WordReroll
        )
    }

    /// Parse a CLI-friendly name ("super", "super-hint", "reroll", index digits, ...)
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "0" | "extra-guess" | "guess" => Some(Self::ExtraGuess),
            "1" | "super" | "super-hint" => Some(Self::SuperHint),
            "2" | "positive" | "positive-hint" => Some(Self::PositiveHint),
            "3" | "negative" | "negative-hint" => Some(Self::NegativeHint),
            "4" | "bonus" | "bonus-guess" => Some(Self::BonusGuess),
            "5" | "life" | "extra-life" => Some(Self::ExtraLife),
            "6" | "reroll" | "word-reroll" => Some(Self::WordReroll),
            _ => None,
        }
    }
}

impl fmt::Display for UpgradeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.info().name)
    }
}

/// Owned level per upgrade kind, persisted as a JSON array of exactly seven integers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeLevels([u32; UpgradeKind::COUNT]);

impl UpgradeLevels {
    #[must_use]
    pub const fn new(levels: [u32; UpgradeKind::COUNT]) -> Self {
        Self(levels)
    }

    #[inline]
    #[must_use]
    pub const fn level(&self, kind: UpgradeKind) -> u32 {
        self.0[kind.index()]
    }

    #[inline]
    #[must_use]
    pub fn owns(&self, kind: UpgradeKind) -> bool {
        self.level(kind) > 0
    }

    #[must_use]
    pub fn is_maxed(&self, kind: UpgradeKind) -> bool {
        self.level(kind) >= kind.max_level()
    }

    /// Raise a level by one, never past the kind's maximum
    ///
    /// Returns false (and leaves the level alone) if already maxed.
    pub fn raise(&mut self, kind: UpgradeKind) -> bool {
        if self.is_maxed(kind) {
            return false;
        }
        self.0[kind.index()] += 1;
        true
    }

    #[must_use]
    pub const fn as_array(&self) -> &[u32; UpgradeKind::COUNT] {
        &self.0
    }

    /// Lenient load from persisted JSON
    ///
    /// Accepts legacy arrays of any length (padded with zeros or truncated to seven);
    /// non-numeric entries become zero and levels are clamped to each kind's maximum.
    /// Anything that is not an array yields all-zero levels.
    #[must_use]
    pub fn from_json(raw: &str) -> Self {
        let Ok(Value::Array(entries)) = serde_json::from_str::<Value>(raw) else {
            log::warn!("upgrade levels blob is not an array, resetting to zero");
            return Self::default();
        };
        if entries.len() != UpgradeKind::COUNT {
            log::info!(
                "migrating upgrade levels from length {} to {}",
                entries.len(),
                UpgradeKind::COUNT
            );
        }

        let mut levels = [0; UpgradeKind::COUNT];
        for (kind, entry) in UpgradeKind::ALL.into_iter().zip(&entries) {
            let level = entry.as_u64().map_or(0, |n| n.min(u64::from(kind.max_level())));
            levels[kind.index()] = level as u32;
        }
        Self(levels)
    }
}

/// Uses left this session, seeded from owned levels at session start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpgradeUses([u32; UpgradeKind::COUNT]);

impl UpgradeUses {
    #[must_use]
    pub const fn from_levels(levels: &UpgradeLevels) -> Self {
        Self(*levels.as_array())
    }

    #[inline]
    #[must_use]
    pub const fn remaining(&self, kind: UpgradeKind) -> u32 {
        self.0[kind.index()]
    }

    /// Consume one use; false if none remain
    pub fn consume(&mut self, kind: UpgradeKind) -> bool {
        let slot = &mut self.0[kind.index()];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_matches_progression_table() {
        let max: Vec<u32> = UpgradeKind::ALL.iter().map(|k| k.max_level()).collect();
        let cost: Vec<u32> = UpgradeKind::ALL.iter().map(|k| k.cost()).collect();
        assert_eq!(max, vec![1, 5, 5, 5, 5, 2, 3]);
        assert_eq!(cost, vec![30, 25, 15, 10, 17, 40, 25]);
    }

    #[test]
    fn index_round_trip() {
        for kind in UpgradeKind::ALL {
            assert_eq!(UpgradeKind::from_index(kind.index()), Some(kind));
        }
        assert_eq!(UpgradeKind::from_index(7), None);
    }

    #[test]
    fn raise_stops_at_max() {
        let mut levels = UpgradeLevels::default();
        assert!(levels.raise(UpgradeKind::ExtraGuess));
        assert!(!levels.raise(UpgradeKind::ExtraGuess));
        assert_eq!(levels.level(UpgradeKind::ExtraGuess), 1);
    }

    #[test]
    fn levels_serialize_as_plain_array() {
        let levels = UpgradeLevels::new([1, 2, 3, 4, 5, 2, 3]);
        let json = serde_json::to_string(&levels).unwrap();
        assert_eq!(json, "[1,2,3,4,5,2,3]");
        assert_eq!(UpgradeLevels::from_json(&json), levels);
    }

    #[test]
    fn legacy_short_array_is_padded() {
        let levels = UpgradeLevels::from_json("[1,3,0,2,1]");
        assert_eq!(levels.as_array(), &[1, 3, 0, 2, 1, 0, 0]);
    }

    #[test]
    fn long_array_is_truncated_and_clamped() {
        let levels = UpgradeLevels::from_json("[9,1,1,1,1,1,1,4,4]");
        assert_eq!(levels.as_array(), &[1, 1, 1, 1, 1, 1, 1]);
    }

    #[test]
    fn garbage_entries_become_zero() {
        let levels = UpgradeLevels::from_json(r#"[1,"x",null,-2,2.5,1,1]"#);
        assert_eq!(levels.as_array(), &[1, 0, 0, 0, 0, 1, 1]);
        assert_eq!(UpgradeLevels::from_json("{\"a\":1}"), UpgradeLevels::default());
        assert_eq!(UpgradeLevels::from_json("not json"), UpgradeLevels::default());
    }

    #[test]
    fn uses_consume_to_zero() {
        let levels = UpgradeLevels::new([0, 2, 0, 0, 0, 0, 0]);
        let mut uses = UpgradeUses::from_levels(&levels);
        assert!(uses.consume(UpgradeKind::SuperHint));
        assert!(uses.consume(UpgradeKind::SuperHint));
        assert!(!uses.consume(UpgradeKind::SuperHint));
        assert_eq!(uses.remaining(UpgradeKind::SuperHint), 0);
        assert!(!uses.consume(UpgradeKind::NegativeHint));
    }

    #[test]
    fn names_parse() {
        assert_eq!(UpgradeKind::from_name("Super"), Some(UpgradeKind::SuperHint));
        assert_eq!(UpgradeKind::from_name("6"), Some(UpgradeKind::WordReroll));
        assert_eq!(UpgradeKind::from_name("wings"), None);
    }
}
