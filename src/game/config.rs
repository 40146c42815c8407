//! Session configuration
//!
//! The four user toggles, answer-pool difficulty, and the constants derived from them.

pub use crate::wordlists::Difficulty;

/// Seconds per word when the timer modifier is on
pub const ROUND_SECONDS: u32 = 60;

/// Gold per boss defeated
pub const BOSS_GOLD: u32 = 10;

/// In Endless mode, every Nth word (1-indexed) is a boss when bosses are enabled
pub const BOSS_CADENCE: u32 = 5;

/// User-togglable session modifiers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// One more regular word per run
    pub extra_word: bool,
    /// One fewer base guess per word
    pub fewer_guesses: bool,
    /// Boss rounds with seven-letter words
    pub boss: bool,
    /// 60 second limit per word
    pub timer: bool,
}

/// Everything needed to size and pay out a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionConfig {
    pub modifiers: Modifiers,
    pub difficulty: Difficulty,
}

impl SessionConfig {
    #[must_use]
    pub const fn new(modifiers: Modifiers, difficulty: Difficulty) -> Self {
        Self {
            modifiers,
            difficulty,
        }
    }

    /// Regular (non-boss) words in a Run
    #[must_use]
    pub const fn run_words(&self) -> usize {
        if self.modifiers.extra_word { 6 } else { 5 }
    }

    /// Base guesses per word before upgrades and bonus guesses
    ///
    /// Shared by both modes.
    #[must_use]
    pub const fn base_guesses(&self) -> u32 {
        if self.modifiers.fewer_guesses { 6 } else { 7 }
    }

    #[must_use]
    pub const fn gold_per_word(&self) -> u32 {
        match self.difficulty {
            Difficulty::Easy => 4,
            Difficulty::Hard => 5,
        }
    }

    /// Session-end payout
    #[must_use]
    pub const fn payout(&self, words_solved: u32, bosses_killed: u32) -> u32 {
        words_solved * self.gold_per_word() + bosses_killed * BOSS_GOLD
    }

    /// Whether the `nth` Endless word (1-indexed) is a boss
    #[must_use]
    pub const fn is_endless_boss(&self, nth: u32) -> bool {
        self.modifiers.boss && nth % BOSS_CADENCE == 0
    }

    #[must_use]
    pub const fn timer_seconds(&self) -> Option<u32> {
        if self.modifiers.timer {
            Some(ROUND_SECONDS)
        } else {
            None
        }
    }
}
