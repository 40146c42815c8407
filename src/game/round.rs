//! One word-guessing episode
//!
//! `Active` until the target is guessed, the allowance runs out, or the timer expires;
//! then `Won` or `Lost`. The session decides what a resolved round means.

use super::error::GameError;
use super::hints::Hint;
use super::timer::RoundTimer;
use crate::core::{Feedback, KeyboardState, Word, WordLength};
use crate::wordlists::WordCorpus;

/// A target word and whether it is the boss
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSlot {
    pub target: Word,
    pub boss: bool,
}

impl WordSlot {
    #[must_use]
    pub const fn new(target: Word, boss: bool) -> Self {
        Self { target, boss }
    }

    #[must_use]
    pub const fn length(&self) -> WordLength {
        self.target.length()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    Active,
    Won,
    Lost,
}

impl RoundStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Active)
    }
}

#[derive(Debug, Clone)]
pub struct Round {
    slot: WordSlot,
    guesses: Vec<Word>,
    hints: Vec<Hint>,
    bonus_guesses: u32,
    /// Base guesses plus the permanent extra-guess upgrade
    base_allowance: u32,
    timer: RoundTimer,
    status: RoundStatus,
}

impl Round {
    #[must_use]
    pub const fn new(slot: WordSlot, base_allowance: u32, timer_seconds: Option<u32>) -> Self {
        Self {
            slot,
            guesses: Vec::new(),
            hints: Vec::new(),
            bonus_guesses: 0,
            base_allowance,
            timer: RoundTimer::new(timer_seconds),
            status: RoundStatus::Active,
        }
    }

    #[must_use]
    pub const fn slot(&self) -> &WordSlot {
        &self.slot
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.slot.target
    }

    #[must_use]
    pub const fn is_boss(&self) -> bool {
        self.slot.boss
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub fn hints(&self) -> &[Hint] {
        &self.hints
    }

    #[must_use]
    pub const fn bonus_guesses(&self) -> u32 {
        self.bonus_guesses
    }

    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    #[must_use]
    pub const fn timer(&self) -> &RoundTimer {
        &self.timer
    }

    /// Total guesses this round may take
    #[must_use]
    pub const fn allowance(&self) -> u32 {
        self.base_allowance + self.bonus_guesses
    }

    #[must_use]
    pub fn guesses_left(&self) -> u32 {
        self.allowance().saturating_sub(self.guess_count())
    }

    #[must_use]
    // Allow: bounded by the allowance, a handful of guesses
    #[allow(clippy::cast_possible_truncation)]
    pub fn guess_count(&self) -> u32 {
        self.guesses.len() as u32
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.status, RoundStatus::Active)
    }

    /// Validate and play a guess
    ///
    /// # Errors
    ///
    /// - `NotPlaying` if the round is already resolved
    /// - `WrongLength` if the letter count differs from the target's
    /// - `NotInWordList` if the word is malformed or not an accepted guess
    ///
    /// Nothing changes on error.
    pub fn submit(&mut self, raw: &str, corpus: &WordCorpus) -> Result<RoundStatus, GameError> {
        if !self.is_active() {
            return Err(GameError::NotPlaying);
        }
        let expected = self.slot.length();
        let text = raw.trim().to_lowercase();
        if text.chars().count() != expected.letters() {
            return Err(GameError::WrongLength {
                expected: expected.letters(),
            });
        }
        let guess = Word::with_length(text, expected).map_err(|_| GameError::NotInWordList)?;
        if !corpus.is_valid_guess(&guess) {
            return Err(GameError::NotInWordList);
        }

        let solved = guess == self.slot.target;
        self.guesses.push(guess);

        if solved {
            self.resolve(RoundStatus::Won);
        } else if self.guess_count() >= self.allowance() {
            self.resolve(RoundStatus::Lost);
        }
        Ok(self.status)
    }

    /// One second of wall time; returns `Lost` if the timer ran out on this tick
    pub fn tick(&mut self) -> Option<RoundStatus> {
        if self.is_active() && self.timer.tick() {
            self.resolve(RoundStatus::Lost);
            return Some(self.status);
        }
        None
    }

    fn resolve(&mut self, status: RoundStatus) {
        self.timer.stop();
        self.status = status;
    }

    /// Record a revealed hint
    pub fn push_hint(&mut self, hint: Hint) {
        if hint == Hint::BonusGuess {
            self.bonus_guesses += 1;
        }
        self.hints.push(hint);
    }

    /// Replay the same target: guesses, bonus guesses and timer reset, hint history kept
    pub fn restart(&mut self) {
        self.guesses.clear();
        self.bonus_guesses = 0;
        self.timer.restart();
        self.status = RoundStatus::Active;
    }

    /// Swap in a new target of the same kind, keeping the hint history
    pub fn reroll(&mut self, target: Word) {
        debug_assert_eq!(target.length(), self.slot.length());
        self.slot.target = target;
        self.restart();
    }

    /// Feedback row for every guess so far
    #[must_use]
    pub fn feedback(&self) -> Vec<Feedback> {
        self.guesses
            .iter()
            .map(|guess| Feedback::calculate(guess, &self.slot.target))
            .collect()
    }

    #[must_use]
    pub fn keyboard(&self) -> KeyboardState {
        KeyboardState::from_guesses(&self.guesses, &self.slot.target)
    }
}
