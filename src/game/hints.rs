//! Hint descriptors and history-aware hint selection
//!
//! Candidate pickers are pure: they read the target, the round's guesses and its hint
//! history, and return `None` when no fresh information is left to reveal. Callers
//! consume an upgrade use only when a hint comes back.

use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;

/// One entry of a round's hint history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hint {
    /// Super Hint: the letter at a 0-based position
    Letter { position: usize, letter: u8 },
    /// Positive Hint: a letter the target contains
    Present(u8),
    /// Negative Hint: a letter the target does not contain
    Absent(u8),
    /// Bonus Guess notice
    BonusGuess,
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Letter { position, letter } => write!(
                f,
                "Super Hint: Letter {} is {}",
                position + 1,
                char::from(letter.to_ascii_uppercase())
            ),
            Self::Present(letter) => write!(
                f,
                "Positive Hint: The word contains {}",
                char::from(letter.to_ascii_uppercase())
            ),
            Self::Absent(letter) => write!(
                f,
                "Negative Hint: The word does NOT contain {}",
                char::from(letter.to_ascii_uppercase())
            ),
            Self::BonusGuess => f.write_str("Bonus Guess: You have an extra guess for this word!"),
        }
    }
}

/// Pick a position that neither an earlier Super Hint nor an exact-position guess revealed
pub fn super_hint<R: Rng + ?Sized>(
    target: &Word,
    guesses: &[Word],
    history: &[Hint],
    rng: &mut R,
) -> Option<Hint> {
    let mut revealed: FxHashSet<usize> = history
        .iter()
        .filter_map(|hint| match hint {
            Hint::Letter { position, .. } => Some(*position),
            _ => None,
        })
        .collect();
    for guess in guesses {
        revealed.extend(
            guess
                .chars()
                .iter()
                .zip(target.chars())
                .enumerate()
                .filter(|(_, (g, t))| g == t)
                .map(|(i, _)| i),
        );
    }

    let candidates: Vec<usize> = (0..target.len()).filter(|i| !revealed.contains(i)).collect();
    candidates.choose(rng).map(|&position| Hint::Letter {
        position,
        letter: target.char_at(position),
    })
}

/// Pick a target letter that is neither already hinted as present nor typed in any guess
///
/// Candidates are drawn per target position, so repeated letters weigh more.
pub fn positive_hint<R: Rng + ?Sized>(
    target: &Word,
    guesses: &[Word],
    history: &[Hint],
    rng: &mut R,
) -> Option<Hint> {
    let mut known: FxHashSet<u8> = history
        .iter()
        .filter_map(|hint| match hint {
            Hint::Present(letter) => Some(*letter),
            _ => None,
        })
        .collect();
    for guess in guesses {
        known.extend(guess.chars());
    }

    let candidates: Vec<u8> = target
        .chars()
        .iter()
        .copied()
        .filter(|letter| !known.contains(letter))
        .collect();
    candidates.choose(rng).copied().map(Hint::Present)
}

/// Pick a letter of the alphabet the target lacks and no earlier Negative Hint named
pub fn negative_hint<R: Rng + ?Sized>(
    target: &Word,
    history: &[Hint],
    rng: &mut R,
) -> Option<Hint> {
    let named: FxHashSet<u8> = history
        .iter()
        .filter_map(|hint| match hint {
            Hint::Absent(letter) => Some(*letter),
            _ => None,
        })
        .collect();

    let candidates: Vec<u8> = (b'a'..=b'z')
        .filter(|&letter| !target.has_letter(letter) && !named.contains(&letter))
        .collect();
    candidates.choose(rng).copied().map(Hint::Absent)
}
