//! The word corpus the game draws targets from and validates guesses against
//!
//! Four lists:
//! - full five-letter list: the Hard answer pool, and the list regular guesses are checked against
//! - common five-letter list: the Easy answer pool
//! - seven-letter answers: boss targets
//! - seven-letter guesses: accepted boss guesses

use super::embedded::{FIVE_LETTER_COMMON, FIVE_LETTER_WORDS, SEVEN_LETTER_GUESSES, SEVEN_LETTER_WORDS};
use super::loader::{load_from_file, words_from_slice};
use crate::core::{Word, WordLength};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File names looked up by [`WordCorpus::from_dir`]
pub const FIVE_LETTER_FILE: &str = "five_letter_words.txt";
pub const FIVE_LETTER_COMMON_FILE: &str = "five_letter_words_guess.txt";
pub const SEVEN_LETTER_FILE: &str = "seven_letter_words.txt";
pub const SEVEN_LETTER_GUESS_FILE: &str = "seven_letter_words_guess.txt";

/// Answer pool selection for regular words
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Difficulty {
    /// Common words only
    #[default]
    Easy,
    /// Any listed word, including obscure ones
    Hard,
}

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("word list {list} has {found} usable words, need at least {required}")]
    TooFewWords {
        list: &'static str,
        found: usize,
        required: usize,
    },
}

/// A list of words with constant-time membership checks
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl WordList {
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let index = words.iter().map(|w| w.text().to_string()).collect();
        Self { words, index }
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.index.contains(text)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Pick a word uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }
}

/// The four validated word lists
#[derive(Debug, Clone)]
pub struct WordCorpus {
    five: WordList,
    five_common: WordList,
    seven: WordList,
    seven_guesses: WordList,
}

impl WordCorpus {
    /// Minimum usable entries in each five-letter list
    pub const MIN_FIVE_LETTER: usize = 10;
    /// Minimum usable entries in each seven-letter list
    pub const MIN_SEVEN_LETTER: usize = 2;

    /// Build a corpus, failing if any list is undersized
    ///
    /// # Errors
    ///
    /// Returns `CorpusError::TooFewWords` naming the first list below its minimum.
    pub fn new(
        five: Vec<Word>,
        five_common: Vec<Word>,
        seven: Vec<Word>,
        seven_guesses: Vec<Word>,
    ) -> Result<Self, CorpusError> {
        check_size(FIVE_LETTER_FILE, five.len(), Self::MIN_FIVE_LETTER)?;
        check_size(FIVE_LETTER_COMMON_FILE, five_common.len(), Self::MIN_FIVE_LETTER)?;
        check_size(SEVEN_LETTER_FILE, seven.len(), Self::MIN_SEVEN_LETTER)?;
        check_size(SEVEN_LETTER_GUESS_FILE, seven_guesses.len(), Self::MIN_SEVEN_LETTER)?;

        log::debug!(
            "corpus loaded: {} five-letter ({} common), {} seven-letter ({} guessable)",
            five.len(),
            five_common.len(),
            seven.len(),
            seven_guesses.len()
        );

        Ok(Self {
            five: WordList::new(five),
            five_common: WordList::new(five_common),
            seven: WordList::new(seven),
            seven_guesses: WordList::new(seven_guesses),
        })
    }

    /// Corpus compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `CorpusError::TooFewWords` if the embedded data is undersized.
    pub fn embedded() -> Result<Self, CorpusError> {
        Self::new(
            words_from_slice(FIVE_LETTER_WORDS, WordLength::Five),
            words_from_slice(FIVE_LETTER_COMMON, WordLength::Five),
            words_from_slice(SEVEN_LETTER_WORDS, WordLength::Seven),
            words_from_slice(SEVEN_LETTER_GUESSES, WordLength::Seven),
        )
    }

    /// Load the four lists from a directory
    ///
    /// # Errors
    ///
    /// Returns `CorpusError::Io` if any file cannot be read, or
    /// `CorpusError::TooFewWords` if a list is undersized after filtering.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, CorpusError> {
        let dir = dir.as_ref();
        let read = |name: &str, length: WordLength| {
            let path = dir.join(name);
            load_from_file(&path, length).map_err(|source| CorpusError::Io { path, source })
        };

        Self::new(
            read(FIVE_LETTER_FILE, WordLength::Five)?,
            read(FIVE_LETTER_COMMON_FILE, WordLength::Five)?,
            read(SEVEN_LETTER_FILE, WordLength::Seven)?,
            read(SEVEN_LETTER_GUESS_FILE, WordLength::Seven)?,
        )
    }

    /// The list targets of this length are drawn from
    ///
    /// Boss words always come from the seven-letter answers; regular words honor the difficulty.
    #[must_use]
    pub fn answer_pool(&self, length: WordLength, difficulty: Difficulty) -> &WordList {
        match (length, difficulty) {
            (WordLength::Seven, _) => &self.seven,
            (WordLength::Five, Difficulty::Easy) => &self.five_common,
            (WordLength::Five, Difficulty::Hard) => &self.five,
        }
    }

    /// Whether a guess is accepted during play
    ///
    /// Seven-letter guesses are checked against the boss guess list. Five-letter guesses are
    /// checked against the full five-letter list, whatever the difficulty.
    #[must_use]
    pub fn is_valid_guess(&self, guess: &Word) -> bool {
        match guess.length() {
            WordLength::Five => self.five.contains(guess.text()),
            WordLength::Seven => self.seven_guesses.contains(guess.text()),
        }
    }

    /// Draw a random target
    ///
    /// # Panics
    /// Will not panic - pool sizes are validated on construction.
    #[must_use]
    pub fn draw<R: Rng + ?Sized>(
        &self,
        length: WordLength,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Word {
        self.answer_pool(length, difficulty)
            .choose(rng)
            .cloned()
            .expect("pool size already validated")
    }
}

fn check_size(list: &'static str, found: usize, required: usize) -> Result<(), CorpusError> {
    if found < required {
        return Err(CorpusError::TooFewWords {
            list,
            found,
            required,
        });
    }
    Ok(())
}
