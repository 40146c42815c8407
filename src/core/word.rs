//! Word representation
//!
//! A Word stores a 5- or 7-letter word along with letter position indices used by
//! feedback calculation and hint selection.

use std::fmt;
use thiserror::Error;

/// The two word lengths the game deals in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordLength {
    /// Regular words
    Five,
    /// Boss words
    Seven,
}

impl WordLength {
    /// Number of letters
    #[inline]
    #[must_use]
    pub const fn letters(self) -> usize {
        match self {
            Self::Five => 5,
            Self::Seven => 7,
        }
    }

    /// Map a letter count back to a length, if it is one the game supports
    #[must_use]
    pub const fn from_letters(letters: usize) -> Option<Self> {
        match letters {
            5 => Some(Self::Five),
            7 => Some(Self::Seven),
            _ => None,
        }
    }
}

/// A lowercase ASCII word of 5 or 7 letters with a letter-set index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    length: WordLength,
    /// Bit `n` set when the word contains letter `b'a' + n`
    letters: u32,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word of either supported length
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is neither 5 nor 7
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordrun::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// let boss = Word::new("journey").unwrap();
    /// assert_eq!(boss.len(), 7);
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();
        let length = WordLength::from_letters(text.len()).ok_or(WordError::InvalidLength {
            expected: 5,
            actual: text.len(),
        })?;
        Self::build(text, length)
    }

    /// Create a Word that must have exactly the given length
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` when the letter count differs from `length`,
    /// and the character errors of [`Word::new`] otherwise.
    pub fn with_length(text: impl Into<String>, length: WordLength) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();
        if text.len() != length.letters() {
            return Err(WordError::InvalidLength {
                expected: length.letters(),
                actual: text.len(),
            });
        }
        Self::build(text, length)
    }

    fn build(text: String, length: WordLength) -> Result<Self, WordError> {
        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let letters = text.bytes().fold(0_u32, |set, ch| set | 1_u32 << (ch - b'a'));

        Ok(Self {
            text,
            length,
            letters,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    #[inline]
    #[must_use]
    pub const fn length(&self) -> WordLength {
        self.length
    }

    /// Number of letters (5 or 7)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length.letters()
    }

    /// Always false; a Word has at least five letters
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Get the character at a specific position
    ///
    /// # Panics
    /// Panics if position >= `len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.chars()[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.letters & (1_u32 << (letter - b'a')) != 0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
