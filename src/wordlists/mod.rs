//! Word lists for the game
//!
//! Embedded lists compiled into the binary, a plain-text loader, and the validated corpus.

pub mod corpus;
mod embedded;
pub mod loader;

pub use corpus::{CorpusError, Difficulty, WordCorpus, WordList};
pub use embedded::{
    FIVE_LETTER_COMMON, FIVE_LETTER_COMMON_COUNT, FIVE_LETTER_WORDS, FIVE_LETTER_WORDS_COUNT,
    SEVEN_LETTER_GUESSES, SEVEN_LETTER_GUESSES_COUNT, SEVEN_LETTER_WORDS, SEVEN_LETTER_WORDS_COUNT,
};
