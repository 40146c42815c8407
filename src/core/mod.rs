//! Core domain types for the word game
//!
//! Pure, dependency-light types: words and the guess evaluator.

mod feedback;
mod word;

pub use feedback::{Feedback, KeyboardState, Tile};
pub use word::{Word, WordError, WordLength};
