//! wordrun
//!
//! A roguelike take on Wordle: fixed-length runs, an endless mode with boss words, and a
//! persistent gold-funded upgrade shop.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordrun::core::{Feedback, Word};
//!
//! // Create words
//! let guess = Word::new("crane").unwrap();
//! let target = Word::new("slate").unwrap();
//!
//! // Score the guess
//! let feedback = Feedback::calculate(&guess, &target);
//! println!("solved: {}", feedback.is_solved());
//! ```

// Core domain types
pub mod core;

// Game rules and session orchestration
pub mod game;

// Persistent stats, upgrades and gold
pub mod profile;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
