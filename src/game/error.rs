//! Game error taxonomy
//!
//! Every variant is raised before any state is touched, so a caller can show the message and
//! carry on with the same round. `Store` is the exception: the in-memory change already
//! happened and only the write-through failed.

use super::upgrades::UpgradeKind;
use crate::profile::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("Word must be {expected} letters.")]
    WrongLength { expected: usize },

    #[error("Invalid word.")]
    NotInWordList,

    #[error("No word is in play.")]
    NotPlaying,

    #[error("No {0} uses left.")]
    NoUsesLeft(UpgradeKind),

    #[error("{}", no_candidates_message(.0))]
    NoCandidates(UpgradeKind),

    #[error("{0} cannot be used right now.")]
    NotUsable(UpgradeKind),

    #[error("failed to save progress: {0}")]
    Store(#[from] StoreError),
}

// Allow: thiserror hands fields over by reference
#[allow(clippy::trivially_copy_pass_by_ref)]
const fn no_candidates_message(kind: &UpgradeKind) -> &'static str {
    match *kind {
        UpgradeKind::SuperHint => "No unrevealed letters left!",
        UpgradeKind::PositiveHint => "No unguessed letters left!",
        UpgradeKind::NegativeHint => "No unused negatives left!",
        _ => "Nothing left to reveal!",
    }
}

impl GameError {
    /// Exhausted uses are a silent no-op in the interactive shell
    #[must_use]
    pub const fn is_silent(&self) -> bool {
        matches!(self, Self::NoUsesLeft(_) | Self::NotUsable(_))
    }
}
