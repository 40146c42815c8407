//! Game rules: upgrades, hints, rounds and sessions

pub mod config;
pub mod error;
pub mod hints;
pub mod round;
pub mod session;
pub mod timer;
pub mod upgrades;

pub use config::{BOSS_CADENCE, BOSS_GOLD, Difficulty, Modifiers, ROUND_SECONDS, SessionConfig};
pub use error::GameError;
pub use hints::Hint;
pub use round::{Round, RoundStatus, WordSlot};
pub use session::{
    Advance, GuessOutcome, Mode, Resolution, Session, SessionPhase, Summary, WordRecord,
};
pub use timer::RoundTimer;
pub use upgrades::{UpgradeInfo, UpgradeKind, UpgradeLevels, UpgradeUses};
