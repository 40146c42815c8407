//! Player wallet

use serde::Serialize;
use serde_json::Value;

/// Gold a brand-new profile starts with
pub const STARTING_GOLD: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub gold: u32,
    /// Words solved in the current session; reset when a session ends
    pub words_completed: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            gold: STARTING_GOLD,
            words_completed: 0,
        }
    }
}

impl Player {
    /// Decode a persisted player field by field
    ///
    /// A missing or mistyped field keeps its default; the other fields still load.
    #[must_use]
    pub fn from_json(raw: &str) -> Self {
        let mut player = Self::default();
        let value: Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("player blob is not valid JSON ({e}), starting fresh");
                return player;
            }
        };
        let Some(map) = value.as_object() else {
            log::warn!("player blob is not an object, starting fresh");
            return player;
        };

        let field = |key: &str, slot: &mut u32| match map.get(key) {
            None => {}
            Some(entry) => match entry.as_u64().and_then(|n| u32::try_from(n).ok()) {
                Some(n) => *slot = n,
                None => log::warn!("type mismatch for {key} in loaded player, using default"),
            },
        };
        field("gold", &mut player.gold);
        field("wordsCompleted", &mut player.words_completed);
        player
    }

    /// Debit `amount` if affordable
    pub const fn spend(&mut self, amount: u32) -> bool {
        if self.gold < amount {
            return false;
        }
        self.gold -= amount;
        true
    }
}
