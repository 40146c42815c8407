//! Persistent player profile: statistics, owned upgrades, gold
//!
//! Every mutation ends with a full rewrite of the three blobs through the [`Store`].

pub mod player;
pub mod stats;
pub mod store;

pub use player::{Player, STARTING_GOLD};
pub use stats::{Ledger, StatBlock, Stats, StatsView};
pub use store::{FileStore, MemoryStore, Store, StoreError, StoreKey};

use crate::game::upgrades::{UpgradeKind, UpgradeLevels};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PurchaseError {
    #[error("{0} is already maxed")]
    Maxed(UpgradeKind),
    #[error("{kind} costs {cost} gold, you have {gold}")]
    NotEnoughGold { kind: UpgradeKind, cost: u32, gold: u32 },
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct Profile {
    stats: Stats,
    levels: UpgradeLevels,
    player: Player,
    store: Box<dyn Store>,
}

impl Profile {
    /// Load all three blobs; missing or corrupt blobs fall back to defaults
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Read` only when the store itself cannot be read.
    pub fn load(store: Box<dyn Store>) -> Result<Self, StoreError> {
        let stats = store
            .load(StoreKey::Stats)?
            .map(|raw| Stats::from_json(&raw))
            .unwrap_or_default();
        let levels = store
            .load(StoreKey::UpgradeLevels)?
            .map(|raw| UpgradeLevels::from_json(&raw))
            .unwrap_or_default();
        let player = store
            .load(StoreKey::Player)?
            .map(|raw| Player::from_json(&raw))
            .unwrap_or_default();

        log::info!(
            "profile loaded: {} gold, {} runs played",
            player.gold,
            stats.total.runs_played
        );
        Ok(Self {
            stats,
            levels,
            player,
            store,
        })
    }

    /// A fresh profile backed by memory only
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            stats: Stats::default(),
            levels: UpgradeLevels::default(),
            player: Player::default(),
            store: Box::new(MemoryStore::new()),
        }
    }

    #[must_use]
    pub const fn stats(&self) -> &Stats {
        &self.stats
    }

    #[must_use]
    pub const fn levels(&self) -> &UpgradeLevels {
        &self.levels
    }

    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    pub(crate) const fn stats_mut(&mut self) -> &mut Stats {
        &mut self.stats
    }

    pub(crate) const fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Rewrite all three blobs
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if encoding or writing any blob fails.
    pub fn persist(&mut self) -> Result<(), StoreError> {
        let encode = |key: StoreKey, value: Result<String, serde_json::Error>| {
            value.map_err(|source| StoreError::Encode {
                key: key.name(),
                source,
            })
        };
        let stats = encode(StoreKey::Stats, serde_json::to_string(&self.stats))?;
        let levels = encode(StoreKey::UpgradeLevels, serde_json::to_string(&self.levels))?;
        let player = encode(StoreKey::Player, serde_json::to_string(&self.player))?;

        self.store.save(StoreKey::Stats, &stats)?;
        self.store.save(StoreKey::UpgradeLevels, &levels)?;
        self.store.save(StoreKey::Player, &player)?;
        Ok(())
    }

    /// Buy one level of an upgrade
    ///
    /// # Errors
    ///
    /// - `Maxed` if the upgrade is at its maximum level
    /// - `NotEnoughGold` if the player cannot afford it
    /// - `Store` if the purchase could not be saved
    pub fn purchase(&mut self, kind: UpgradeKind) -> Result<(), PurchaseError> {
        if self.levels.is_maxed(kind) {
            return Err(PurchaseError::Maxed(kind));
        }
        if !self.player.spend(kind.cost()) {
            return Err(PurchaseError::NotEnoughGold {
                kind,
                cost: kind.cost(),
                gold: self.player.gold,
            });
        }
        self.levels.raise(kind);
        log::info!(
            "purchased {kind} (level {}), {} gold left",
            self.levels.level(kind),
            self.player.gold
        );
        self.persist()?;
        Ok(())
    }

    /// Owned upgrades with their levels
    #[must_use]
    pub fn inventory(&self) -> Vec<(UpgradeKind, u32)> {
        UpgradeKind::ALL
            .into_iter()
            .filter(|&kind| self.levels.owns(kind))
            .map(|kind| (kind, self.levels.level(kind)))
            .collect()
    }

    /// Wipe statistics, upgrades and gold back to a fresh profile
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the reset could not be saved.
    pub fn reset(&mut self) -> Result<(), StoreError> {
        self.stats = Stats::default();
        self.levels = UpgradeLevels::default();
        self.player = Player::default();
        log::info!("profile reset");
        self.persist()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct SharedStore(std::rc::Rc<std::cell::RefCell<MemoryStore>>);

    impl Store for SharedStore {
        fn load(&self, key: StoreKey) -> Result<Option<String>, StoreError> {
            self.0.borrow().load(key)
        }

        fn save(&mut self, key: StoreKey, contents: &str) -> Result<(), StoreError> {
            self.0.borrow_mut().save(key, contents)
        }
    }

    #[test]
    fn purchase_debits_and_levels() {
        let mut profile = Profile::in_memory();
        profile.player_mut().gold = 40;
        profile.purchase(UpgradeKind::NegativeHint).unwrap();
        assert_eq!(profile.player().gold, 30);
        assert_eq!(profile.levels().level(UpgradeKind::NegativeHint), 1);
        assert_eq!(profile.inventory(), vec![(UpgradeKind::NegativeHint, 1)]);
    }

    #[test]
    fn purchase_refuses_without_mutation() {
        let mut profile = Profile::in_memory();
        assert!(matches!(
            profile.purchase(UpgradeKind::ExtraLife),
            Err(PurchaseError::NotEnoughGold { cost: 40, gold: 5, .. })
        ));
        assert_eq!(profile.player().gold, 5);

        profile.player_mut().gold = 100;
        profile.purchase(UpgradeKind::ExtraGuess).unwrap();
        assert!(matches!(
            profile.purchase(UpgradeKind::ExtraGuess),
            Err(PurchaseError::Maxed(UpgradeKind::ExtraGuess))
        ));
        assert_eq!(profile.player().gold, 70);
    }

    #[test]
    fn persistence_round_trip() {
        let shared = SharedStore::default();
        let mut profile = Profile::load(Box::new(shared.clone())).unwrap();
        profile.player_mut().gold = 200;
        profile.purchase(UpgradeKind::SuperHint).unwrap();
        profile.purchase(UpgradeKind::WordReroll).unwrap();
        profile.stats_mut().record(Ledger::Normal, |b| {
            b.runs_played += 1;
            b.add_hint(UpgradeKind::SuperHint);
            b.note_completed_run(5, 1, 17);
        });
        profile.persist().unwrap();

        let reloaded = Profile::load(Box::new(shared)).unwrap();
        assert_eq!(reloaded.stats(), profile.stats());
        assert_eq!(reloaded.levels(), profile.levels());
        assert_eq!(reloaded.player(), profile.player());
    }

    #[test]
    fn legacy_blobs_load() {
        let store = MemoryStore::new()
            .with(StoreKey::UpgradeLevels, "[1,2,0,0,3]")
            .with(StoreKey::Stats, r#"{"totalGoldEarned":50,"endlessBestWords":9}"#)
            .with(StoreKey::Player, r#"{"gold":77,"wordsCompleted":0}"#);
        let profile = Profile::load(Box::new(store)).unwrap();
        assert_eq!(profile.levels().as_array(), &[1, 2, 0, 0, 3, 0, 0]);
        assert_eq!(profile.stats().total.total_gold_earned, 50);
        assert_eq!(profile.stats().endless.endless_best_words, 9);
        assert_eq!(profile.player().gold, 77);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut profile = Profile::in_memory();
        profile.player_mut().gold = 90;
        profile.purchase(UpgradeKind::BonusGuess).unwrap();
        profile.stats_mut().record(Ledger::Endless, |b| b.total_guesses += 10);
        profile.reset().unwrap();
        assert_eq!(profile.player(), &Player::default());
        assert_eq!(profile.levels(), &UpgradeLevels::default());
        assert_eq!(profile.stats(), &Stats::default());
    }
}
