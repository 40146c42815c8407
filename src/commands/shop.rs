//! Upgrade shop and inventory

use crate::game::UpgradeKind;
use crate::profile::{Profile, PurchaseError};

/// One upgrade as the shop presents it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShopOffer {
    pub kind: UpgradeKind,
    pub level: u32,
    pub affordable: bool,
}

impl ShopOffer {
    #[must_use]
    pub fn is_maxed(&self) -> bool {
        self.level >= self.kind.max_level()
    }

    /// Can be bought right now
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.affordable && !self.is_maxed()
    }
}

fn offer(profile: &Profile, kind: UpgradeKind) -> ShopOffer {
    ShopOffer {
        kind,
        level: profile.levels().level(kind),
        affordable: profile.player().gold >= kind.cost(),
    }
}

/// Every upgrade in catalog order
#[must_use]
pub fn shop_offers(profile: &Profile) -> Vec<ShopOffer> {
    UpgradeKind::ALL
        .into_iter()
        .map(|kind| offer(profile, kind))
        .collect()
}

/// Buy one level of `kind` and return its updated offer
///
/// # Errors
///
/// Propagates `PurchaseError` from the profile; nothing changes on failure.
pub fn buy(profile: &mut Profile, kind: UpgradeKind) -> Result<ShopOffer, PurchaseError> {
    profile.purchase(kind)?;
    Ok(offer(profile, kind))
}
