//! Item tiers
//!
//! Rarity/category classifiers the host assigns to every droppable item.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Item tier, in the order tiers are walked during redistribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ItemTier {
    Tier1,      // White
    Tier2,      // Green
    Tier3,      // Red
    Lunar,
    Boss,       // Yellow
    VoidTier1,
    VoidTier2,
    VoidTier3,
    VoidBoss,
}

impl ItemTier {
    /// Every tier, in walk order
    pub const ALL: [ItemTier; 9] = [
        ItemTier::Tier1,
        ItemTier::Tier2,
        ItemTier::Tier3,
        ItemTier::Lunar,
        ItemTier::Boss,
        ItemTier::VoidTier1,
        ItemTier::VoidTier2,
        ItemTier::VoidTier3,
        ItemTier::VoidBoss,
    ];

    /// The three void tiers, which are only ever enabled together
    pub const VOID: [ItemTier; 3] = [ItemTier::VoidTier1, ItemTier::VoidTier2, ItemTier::VoidTier3];

    /// Get tier name
    pub fn name(&self) -> &'static str {
        match self {
            ItemTier::Tier1 => "Tier1",
            ItemTier::Tier2 => "Tier2",
            ItemTier::Tier3 => "Tier3",
            ItemTier::Lunar => "Lunar",
            ItemTier::Boss => "Boss",
            ItemTier::VoidTier1 => "VoidTier1",
            ItemTier::VoidTier2 => "VoidTier2",
            ItemTier::VoidTier3 => "VoidTier3",
            ItemTier::VoidBoss => "VoidBoss",
        }
    }

    /// Tiers that take part in every redistribution regardless of settings
    pub fn is_always_enabled(&self) -> bool {
        matches!(self, ItemTier::Tier1 | ItemTier::Tier2 | ItemTier::Tier3)
    }
}

impl fmt::Display for ItemTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
