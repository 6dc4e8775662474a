//! Resolved policy
//!
//! Settings are resolved once when the plugin loads. The resulting values are
//! immutable for the rest of the session.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::items::ItemTier;
use super::settings::{ShrineBehavior, ShrineSettings};

/// Swap behaviors need at least this many players
pub const MIN_SWAP_PARTICIPANTS: usize = 3;

/// Concrete algorithm picked for one activation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Redistribution {
    RandomizeEachItem,
    RandomizeEachStack,
    SwapOneInventory,
    SwapAllInventories,
}

/// Player-count rule gating the swap behaviors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiplayerRule {
    pub min_swap_participants: usize,
}

impl MultiplayerRule {
    pub fn allows_swaps(&self, participants: usize) -> bool {
        participants >= self.min_swap_participants
    }
}

impl Default for MultiplayerRule {
    fn default() -> Self {
        Self {
            min_swap_participants: MIN_SWAP_PARTICIPANTS,
        }
    }
}

/// How the shrine redistributes items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    pub enabled_tiers: BTreeSet<ItemTier>,
    pub behavior: ShrineBehavior,
    pub preserve_stack_count: bool,
    pub only_obtained_items: bool,
    pub multiplayer: MultiplayerRule,
}

impl Policy {
    /// Resolve the policy from settings
    pub fn from_settings(settings: &ShrineSettings) -> Self {
        let items = &settings.items;
        let mut enabled_tiers: BTreeSet<ItemTier> =
            ItemTier::ALL.into_iter().filter(|t| t.is_always_enabled()).collect();

        if items.lunar_items {
            enabled_tiers.insert(ItemTier::Lunar);
        }
        if items.boss_items {
            enabled_tiers.insert(ItemTier::Boss);
        }
        if items.void_boss_items {
            enabled_tiers.insert(ItemTier::VoidBoss);
        }
        if items.void_items {
            enabled_tiers.extend(ItemTier::VOID);
        }

        Self {
            enabled_tiers,
            behavior: settings.behavior.shrine_behavior,
            preserve_stack_count: settings.behavior.preserve_stack_count,
            only_obtained_items: settings.behavior.only_obtained_items,
            multiplayer: MultiplayerRule::default(),
        }
    }

    pub fn is_tier_enabled(&self, tier: ItemTier) -> bool {
        self.enabled_tiers.contains(&tier)
    }

    /// Pick the algorithm for a party of `participants` players
    pub fn redistribution_for(&self, participants: usize) -> Redistribution {
        if !self.multiplayer.allows_swaps(participants) {
            return match self.behavior {
                ShrineBehavior::RandomizeEachItem => Redistribution::RandomizeEachItem,
                _ => Redistribution::RandomizeEachStack,
            };
        }

        match self.behavior {
            ShrineBehavior::RandomizeEachItem => Redistribution::RandomizeEachItem,
            ShrineBehavior::RandomizeEachStack => Redistribution::RandomizeEachStack,
            ShrineBehavior::SwapOneInventory => Redistribution::SwapOneInventory,
            ShrineBehavior::SwapAllInventories => Redistribution::SwapAllInventories,
        }
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::from_settings(&ShrineSettings::default())
    }
}

/// Where and how often the shrine spawns
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnRule {
    pub on_all_maps: bool,
    pub weight_multiplier: f32,
}

impl SpawnRule {
    pub fn from_settings(settings: &ShrineSettings) -> Self {
        let multiplier = settings.behavior.shrine_spawn_multiplier;
        if !multiplier.is_finite() || multiplier < 0.0 {
            log::warn!(
                "ShrineSpawnMultiplier {} is not a non-negative number; the shrine will get no spawn weight",
                multiplier
            );
        }

        Self {
            on_all_maps: settings.behavior.shrine_on_all_maps,
            weight_multiplier: multiplier,
        }
    }

    /// Scale a base card weight, truncating toward zero
    pub fn scaled_weight(&self, base: i32) -> i32 {
        let weight = base as f32 * self.weight_multiplier;
        if weight.is_finite() && weight > 0.0 {
            weight as i32
        } else {
            0
        }
    }
}

impl Default for SpawnRule {
    fn default() -> Self {
        Self::from_settings(&ShrineSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_with(behavior: ShrineBehavior) -> ShrineSettings {
        let mut settings = ShrineSettings::default();
        settings.behavior.shrine_behavior = behavior;
        settings
    }

    #[test]
    fn test_default_tiers() {
        let policy = Policy::default();
        let tiers: Vec<_> = policy.enabled_tiers.iter().copied().collect();
        assert_eq!(tiers, vec![ItemTier::Tier1, ItemTier::Tier2, ItemTier::Tier3]);
    }

    #[test]
    fn test_void_tiers_enabled_together() {
        let mut settings = ShrineSettings::default();
        settings.items.void_items = true;
        let policy = Policy::from_settings(&settings);

        for tier in ItemTier::VOID {
            assert!(policy.is_tier_enabled(tier));
        }
        assert!(!policy.is_tier_enabled(ItemTier::VoidBoss));
        assert!(!policy.is_tier_enabled(ItemTier::Lunar));
    }

    #[test]
    fn test_optional_tiers() {
        let mut settings = ShrineSettings::default();
        settings.items.lunar_items = true;
        settings.items.boss_items = true;
        settings.items.void_boss_items = true;
        let policy = Policy::from_settings(&settings);

        assert!(policy.is_tier_enabled(ItemTier::Lunar));
        assert!(policy.is_tier_enabled(ItemTier::Boss));
        assert!(policy.is_tier_enabled(ItemTier::VoidBoss));
        assert!(!policy.is_tier_enabled(ItemTier::VoidTier1));
        assert_eq!(policy.enabled_tiers.len(), 6);
    }

    #[test]
    fn test_small_party_dispatch() {
        for participants in [1, 2] {
            for behavior in ShrineBehavior::ALL {
                let expected = if behavior == ShrineBehavior::RandomizeEachItem {
                    Redistribution::RandomizeEachItem
                } else {
                    Redistribution::RandomizeEachStack
                };
                let policy = Policy::from_settings(&settings_with(behavior));
                assert_eq!(policy.redistribution_for(participants), expected);
            }
        }
    }

    #[test]
    fn test_large_party_dispatch() {
        let cases = [
            (ShrineBehavior::RandomizeEachItem, Redistribution::RandomizeEachItem),
            (ShrineBehavior::RandomizeEachStack, Redistribution::RandomizeEachStack),
            (ShrineBehavior::SwapOneInventory, Redistribution::SwapOneInventory),
            (ShrineBehavior::SwapAllInventories, Redistribution::SwapAllInventories),
        ];
        for (behavior, expected) in cases {
            let policy = Policy::from_settings(&settings_with(behavior));
            assert_eq!(policy.redistribution_for(3), expected);
            assert_eq!(policy.redistribution_for(4), expected);
        }
    }

    #[test]
    fn test_scaled_weight() {
        let mut rule = SpawnRule::default();
        assert_eq!(rule.scaled_weight(60), 60);

        rule.weight_multiplier = 1.5;
        assert_eq!(rule.scaled_weight(60), 90);

        rule.weight_multiplier = 0.33;
        assert_eq!(rule.scaled_weight(10), 3);

        rule.weight_multiplier = -2.0;
        assert_eq!(rule.scaled_weight(60), 0);

        rule.weight_multiplier = f32::NAN;
        assert_eq!(rule.scaled_weight(60), 0);
    }
}
