//! Item catalog
//!
//! The per-tier drop lists available for the current run. Built once when the
//! run starts and shared read-only by every shrine activation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::tier::ItemTier;
use super::ItemId;

/// Serialized form: a plain map of tier to item ids
type DropLists = BTreeMap<ItemTier, Vec<ItemId>>;

/// Ordered drop list of every tier
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "DropLists", into = "DropLists")]
pub struct ItemCatalog {
    drop_lists: DropLists,
}

impl ItemCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion of a tier's drop list
    pub fn with_tier(mut self, tier: ItemTier, items: impl IntoIterator<Item = ItemId>) -> Self {
        self.set_tier(tier, items);
        self
    }

    /// Replace the drop list of a tier; repeated ids keep their first position
    pub fn set_tier(&mut self, tier: ItemTier, items: impl IntoIterator<Item = ItemId>) {
        let mut list: Vec<ItemId> = Vec::new();
        for item in items {
            if !list.contains(&item) {
                list.push(item);
            }
        }
        self.drop_lists.insert(tier, list);
    }

    /// Drop list of a tier (empty if the host supplied none)
    pub fn drop_list(&self, tier: ItemTier) -> &[ItemId] {
        self.drop_lists.get(&tier).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Tiers present in the catalog, in walk order
    pub fn tiers(&self) -> impl Iterator<Item = ItemTier> + '_ {
        self.drop_lists.keys().copied()
    }

    /// Iterate `(tier, drop list)` pairs in walk order
    pub fn iter(&self) -> impl Iterator<Item = (ItemTier, &[ItemId])> {
        self.drop_lists.iter().map(|(tier, items)| (*tier, items.as_slice()))
    }

    /// Find which tier an item drops in
    pub fn tier_of(&self, item: ItemId) -> Option<ItemTier> {
        self.iter()
            .find(|(_, items)| items.contains(&item))
            .map(|(tier, _)| tier)
    }

    /// Total number of catalogued items
    pub fn len(&self) -> usize {
        self.drop_lists.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<DropLists> for ItemCatalog {
    fn from(lists: DropLists) -> Self {
        let mut catalog = Self::new();
        for (tier, items) in lists {
            catalog.set_tier(tier, items);
        }
        catalog
    }
}

impl From<ItemCatalog> for DropLists {
    fn from(catalog: ItemCatalog) -> Self {
        catalog.drop_lists
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ItemCatalog {
        ItemCatalog::new()
            .with_tier(ItemTier::Tier2, [10, 11])
            .with_tier(ItemTier::Tier1, [1, 2, 3])
            .with_tier(ItemTier::Lunar, [20])
    }

    #[test]
    fn test_tiers_in_walk_order() {
        let tiers: Vec<_> = sample().tiers().collect();
        assert_eq!(tiers, vec![ItemTier::Tier1, ItemTier::Tier2, ItemTier::Lunar]);
    }

    #[test]
    fn test_drop_list_keeps_order() {
        let catalog = sample();
        assert_eq!(catalog.drop_list(ItemTier::Tier1), &[1, 2, 3]);
        assert!(catalog.drop_list(ItemTier::VoidBoss).is_empty());
        assert_eq!(catalog.len(), 6);
    }

    #[test]
    fn test_duplicates_dropped() {
        let catalog = ItemCatalog::new().with_tier(ItemTier::Tier1, [4, 2, 4, 1, 2]);
        assert_eq!(catalog.drop_list(ItemTier::Tier1), &[4, 2, 1]);
    }

    #[test]
    fn test_tier_of() {
        let catalog = sample();
        assert_eq!(catalog.tier_of(11), Some(ItemTier::Tier2));
        assert_eq!(catalog.tier_of(99), None);
    }

    #[test]
    fn test_ron_format() {
        let catalog: ItemCatalog = ron::from_str("{ Tier1: [1, 2], Boss: [7] }").unwrap();
        assert_eq!(catalog.drop_list(ItemTier::Tier1), &[1, 2]);
        assert_eq!(catalog.drop_list(ItemTier::Boss), &[7]);
    }
}
