//! Item randomization
//!
//! Rerolls one player's items within their tiers. Both variants first record
//! the inventory, then clear every enabled tier, then hand items back out.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::Policy;
use crate::items::{Inventory, ItemCatalog, ItemId, ItemTier};
use super::rng::RandomSource;

/// Stacks held before the shrine fired, per tier, in drop-list order
pub type TierStacks = BTreeMap<ItemTier, Vec<(ItemId, u32)>>;

/// Items handed out by one randomization
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Grants {
    pub tiers: BTreeMap<ItemTier, BTreeMap<ItemId, u32>>,
    /// Number of values taken from the random stream
    pub draws: usize,
}

impl Grants {
    fn give(&mut self, inventory: &mut Inventory, tier: ItemTier, item: ItemId, count: u32) {
        inventory.give_item_count(item, count);
        *self.tiers.entry(tier).or_default().entry(item).or_insert(0) += count;
    }

    /// Total items granted in a tier
    pub fn total(&self, tier: ItemTier) -> u64 {
        self.tiers
            .get(&tier)
            .map(|items| items.values().map(|&c| c as u64).sum())
            .unwrap_or(0)
    }

    /// Distinct items granted in a tier
    pub fn distinct(&self, tier: ItemTier) -> usize {
        self.tiers.get(&tier).map(BTreeMap::len).unwrap_or(0)
    }
}

/// Record the owned stacks of every catalogued tier
pub fn record_stacks(inventory: &Inventory, catalog: &ItemCatalog) -> TierStacks {
    let mut stacks = TierStacks::new();

    for (tier, items) in catalog.iter() {
        for &item in items {
            let count = inventory.count_of(item);
            if count > 0 {
                stacks.entry(tier).or_default().push((item, count));
            }
        }
    }

    stacks
}

/// Remove every item of the enabled tiers and reset the pickup history
fn clear_enabled_tiers(inventory: &mut Inventory, catalog: &ItemCatalog, policy: &Policy) {
    for &tier in &policy.enabled_tiers {
        for &item in catalog.drop_list(tier) {
            inventory.reset_item(item);
        }
    }

    inventory.clear_acquisition_order();
    inventory.mark_dirty();
}

/// Items a tier may be rerolled into
///
/// Never smaller than `owned`: stacks are recorded from the same deduplicated
/// drop list, and the obtained-only pool is `owned` itself.
fn candidate_pool<'a>(
    tier: ItemTier,
    owned: &[(ItemId, u32)],
    catalog: &'a ItemCatalog,
    policy: &Policy,
) -> Cow<'a, [ItemId]> {
    if policy.only_obtained_items {
        Cow::Owned(owned.iter().map(|&(item, _)| item).collect())
    } else {
        Cow::Borrowed(catalog.drop_list(tier))
    }
}

/// Enabled tiers that held something, in walk order
fn enabled_stacks<'s>(
    stacks: &'s TierStacks,
    policy: &'s Policy,
) -> impl Iterator<Item = (ItemTier, &'s [(ItemId, u32)])> + 's {
    stacks
        .iter()
        .filter(|(tier, _)| policy.is_tier_enabled(**tier))
        .map(|(tier, owned)| (*tier, owned.as_slice()))
}

/// Reroll every individual item
///
/// A tier that held N items gets N independent uniform draws from its pool,
/// with replacement, so tier totals are conserved.
pub fn randomize_each_item<R: RandomSource + ?Sized>(
    inventory: &mut Inventory,
    catalog: &ItemCatalog,
    policy: &Policy,
    rng: &mut R,
) -> Grants {
    let stacks = record_stacks(inventory, catalog);
    clear_enabled_tiers(inventory, catalog, policy);

    let mut grants = Grants::default();

    for (tier, owned) in enabled_stacks(&stacks, policy) {
        let pool = candidate_pool(tier, owned, catalog, policy);
        debug_assert!(!pool.is_empty(), "{} held items outside its drop list", tier);

        let tier_count: u64 = owned.iter().map(|&(_, count)| count as u64).sum();
        for _ in 0..tier_count {
            let item = pool[rng.next_below(pool.len())];
            grants.draws += 1;
            grants.give(inventory, tier, item, 1);
        }
    }

    grants
}

/// Reroll every stack, keeping stack sizes
///
/// With `preserve_stack_count` the pool is a private copy and each drawn item
/// leaves it, so no two stacks of a tier land on the same item. The copy holds
/// at least one entry per recorded stack, so it never runs dry.
pub fn randomize_each_stack<R: RandomSource + ?Sized>(
    inventory: &mut Inventory,
    catalog: &ItemCatalog,
    policy: &Policy,
    rng: &mut R,
) -> Grants {
    let stacks = record_stacks(inventory, catalog);
    clear_enabled_tiers(inventory, catalog, policy);

    let mut grants = Grants::default();

    for (tier, owned) in enabled_stacks(&stacks, policy) {
        let mut pool: Vec<ItemId> = candidate_pool(tier, owned, catalog, policy).into_owned();
        debug_assert!(pool.len() >= owned.len(), "{} has more stacks than candidates", tier);

        for &(_, count) in owned {
            let index = rng.next_below(pool.len());
            grants.draws += 1;
            let item = if policy.preserve_stack_count {
                pool.remove(index)
            } else {
                pool[index]
            };
            grants.give(inventory, tier, item, count);
        }
    }

    grants
}
