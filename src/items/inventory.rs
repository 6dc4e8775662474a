//! Inventory system
//!
//! Item stacks owned by one player, plus the order in which items were
//! first acquired. The shrine only ever changes counts; the inventory itself
//! belongs to the host's player entity.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ItemId;

/// Network-stable player identifier
pub type PlayerId = u32;

/// Player inventory of counted item stacks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "InventoryFile")]
pub struct Inventory {
    /// Player this inventory belongs to
    owner: PlayerId,
    /// Stack size per item; zero-count items are never stored
    stacks: BTreeMap<ItemId, u32>,
    /// Items in the order they were first picked up
    acquisition_order: Vec<ItemId>,
    /// Set whenever contents change so replication knows to resend
    #[serde(skip)]
    dirty: bool,
}

/// Inventory as written in party files, before cleanup
#[derive(Deserialize)]
struct InventoryFile {
    owner: PlayerId,
    #[serde(default)]
    stacks: BTreeMap<ItemId, u32>,
    #[serde(default)]
    acquisition_order: Vec<ItemId>,
}

impl From<InventoryFile> for Inventory {
    fn from(file: InventoryFile) -> Self {
        let mut stacks = file.stacks;
        stacks.retain(|_, count| *count > 0);

        // History lists each held item once; held items missing from it go last
        let mut acquisition_order = Vec::with_capacity(stacks.len());
        for item in file.acquisition_order.into_iter().chain(stacks.keys().copied()) {
            if stacks.contains_key(&item) && !acquisition_order.contains(&item) {
                acquisition_order.push(item);
            }
        }

        Self {
            owner: file.owner,
            stacks,
            acquisition_order,
            dirty: false,
        }
    }
}

impl Inventory {
    /// Create an empty inventory
    pub fn new(owner: PlayerId) -> Self {
        Self {
            owner,
            ..Self::default()
        }
    }

    /// Create an inventory holding the given stacks, acquired in iteration order
    pub fn with_items(owner: PlayerId, items: impl IntoIterator<Item = (ItemId, u32)>) -> Self {
        let mut inventory = Self::new(owner);
        for (item, count) in items {
            inventory.give_item_count(item, count);
        }
        inventory.dirty = false;
        inventory
    }

    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    /// Stack size of an item (0 if not owned)
    pub fn count_of(&self, item: ItemId) -> u32 {
        self.stacks.get(&item).copied().unwrap_or(0)
    }

    /// Give a single item
    pub fn give_item(&mut self, item: ItemId) {
        self.give_item_count(item, 1);
    }

    /// Give `count` copies of an item
    pub fn give_item_count(&mut self, item: ItemId, count: u32) {
        if count == 0 {
            return;
        }

        let stack = self.stacks.entry(item).or_insert(0);
        if *stack == 0 {
            self.acquisition_order.push(item);
        }
        *stack = stack.saturating_add(count);
        self.dirty = true;
    }

    /// Remove an item's whole stack, returning how many were held
    pub fn reset_item(&mut self, item: ItemId) -> u32 {
        match self.stacks.remove(&item) {
            Some(count) => {
                self.acquisition_order.retain(|&i| i != item);
                self.dirty = true;
                count
            }
            None => 0,
        }
    }

    /// Iterate `(item, count)` stacks by item id
    pub fn stacks(&self) -> impl Iterator<Item = (ItemId, u32)> + '_ {
        self.stacks.iter().map(|(&item, &count)| (item, count))
    }

    /// Number of distinct stacks
    pub fn stack_count(&self) -> usize {
        self.stacks.len()
    }

    /// Total number of items across all stacks
    pub fn total_count(&self) -> u64 {
        self.stacks.values().map(|&c| c as u64).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    /// Items in first-acquired order
    pub fn acquisition_order(&self) -> &[ItemId] {
        &self.acquisition_order
    }

    /// Forget the pickup history (the stacks stay)
    pub fn clear_acquisition_order(&mut self) {
        self.acquisition_order.clear();
    }

    /// Flag the inventory for replication
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Read and clear the replication flag
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Replace all contents with a copy of another inventory's contents
    pub fn copy_items_from(&mut self, other: &Inventory) {
        self.stacks.clone_from(&other.stacks);
        self.acquisition_order.clone_from(&other.acquisition_order);
        self.dirty = true;
    }

    /// Exchange all contents with another inventory; owners stay put
    pub fn swap_items_with(&mut self, other: &mut Inventory) {
        std::mem::swap(&mut self.stacks, &mut other.stacks);
        std::mem::swap(&mut self.acquisition_order, &mut other.acquisition_order);
        self.dirty = true;
        other.dirty = true;
    }

    /// Check whether two inventories hold the same stacks and history
    pub fn same_items_as(&self, other: &Inventory) -> bool {
        self.stacks == other.stacks && self.acquisition_order == other.acquisition_order
    }
}
