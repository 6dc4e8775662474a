//! Item system

pub mod tier;
pub mod catalog;
pub mod inventory;

/// Host item index
pub type ItemId = u32;

pub use tier::ItemTier;
pub use catalog::ItemCatalog;
pub use inventory::{Inventory, PlayerId};
