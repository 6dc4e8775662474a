//! Shrine of Disorder - Shrine of Order rework
//!
//! Turns the Shrine of Order into a shrine of chaos: stacks get rerolled,
//! items get rerolled one by one, or whole inventories change hands between
//! players. All randomness comes from the session's shared stream so every
//! peer sees the same result.

pub mod config;
pub mod director;
pub mod error;
pub mod items;
pub mod plugin;
pub mod shrine;

// Re-export commonly used types
pub use config::{Policy, ShrineBehavior, ShrineSettings, SpawnRule};
pub use error::{ConfigError, ShrineError};
pub use items::{Inventory, ItemCatalog, ItemId, ItemTier, PlayerId};
pub use plugin::ShrinePlugin;
pub use shrine::{ActivationOutcome, Authority, RandomSource, SessionRng, ShrineEngine};
