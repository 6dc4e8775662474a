//! Shrine redistribution
//!
//! The four shrine behaviors and the engine that dispatches between them.

pub mod rng;
pub mod randomize;
pub mod swap;
pub mod engine;

pub use rng::{RandomSource, SessionRng, session_rng};
pub use randomize::{randomize_each_item, randomize_each_stack, record_stacks, Grants, TierStacks};
pub use swap::{swap_one_inventory, swap_all_inventories, shuffle_permutation, apply_permutation};
pub use engine::{ShrineEngine, Authority, ActivationOutcome, SkipReason};
