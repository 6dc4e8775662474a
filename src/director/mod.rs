//! Stage interactable cards
//!
//! Mirrors the host's per-stage interactable card selection closely enough to
//! add the Shrine of Order to every stage.

pub mod cards;

pub use cards::{
    CardCategory, CardInjection, CardSelection, DirectorCard, inject_shrine_card, infer_base_weight,
    DENYLISTED_STAGES, FALLBACK_SHRINE_WEIGHT, RESTACK_SPAWN_CARD, SHRINES_CATEGORY, SHRINE_WEIGHT_PRIORITY,
};
