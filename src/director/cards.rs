//! Director card selection
//!
//! A stage's interactables are grouped into weighted categories. The shrine
//! card goes into the "Shrines" category with a weight borrowed from another
//! shrine already on the stage, scaled by the spawn multiplier.

use serde::{Deserialize, Serialize};

use crate::config::SpawnRule;
use crate::error::ShrineError;

/// Category the shrine card is added to
pub const SHRINES_CATEGORY: &str = "Shrines";

/// Spawn card asset name of the Shrine of Order
pub const RESTACK_SPAWN_CARD: &str = "iscShrineRestack";

/// Shrines whose weight the Shrine of Order copies, most preferred first
pub const SHRINE_WEIGHT_PRIORITY: &[&str] = &[
    "iscShrineChance",
    "iscShrineCombat",
    "iscShrineBlood",
    "iscShrineHealing",
    "iscShrineBoss",
];

/// Base weight when no reference shrine is on the stage
pub const FALLBACK_SHRINE_WEIGHT: i32 = 60;

/// Stages that never get the shrine (hubs, arenas and final stages)
pub const DENYLISTED_STAGES: &[&str] = &[
    "bazaar",
    "arena",
    "goldshores",
    "moon",
    "moon2",
    "limbo",
    "mysteryspace",
    "voidraid",
    "voidstage",
    "meridian",
];

/// One spawnable interactable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectorCard {
    pub spawn_card: String,
    pub selection_weight: i32,
}

impl DirectorCard {
    pub fn new(spawn_card: impl Into<String>, selection_weight: i32) -> Self {
        Self {
            spawn_card: spawn_card.into(),
            selection_weight,
        }
    }
}

/// Named group of cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardCategory {
    pub name: String,
    pub selection_weight: f32,
    #[serde(default)]
    pub cards: Vec<DirectorCard>,
}

impl CardCategory {
    pub fn new(name: impl Into<String>, selection_weight: f32) -> Self {
        Self {
            name: name.into(),
            selection_weight,
            cards: Vec::new(),
        }
    }

    pub fn with_card(mut self, card: DirectorCard) -> Self {
        self.cards.push(card);
        self
    }

    pub fn find_card(&self, spawn_card: &str) -> Option<&DirectorCard> {
        self.cards.iter().find(|c| c.spawn_card == spawn_card)
    }
}

/// All categories offered on one stage
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardSelection {
    pub categories: Vec<CardCategory>,
}

impl CardSelection {
    pub fn new(categories: Vec<CardCategory>) -> Self {
        Self { categories }
    }

    /// Index of the category with exactly this name
    pub fn find_category_index(&self, name: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.name == name)
    }

    /// Append a card to a category; out-of-range indices are ignored
    pub fn add_card(&mut self, category: usize, card: DirectorCard) {
        if let Some(category) = self.categories.get_mut(category) {
            category.cards.push(card);
        }
    }
}

/// What happened to a stage's card selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CardInjection {
    Added { weight: i32 },
    /// `ShrineOnAllMaps` is off
    Disabled,
    DeniedStage,
    AlreadyPresent,
}

/// Weight of the first reference shrine found in priority order
pub fn infer_base_weight(category: &CardCategory) -> i32 {
    SHRINE_WEIGHT_PRIORITY
        .iter()
        .find_map(|name| category.find_card(name))
        .map(|card| card.selection_weight)
        .unwrap_or(FALLBACK_SHRINE_WEIGHT)
}

/// Add the Shrine of Order to a stage's selection
pub fn inject_shrine_card(
    selection: &mut CardSelection,
    stage: &str,
    rule: &SpawnRule,
) -> Result<CardInjection, ShrineError> {
    if !rule.on_all_maps {
        return Ok(CardInjection::Disabled);
    }
    if DENYLISTED_STAGES.iter().any(|s| s.eq_ignore_ascii_case(stage)) {
        return Ok(CardInjection::DeniedStage);
    }

    let index = selection
        .find_category_index(SHRINES_CATEGORY)
        .ok_or_else(|| ShrineError::CategoryNotFound(SHRINES_CATEGORY.to_string()))?;

    let category = &selection.categories[index];
    if category.find_card(RESTACK_SPAWN_CARD).is_some() {
        return Ok(CardInjection::AlreadyPresent);
    }

    let weight = rule.scaled_weight(infer_base_weight(category));
    selection.add_card(index, DirectorCard::new(RESTACK_SPAWN_CARD, weight));

    Ok(CardInjection::Added { weight })
}
