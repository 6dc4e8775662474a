//! Shrine settings
//!
//! The user-facing configuration surface, grouped into the same `Items` and
//! `Behavior` sections the settings file uses.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer, EnumAccess, VariantAccess, Visitor};
use serde::{Deserialize, Serialize};

/// What the shrine does when activated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum ShrineBehavior {
    /// Each stack becomes a random item of the same tier, keeping its size
    #[default]
    RandomizeEachStack,
    /// Each individual item is rerolled within its tier
    RandomizeEachItem,
    /// Trade inventories with one random player
    SwapOneInventory,
    /// Shuffle every player's inventory between all players
    SwapAllInventories,
}

impl ShrineBehavior {
    pub const ALL: [ShrineBehavior; 4] = [
        ShrineBehavior::RandomizeEachStack,
        ShrineBehavior::RandomizeEachItem,
        ShrineBehavior::SwapOneInventory,
        ShrineBehavior::SwapAllInventories,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ShrineBehavior::RandomizeEachStack => "RandomizeEachStack",
            ShrineBehavior::RandomizeEachItem => "RandomizeEachItem",
            ShrineBehavior::SwapOneInventory => "SwapOneInventory",
            ShrineBehavior::SwapAllInventories => "SwapAllInventories",
        }
    }

    /// Whether this behavior moves whole inventories between players
    pub fn is_swap(&self) -> bool {
        matches!(self, ShrineBehavior::SwapOneInventory | ShrineBehavior::SwapAllInventories)
    }

    /// Parse a behavior name, falling back to the default on unknown input
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            log::warn!(
                "Unknown shrine behavior '{}', using {}",
                name,
                ShrineBehavior::default().name()
            );
            ShrineBehavior::default()
        })
    }
}

impl fmt::Display for ShrineBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a behavior name matches none of the variants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBehavior(pub String);

impl fmt::Display for UnknownBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown shrine behavior '{}'", self.0)
    }
}

impl std::error::Error for UnknownBehavior {}

impl FromStr for ShrineBehavior {
    type Err = UnknownBehavior;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShrineBehavior::ALL
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownBehavior(s.to_string()))
    }
}

/// Variant name read in identifier position, so bare `SwapAllInventories` parses
struct VariantName(String);

impl<'de> Deserialize<'de> for VariantName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NameVisitor;

        impl<'de> Visitor<'de> for NameVisitor {
            type Value = VariantName;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a shrine behavior name")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(VariantName(v.to_string()))
            }
        }

        deserializer.deserialize_identifier(NameVisitor)
    }
}

// Unknown names in a settings file should not discard the whole file.
impl<'de> Deserialize<'de> for ShrineBehavior {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        const VARIANTS: &[&str] = &[
            "RandomizeEachStack",
            "RandomizeEachItem",
            "SwapOneInventory",
            "SwapAllInventories",
        ];

        struct BehaviorVisitor;

        impl<'de> Visitor<'de> for BehaviorVisitor {
            type Value = ShrineBehavior;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a shrine behavior name")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(ShrineBehavior::from_name_or_default(v))
            }

            fn visit_enum<A: EnumAccess<'de>>(self, data: A) -> Result<Self::Value, A::Error> {
                let (VariantName(name), variant): (VariantName, _) = data.variant()?;
                variant.unit_variant()?;
                Ok(ShrineBehavior::from_name_or_default(&name))
            }
        }

        deserializer.deserialize_enum("ShrineBehavior", VARIANTS, BehaviorVisitor)
    }
}

/// Which optional item tiers the shrine touches
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ItemSettings {
    pub lunar_items: bool,
    pub void_items: bool,
    pub boss_items: bool,
    pub void_boss_items: bool,
}

/// How the shrine behaves and where it spawns
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BehaviorSettings {
    pub shrine_behavior: ShrineBehavior,
    pub preserve_stack_count: bool,
    pub only_obtained_items: bool,
    pub shrine_on_all_maps: bool,
    pub shrine_spawn_multiplier: f32,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            shrine_behavior: ShrineBehavior::RandomizeEachStack,
            preserve_stack_count: true,
            only_obtained_items: false,
            shrine_on_all_maps: true,
            shrine_spawn_multiplier: 1.0,
        }
    }
}

/// Complete settings file
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ShrineSettings {
    pub items: ItemSettings,
    pub behavior: BehaviorSettings,
}

/// One documented entry of the configuration surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingInfo {
    pub section: &'static str,
    pub key: &'static str,
    pub default: &'static str,
    pub description: &'static str,
}

impl SettingInfo {
    /// `Section.Key` form used in logs
    pub fn qualified_key(&self) -> String {
        format!("{}.{}", self.section, self.key)
    }
}

/// Every setting with its default and description
pub const SETTINGS: &[SettingInfo] = &[
    SettingInfo {
        section: "Items",
        key: "LunarItems",
        default: "false",
        description: "Swap lunar items when activating the shrine",
    },
    SettingInfo {
        section: "Items",
        key: "VoidItems",
        default: "false",
        description: "Swap void items when activating the shrine",
    },
    SettingInfo {
        section: "Items",
        key: "BossItems",
        default: "false",
        description: "Swap boss items when activating the shrine",
    },
    SettingInfo {
        section: "Items",
        key: "VoidBossItems",
        default: "false",
        description: "Swap void boss items when activating the shrine",
    },
    SettingInfo {
        section: "Behavior",
        key: "ShrineBehavior",
        default: "RandomizeEachStack",
        description: "The behavior of the shrine. The inventory swapping behaviors are only enabled \
                      for games with more than 2 players. Otherwise, the stack or item \
                      randomization behavior is used.",
    },
    SettingInfo {
        section: "Behavior",
        key: "PreserveStackCount",
        default: "true",
        description: "If using the RandomizeEachStack behavior, preserve the number of unique stacks. \
                      If disabled, the same item could be randomly selected for multiple stacks, \
                      effectively merging them.",
    },
    SettingInfo {
        section: "Behavior",
        key: "OnlyObtainedItems",
        default: "false",
        description: "When determining which items to give the player, only consider items that \
                      they already have in their inventory.",
    },
    SettingInfo {
        section: "Behavior",
        key: "ShrineOnAllMaps",
        default: "true",
        description: "Allow the shrine to spawn on all maps.",
    },
    SettingInfo {
        section: "Behavior",
        key: "ShrineSpawnMultiplier",
        default: "1.0",
        description: "A multiplier on the shrine's spawn weight.",
    },
];
