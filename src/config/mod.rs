//! Configuration
//!
//! Settings are read from a RON file and resolved into an immutable
//! [`Policy`] and [`SpawnRule`] when the plugin loads.

pub mod settings;
pub mod loader;
pub mod policy;

pub use settings::{ShrineSettings, ItemSettings, BehaviorSettings, ShrineBehavior, SettingInfo, SETTINGS};
pub use loader::{config_directory, default_settings_path, SETTINGS_FILE};
pub use policy::{Policy, SpawnRule, MultiplayerRule, Redistribution, MIN_SWAP_PARTICIPANTS};
