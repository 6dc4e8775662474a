//! Plugin entry points
//!
//! One method per host event. The host adapter calls these; nothing here
//! returns an error to the host, failures are logged and the event carries on.

use crate::config::{Policy, ShrineSettings, SpawnRule};
use crate::director::{inject_shrine_card, CardInjection, CardSelection};
use crate::error::ShrineError;
use crate::items::{Inventory, ItemCatalog};
use crate::shrine::{ActivationOutcome, Authority, RandomSource, ShrineEngine};

pub const PLUGIN_AUTHOR: &str = "Vatora";
pub const PLUGIN_NAME: &str = "ShrineOfDisorder";
pub const PLUGIN_GUID: &str = "Vatora.ShrineOfDisorder";
pub const PLUGIN_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Plugin state for one game process
#[derive(Debug, Clone)]
pub struct ShrinePlugin {
    settings: ShrineSettings,
    policy: Policy,
    spawn: SpawnRule,
    /// Drop lists of the run in progress
    catalog: Option<ItemCatalog>,
}

impl ShrinePlugin {
    /// Resolve settings once at load time
    pub fn new(settings: ShrineSettings) -> Self {
        let policy = Policy::from_settings(&settings);
        let spawn = SpawnRule::from_settings(&settings);

        log::info!(
            "{} v{} loaded: {} with tiers {:?}",
            PLUGIN_NAME,
            PLUGIN_VERSION,
            policy.behavior,
            policy.enabled_tiers
        );

        Self {
            settings,
            policy,
            spawn,
            catalog: None,
        }
    }

    pub fn settings(&self) -> &ShrineSettings {
        &self.settings
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    pub fn spawn_rule(&self) -> &SpawnRule {
        &self.spawn
    }

    /// Drop lists of the current run, if one is in progress
    pub fn catalog(&self) -> Option<&ItemCatalog> {
        self.catalog.as_ref()
    }

    /// Engine bound to the current run
    pub fn engine(&self) -> Result<ShrineEngine<'_>, ShrineError> {
        let catalog = self.catalog.as_ref().ok_or(ShrineError::CatalogNotLoaded)?;
        Ok(ShrineEngine::new(catalog, &self.policy))
    }

    /// A run started; cache its drop lists
    pub fn on_run_start(&mut self, catalog: ItemCatalog) {
        for (tier, items) in catalog.iter() {
            log::debug!("{} drop list: {:?}", tier, items);
        }
        self.catalog = Some(catalog);
    }

    /// The run ended; forget its drop lists
    pub fn on_run_end(&mut self) {
        self.catalog = None;
    }

    /// A player used the Shrine of Order
    ///
    /// Returns the outcome for callers that want it; the host ignores it.
    pub fn on_shrine_activated<R: RandomSource + ?Sized>(
        &self,
        authority: Authority,
        party: &mut [Inventory],
        activator: usize,
        rng: &mut R,
    ) -> Option<ActivationOutcome> {
        let result = self
            .engine()
            .and_then(|engine| engine.activate(authority, party, activator, rng));

        match result {
            Ok(outcome) => Some(outcome),
            Err(ShrineError::CatalogNotLoaded) => {
                log::warn!("Shrine activated outside of a run; ignoring");
                None
            }
            Err(e) => {
                log::error!("Shrine activation failed: {}", e);
                None
            }
        }
    }

    /// A stage is building its interactable selection
    pub fn on_generate_interactable_cards(&self, stage: &str, selection: &mut CardSelection) {
        match inject_shrine_card(selection, stage, &self.spawn) {
            Ok(CardInjection::Added { weight }) => {
                log::debug!("Added Shrine of Order to {} with weight {}", stage, weight);
            }
            Ok(_) => {}
            Err(e) => {
                log::error!("{}. Shrine of Order will not be added to {}.", e, stage);
            }
        }
    }
}

impl Default for ShrinePlugin {
    fn default() -> Self {
        Self::new(ShrineSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::director::{CardCategory, RESTACK_SPAWN_CARD};
    use crate::items::ItemTier;
    use crate::shrine::session_rng;

    #[test]
    fn test_activation_before_run_is_ignored() {
        let plugin = ShrinePlugin::default();
        let mut party = vec![Inventory::with_items(0, [(1, 2)])];
        let before = party.clone();

        let outcome = plugin.on_shrine_activated(Authority::Server, &mut party, 0, &mut session_rng(1));

        assert!(outcome.is_none());
        assert_eq!(party, before);
    }

    #[test]
    fn test_run_lifecycle() {
        let mut plugin = ShrinePlugin::default();
        assert!(plugin.engine().is_err());

        plugin.on_run_start(ItemCatalog::new().with_tier(ItemTier::Tier1, [1, 2]));
        assert!(plugin.catalog().is_some());

        let mut party = vec![Inventory::with_items(0, [(1, 2)])];
        let outcome = plugin.on_shrine_activated(Authority::Server, &mut party, 0, &mut session_rng(1));
        assert!(matches!(outcome, Some(ActivationOutcome::Randomized { .. })));
        assert_eq!(party[0].count_of(1) + party[0].count_of(2), 2);

        plugin.on_run_end();
        assert!(plugin.catalog().is_none());
    }

    #[test]
    fn test_bad_activator_is_swallowed() {
        let mut plugin = ShrinePlugin::default();
        plugin.on_run_start(ItemCatalog::new().with_tier(ItemTier::Tier1, [1]));
        let mut party = vec![Inventory::new(0)];

        assert!(plugin
            .on_shrine_activated(Authority::Server, &mut party, 3, &mut session_rng(1))
            .is_none());
    }

    #[test]
    fn test_cards_added_and_missing_category_tolerated() {
        let plugin = ShrinePlugin::default();

        let mut selection = CardSelection::new(vec![CardCategory::new("Shrines", 10.0)]);
        plugin.on_generate_interactable_cards("golemplains", &mut selection);
        assert!(selection.categories[0].find_card(RESTACK_SPAWN_CARD).is_some());

        let mut no_shrines = CardSelection::new(vec![CardCategory::new("Chests", 45.0)]);
        plugin.on_generate_interactable_cards("golemplains", &mut no_shrines);
        assert!(no_shrines.categories[0].cards.is_empty());
    }
}
