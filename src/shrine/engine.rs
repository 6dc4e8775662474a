//! Shrine engine
//!
//! Picks the redistribution for one activation and runs it against the party.

use serde::Serialize;

use crate::config::{Policy, Redistribution};
use crate::error::ShrineError;
use crate::items::{Inventory, ItemCatalog};
use super::randomize::{randomize_each_item, randomize_each_stack, Grants};
use super::rng::RandomSource;
use super::swap::{check_participant, swap_all_inventories, swap_one_inventory};

/// Whether this process may change game state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Authority {
    /// Session host; its results are replicated to everyone else
    Server,
    /// Connected peer; only receives replicated state
    Client,
}

/// Why an activation did nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    NoAuthority,
}

/// Result of one shrine activation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ActivationOutcome {
    Skipped(SkipReason),
    Randomized {
        redistribution: Redistribution,
        grants: Grants,
    },
    SwappedOne {
        activator: usize,
        partner: usize,
    },
    SwappedAll {
        permutation: Vec<usize>,
    },
}

impl ActivationOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, ActivationOutcome::Skipped(_))
    }
}

/// Runs shrine activations against a run's catalog and the resolved policy
#[derive(Debug, Clone, Copy)]
pub struct ShrineEngine<'a> {
    catalog: &'a ItemCatalog,
    policy: &'a Policy,
}

impl<'a> ShrineEngine<'a> {
    pub fn new(catalog: &'a ItemCatalog, policy: &'a Policy) -> Self {
        Self { catalog, policy }
    }

    pub fn catalog(&self) -> &ItemCatalog {
        self.catalog
    }

    pub fn policy(&self) -> &Policy {
        self.policy
    }

    /// Handle one activation by `party[activator]`
    ///
    /// Every party member counts as an active participant. Without authority
    /// nothing is drawn or changed.
    pub fn activate<R: RandomSource + ?Sized>(
        &self,
        authority: Authority,
        party: &mut [Inventory],
        activator: usize,
        rng: &mut R,
    ) -> Result<ActivationOutcome, ShrineError> {
        if authority != Authority::Server {
            return Ok(ActivationOutcome::Skipped(SkipReason::NoAuthority));
        }
        check_participant(party, activator)?;

        let redistribution = self.policy.redistribution_for(party.len());
        log::debug!(
            "Shrine activated by player {} ({} participants): {:?}",
            party[activator].owner(),
            party.len(),
            redistribution
        );

        let outcome = match redistribution {
            Redistribution::RandomizeEachItem => ActivationOutcome::Randomized {
                redistribution,
                grants: randomize_each_item(&mut party[activator], self.catalog, self.policy, rng),
            },
            Redistribution::RandomizeEachStack => ActivationOutcome::Randomized {
                redistribution,
                grants: randomize_each_stack(&mut party[activator], self.catalog, self.policy, rng),
            },
            Redistribution::SwapOneInventory => ActivationOutcome::SwappedOne {
                activator,
                partner: swap_one_inventory(party, activator, rng)?,
            },
            Redistribution::SwapAllInventories => ActivationOutcome::SwappedAll {
                permutation: swap_all_inventories(party, rng)?,
            },
        };

        Ok(outcome)
    }
}
