//! Inventory swapping
//!
//! Moves complete inventory contents (every tier plus the pickup history)
//! between players. Owners never change hands, only what they hold.

use crate::error::ShrineError;
use crate::items::Inventory;
use super::rng::RandomSource;

/// Borrow two distinct party members mutably
fn pair_mut(party: &mut [Inventory], a: usize, b: usize) -> (&mut Inventory, &mut Inventory) {
    debug_assert_ne!(a, b);
    if a < b {
        let (left, right) = party.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = party.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}

pub(crate) fn check_participant(party: &[Inventory], index: usize) -> Result<(), ShrineError> {
    if party.is_empty() {
        return Err(ShrineError::EmptyParty);
    }
    if index >= party.len() {
        return Err(ShrineError::UnknownParticipant {
            index,
            participants: party.len(),
        });
    }
    Ok(())
}

/// Trade inventories with one random party member
///
/// The partner is drawn uniformly from the whole party, activator included;
/// drawing yourself changes nothing. Returns the partner's index.
pub fn swap_one_inventory<R: RandomSource + ?Sized>(
    party: &mut [Inventory],
    activator: usize,
    rng: &mut R,
) -> Result<usize, ShrineError> {
    check_participant(party, activator)?;

    let partner = rng.next_below(party.len());
    if partner != activator {
        let (own, other) = pair_mut(party, activator, partner);
        own.swap_items_with(other);
    }

    Ok(partner)
}

/// Uniform random permutation of `0..len` (Fisher–Yates, `len - 1` draws)
pub fn shuffle_permutation<R: RandomSource + ?Sized>(len: usize, rng: &mut R) -> Vec<usize> {
    let mut permutation: Vec<usize> = (0..len).collect();
    for i in (1..len).rev() {
        let j = rng.next_below(i + 1);
        permutation.swap(i, j);
    }
    permutation
}

/// Give member `i` the original contents of member `permutation[i]`
///
/// Fixed points are left untouched, so the identity changes nothing.
pub fn apply_permutation(party: &mut [Inventory], permutation: &[usize]) {
    debug_assert_eq!(party.len(), permutation.len());

    let originals: Vec<Inventory> = party.to_vec();
    for (target, &source) in permutation.iter().enumerate() {
        if source != target {
            party[target].copy_items_from(&originals[source]);
        }
    }
}

/// Shuffle every inventory between all party members
///
/// Returns the permutation that was applied.
pub fn swap_all_inventories<R: RandomSource + ?Sized>(
    party: &mut [Inventory],
    rng: &mut R,
) -> Result<Vec<usize>, ShrineError> {
    if party.is_empty() {
        return Err(ShrineError::EmptyParty);
    }

    let permutation = shuffle_permutation(party.len(), rng);
    apply_permutation(party, &permutation);
    Ok(permutation)
}
