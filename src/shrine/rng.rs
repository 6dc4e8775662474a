//! Shared random stream
//!
//! Every peer replays the host's results, so the shrine has to consume the
//! session stream in a fixed order and a fixed number of times. One call to
//! [`RandomSource::next_below`] is exactly one draw from the underlying
//! generator, whatever the bound.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64;

/// Sequential source of random draws
pub trait RandomSource {
    /// Next raw 64-bit draw
    fn next_draw(&mut self) -> u64;

    /// Uniform index in `0..bound` from a single draw
    ///
    /// Uses a widening multiply instead of rejection sampling so the number
    /// of draws never depends on the values drawn. `bound` must be non-zero.
    fn next_below(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "next_below called with an empty range");
        ((self.next_draw() as u128 * bound as u128) >> 64) as usize
    }
}

impl<R: RngCore + ?Sized> RandomSource for R {
    fn next_draw(&mut self) -> u64 {
        RngCore::next_u64(self)
    }
}

/// Generator used for a session's shrine stream
pub type SessionRng = Pcg64;

/// Create the session stream from the run seed
pub fn session_rng(seed: u64) -> SessionRng {
    Pcg64::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts how many draws were taken
    struct Counting {
        inner: SessionRng,
        draws: usize,
    }

    impl RngCore for Counting {
        fn next_u32(&mut self) -> u32 {
            self.next_u64() as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.draws += 1;
            self.inner.next_u64()
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            self.inner.fill_bytes(dest)
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = session_rng(42);
        let mut b = session_rng(42);
        let xs: Vec<_> = (0..32).map(|_| a.next_below(7)).collect();
        let ys: Vec<_> = (0..32).map(|_| b.next_below(7)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_next_below_in_range() {
        let mut rng = session_rng(7);
        for bound in 1..50 {
            for _ in 0..20 {
                assert!(rng.next_below(bound) < bound);
            }
        }
    }

    #[test]
    fn test_one_draw_per_call() {
        let mut rng = Counting { inner: session_rng(1), draws: 0 };
        for bound in [1, 2, 3, 1000, usize::MAX] {
            rng.next_below(bound);
        }
        assert_eq!(rng.draws, 5);
    }
}
