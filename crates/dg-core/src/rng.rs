//! Random number generation for dungeon generation
//!
//! Generation only depends on the [`RandomSource`] capability, so tests can
//! substitute a scripted source. [`DungeonRng`] is the seeded ChaCha
//! implementation used everywhere else.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Uniform random draws used by the partitioner and the room carver
pub trait RandomSource {
    /// Uniform integer in `low..=high`. Callers guarantee `low <= high`.
    fn range_inclusive(&mut self, low: usize, high: usize) -> usize;

    /// Uniform index in `0..len`. Returns 0 if `len` is 0.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Uniform choice among a small fixed set of options
    fn choose<T: Copy>(&mut self, options: &[T]) -> Option<T>
    where
        Self: Sized,
    {
        if options.is_empty() {
            None
        } else {
            Some(options[self.pick_index(options.len())])
        }
    }
}

/// Dungeon random number generator
///
/// Wraps ChaCha8Rng for reproducible generation: the same seed always
/// yields the same dungeon.
#[derive(Debug, Clone)]
pub struct DungeonRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl DungeonRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for DungeonRng {
    fn range_inclusive(&mut self, low: usize, high: usize) -> usize {
        debug_assert!(low <= high, "inverted range {low}..={high}");
        if low >= high {
            return low;
        }
        self.rng.gen_range(low..=high)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}


/// Scripted random source for forcing exact draws in tests
#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;

    use super::RandomSource;

    /// Replays a fixed list of draws; panics when a draw falls outside the
    /// requested range or the script runs out.
    #[derive(Debug, Default)]
    pub(crate) struct ScriptedSource {
        draws: VecDeque<usize>,
    }

    impl ScriptedSource {
        pub(crate) fn new(draws: &[usize]) -> Self {
            Self {
                draws: draws.iter().copied().collect(),
            }
        }

        pub(crate) fn remaining(&self) -> usize {
            self.draws.len()
        }

        fn next(&mut self) -> usize {
            self.draws.pop_front().expect("scripted draws exhausted")
        }
    }

    impl RandomSource for ScriptedSource {
        fn range_inclusive(&mut self, low: usize, high: usize) -> usize {
            let value = self.next();
            assert!(
                (low..=high).contains(&value),
                "scripted draw {value} outside {low}..={high}"
            );
            value
        }

        fn pick_index(&mut self, len: usize) -> usize {
            let value = self.next();
            assert!(value < len.max(1), "scripted index {value} outside 0..{len}");
            value
        }
    }
}
