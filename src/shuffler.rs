use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::seed::SeedSource;

/// Generator state before the first shuffle. Every shuffle re-seeds, so the value never shows in results.
const INITIAL_SEED: u64 = 0;

/// Holds the canonical and the current order of items together with the generator driving the shuffles.
#[derive(Debug)]
pub struct Shuffler<T, S> {
    canonical: Vec<T>,
    items: Vec<T>,
    rng: ChaCha8Rng,
    seed_source: S,
}

impl<T: Clone, S: SeedSource> Shuffler<T, S> {
    /// `items` becomes the canonical order that [Shuffler::shuffle_with_seed] and [Shuffler::reset] restore.
    pub fn new(items: Vec<T>, seed_source: S) -> Self {
        Shuffler {
            canonical: items.clone(),
            items,
            rng: ChaCha8Rng::seed_from_u64(INITIAL_SEED),
            seed_source,
        }
    }

    /// Permutes the current order (without resetting it first) using a seed taken from the seed source. Returns
    /// the seed used.
    pub fn shuffle_with_fresh_seed(&mut self) -> u64 {
        let seed = self.seed_source.next_seed();
        log::info!("Shuffling with seed: {seed}");
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        fisher_yates(&mut self.items, &mut self.rng);
        seed
    }

    /// Restores canonical order and permutes it. The same seed always yields the same order, whatever happened to
    /// the items before.
    pub fn shuffle_with_seed(&mut self, seed: u64) {
        self.restore_canonical();
        log::info!("Shuffling with specific seed: {seed}");
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        fisher_yates(&mut self.items, &mut self.rng);
    }

    pub fn reset(&mut self) {
        self.restore_canonical();
        log::debug!("Reset to original order");
    }

    fn restore_canonical(&mut self) {
        self.items.clone_from(&self.canonical);
    }
}

impl<T, S> Shuffler<T, S> {
    /// First `count` items in current order, or all of them when `count` exceeds the length.
    pub fn prefix(&self, count: usize) -> &[T] {
        &self.items[..count.min(self.items.len())]
    }

    pub fn all(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// In-place Fisher-Yates permutation: walks from the last index down to 1, swapping each position with one drawn
/// uniformly from `0..=i`. Draws are 64 bits wide on every target so a seed yields the same order everywhere.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i as u64) as usize;
        items.swap(i, j);
    }
}
