use mockall::Sequence;

use crate::seed::MockSeedSource;

/// Seed source handing out `seeds` in order, one per `shuffle_with_fresh_seed` call, each exactly once.
pub fn seed_source_returning(seeds: &[u64]) -> MockSeedSource {
    let mut seed_source = MockSeedSource::new();
    let mut sequence = Sequence::new();
    for &seed in seeds {
        seed_source
            .expect_next_seed()
            .times(1)
            .in_sequence(&mut sequence)
            .return_const(seed);
    }
    seed_source
}
