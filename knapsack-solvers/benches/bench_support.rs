//! Benchmark support utilities for the knapsack solvers.
//!
//! Provides deterministic random instances so benchmark runs are comparable.

use knapsack_core::Instance;
use knapsack_core::test_support::scaled_instance;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed for deterministic random number generation in benchmarks.
pub const BENCHMARK_SEED: u64 = 42;

/// Generate `count` items with weights in `1.00..=100.00` and values in
/// `100.00..=1000.00`, all in hundredths.
#[must_use]
pub fn generate_instance(count: usize, capacity: u32, seed: u64) -> Instance {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let pairs: Vec<(u64, u64)> = (0..count)
        .map(|_| (rng.gen_range(100..=10_000), rng.gen_range(10_000..=100_000)))
        .collect();
    scaled_instance(capacity, &pairs)
}
