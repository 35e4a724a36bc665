//! Benchmark workloads for the valbuf storage library.
//!
//! Provides seeded, reproducible value and size sequences so bench runs
//! are comparable across machines and commits.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Generate `len` values from a ChaCha8 stream seeded with `seed`.
pub fn seeded_values(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.random::<f64>()).collect()
}

/// Generate `len` sizes in `0..max` from a ChaCha8 stream seeded with `seed`.
pub fn seeded_sizes(len: usize, max: usize, seed: u64) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(0..max)).collect()
}
