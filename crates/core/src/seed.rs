// Seed-derived randomness for the simulation handlers
//
// Each simulation call constructs its own generator from a stable hash of
// its key string, so identical inputs always produce identical output and
// concurrent calls never share generator state.

use md5::{Digest, Md5};
use rand::distributions::{Distribution, WeightedIndex};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// Hash a key string into a small integer seed.
///
/// The MD5 digest is read as a big-endian integer and reduced modulo 10000.
/// MD5 is fine here: the hash only spreads keys across seeds, nothing is
/// security sensitive.
pub fn derive_seed(key: &str) -> u64 {
    let digest = Md5::digest(key.as_bytes());
    digest
        .iter()
        .fold(0u64, |acc, &byte| (acc * 256 + u64::from(byte)) % 10_000)
}

/// A locally scoped pseudo-random stream for one simulation call.
pub struct SimRng {
    rng: Pcg64Mcg,
}

impl SimRng {
    /// Seed a fresh generator from the given key string.
    pub fn for_key(key: &str) -> Self {
        Self {
            rng: Pcg64Mcg::seed_from_u64(derive_seed(key)),
        }
    }

    /// Uniform draw from the inclusive range [lo, hi].
    pub fn pick_range(&mut self, lo: i64, hi: i64) -> i64 {
        self.rng.gen_range(lo..=hi)
    }

    /// Draw one choice with probability proportional to its relative weight.
    pub fn pick_weighted<'a, T>(&mut self, choices: &'a [(T, u32)]) -> &'a T {
        let dist = WeightedIndex::new(choices.iter().map(|(_, weight)| *weight))
            .expect("choice table is non-empty with positive weights");
        &choices[dist.sample(&mut self.rng)].0
    }
}
