//! Input generators shared by the test suite, the bench harness and the CLI driver.
//!
//! Every random pattern comes in two flavours: `*_seeded` takes an explicit seed and is fully
//! reproducible, the plain one draws from [`random_init_seed`] so a failing test run can be
//! replayed by exporting `OVERRIDE_SEED`.

use std::env;
use std::ops::Range;

use once_cell::sync::Lazy;
use rand::prelude::*;
use zipf::ZipfDistribution;

static SEED: Lazy<u64> = Lazy::new(|| {
    env::var("OVERRIDE_SEED")
        .ok()
        .and_then(|seed| seed.parse().ok())
        .unwrap_or_else(|| thread_rng().gen())
});

/// Process wide seed used by the unseeded random patterns.
pub fn random_init_seed() -> u64 {
    *SEED
}

fn rng_from(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

// --- Deterministic ---

fn checked_len(len: usize) -> i32 {
    i32::try_from(len).expect("pattern length must fit in i32")
}

/// `0, 1, 2, ..., len - 1`
pub fn ascending(len: usize) -> Vec<i32> {
    (0..checked_len(len)).collect()
}

/// `len - 1, ..., 1, 0`
pub fn descending(len: usize) -> Vec<i32> {
    (0..checked_len(len)).rev().collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

/// Ascending to the middle, then descending. The maximum sits in the interior of the slice.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let half = len / 2;
    (0..checked_len(half))
        .chain((0..checked_len(len - half)).rev())
        .collect()
}

// --- Random ---

/// Uniformly distributed values over the full `i32` range.
pub fn random_seeded(len: usize, seed: u64) -> Vec<i32> {
    let mut rng = rng_from(seed);
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random(len: usize) -> Vec<i32> {
    random_seeded(len, random_init_seed())
}

/// Uniformly distributed values in `range`. Small ranges produce many duplicates.
pub fn random_uniform_seeded(len: usize, range: Range<i32>, seed: u64) -> Vec<i32> {
    let mut rng = rng_from(seed);
    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

pub fn random_uniform(len: usize, range: Range<i32>) -> Vec<i32> {
    random_uniform_seeded(len, range, random_init_seed())
}

/// Zipfian distributed values in `1..=len`, a few values dominate.
pub fn random_zipf_seeded(len: usize, exponent: f64, seed: u64) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut rng = rng_from(seed);
    let dist = ZipfDistribution::new(len, exponent).expect("exponent must be positive");
    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    random_zipf_seeded(len, exponent, random_init_seed())
}

/// Sorted input where a small fraction of the elements was overwritten with random values.
pub fn ascending_with_noise(len: usize, noise_percent: f64) -> Vec<i32> {
    let mut rng = rng_from(random_init_seed());
    let mut v = ascending(len);
    let noise = ((len as f64) * (noise_percent / 100.0)).round() as usize;
    for _ in 0..noise.min(len) {
        let idx = rng.gen_range(0..len);
        v[idx] = rng.gen();
    }
    v
}
