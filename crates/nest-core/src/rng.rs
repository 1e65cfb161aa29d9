//! Deterministic per-ant RNG wrapper.
//!
//! # Determinism strategy
//!
//! Each ant gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (ant_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive ant IDs uniformly across the seed space.
//! This means:
//!
//! - Ants never share RNG state, so processing order cannot perturb draws.
//! - Adding ants at the end of the list does not disturb the seeds of
//!   existing ants — runs are reproducible even as colonies grow.
//!
//! The adaptive path policy draws one small jitter value per scored path to
//! break exact score ties without making the schedule nondeterministic.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AntId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-ant deterministic RNG.
///
/// Create one per ant at simulation init; store in a `Vec<AntRng>` parallel
/// to the ant array.
pub struct AntRng(SmallRng);

impl AntRng {
    /// Seed deterministically from the run's global seed and an ant ID.
    pub fn new(global_seed: u64, ant: AntId) -> Self {
        let seed = global_seed ^ (ant.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AntRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
