//! Seeded random number generation.
//!
//! Parallel stages never share a generator. Instead the orchestrator draws
//! one seed per task from its master RNG with [`task_seeds`], and each task
//! builds its own generator with [`create_rng`]. A seeded run is therefore
//! reproducible regardless of how rayon schedules the tasks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates a deterministic RNG from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draws `count` task seeds from `rng`.
pub fn task_seeds<R: Rng>(rng: &mut R, count: usize) -> Vec<u64> {
    (0..count).map(|_| rng.random()).collect()
}
