//! Pairwise crossover stage.
//!
//! Parents are consumed in groups of four; any remainder is dropped before
//! breeding. Adjacent parents `(0, 1), (2, 3), …` breed once each, producing
//! two opaque children that the engine's converter turns back into
//! chromosomes.
//!
//! Breeding fans out one task per pair. Results are collected into an
//! index-ordered buffer sized before the fan-out, so the output order is
//! always `[pair0.first, pair0.second, pair1.first, …]` regardless of which
//! task finishes first.

use super::types::Chromosome;
use crate::random::{create_rng, task_seeds};
use log::trace;
use rand::Rng;
use rayon::prelude::*;

/// Number of parents that take part in breeding.
///
/// The nearest multiple of four not above `parents`.
pub fn breeding_count(parents: usize) -> usize {
    parents - parents % 4
}

/// Breeds `parents` pairwise and converts every child.
///
/// Returns exactly [`breeding_count(parents.len())`](breeding_count)
/// children. Each pair gets its own RNG seeded from `rng`, so the result is
/// the same whether `parallel` is set or not.
pub fn crossover<C, F, R>(parents: &[C], converter: &F, rng: &mut R, parallel: bool) -> Vec<C>
where
    C: Chromosome,
    F: Fn(C::Offspring) -> C,
    R: Rng,
{
    let usable = breeding_count(parents.len());
    if usable < parents.len() {
        trace!(
            "crossover: dropping {} of {} parents",
            parents.len() - usable,
            parents.len()
        );
    }
    let parents = &parents[..usable];
    let seeds = task_seeds(rng, usable / 2);

    let broods: Vec<(C::Offspring, C::Offspring)> = if parallel {
        parents
            .par_chunks_exact(2)
            .zip(seeds.par_iter())
            .map(|(pair, &seed)| pair[0].breed(&pair[1], &mut create_rng(seed)))
            .collect()
    } else {
        parents
            .chunks_exact(2)
            .zip(seeds.iter())
            .map(|(pair, &seed)| pair[0].breed(&pair[1], &mut create_rng(seed)))
            .collect()
    };

    let mut next_generation = Vec::with_capacity(usable);
    for (first, second) in broods {
        next_generation.push(converter(first));
        next_generation.push(converter(second));
    }
    next_generation
}
