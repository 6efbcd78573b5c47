//! Mutation and learning passes.
//!
//! Both passes perturb every child and re-score it against the target, one
//! task per child, joined before returning. Neither pass adds, removes or
//! reorders chromosomes.

use super::types::Chromosome;
use crate::random::{create_rng, task_seeds};
use rand::rngs::StdRng;
use rand::Rng;
use rayon::prelude::*;

/// Mutates every chromosome, then refreshes its fitness.
pub fn mutate_generation<C: Chromosome, R: Rng>(
    generation: &mut [C],
    target: &C,
    rng: &mut R,
    parallel: bool,
) {
    vary(generation, target, rng, parallel, |c, task_rng| c.mutate(task_rng));
}

/// Runs the learning hook on every chromosome, then refreshes its fitness.
pub fn learn_generation<C: Chromosome, R: Rng>(
    generation: &mut [C],
    target: &C,
    rng: &mut R,
    parallel: bool,
) {
    vary(generation, target, rng, parallel, |c, task_rng| c.learn(task_rng));
}

fn vary<C, R, V>(generation: &mut [C], target: &C, rng: &mut R, parallel: bool, variation: V)
where
    C: Chromosome,
    R: Rng,
    V: Fn(&mut C, &mut StdRng) + Sync,
{
    let seeds = task_seeds(rng, generation.len());
    let step = |(c, &seed): (&mut C, &u64)| {
        variation(c, &mut create_rng(seed));
        c.calculate_fitness(target);
    };

    if parallel {
        generation.par_iter_mut().zip(seeds.par_iter()).for_each(step);
    } else {
        generation.iter_mut().zip(seeds.iter()).for_each(step);
    }
}
