//! Fitness evaluation stage.

use super::types::Chromosome;
use rayon::prelude::*;

/// Refreshes the fitness of every chromosome against `target`.
///
/// One task per chromosome; the call returns only after every task has
/// finished. Order and length of `population` are untouched. A panic in
/// [`Chromosome::calculate_fitness`] propagates to the caller.
pub fn evaluate_population<C: Chromosome>(population: &mut [C], target: &C, parallel: bool) {
    if parallel {
        population
            .par_iter_mut()
            .for_each(|c| c.calculate_fitness(target));
    } else {
        for c in population.iter_mut() {
            c.calculate_fitness(target);
        }
    }
}
