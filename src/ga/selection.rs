//! Roulette-wheel parent selection.
//!
//! Parents are drawn by fitness-proportionate sampling without replacement.
//! The wheel is built once per selection round:
//!
//! 1. Every fitness is divided by the population's fitness sum.
//! 2. The population is sorted by descending normalized fitness.
//! 3. Each member's fitness is replaced by the running total of the sorted
//!    normalized values, so the last member holds ~1.0.
//!
//! Each draw then spins the wheel with a uniform `r` in `[0, 1)` and removes
//! the first member whose accumulated value exceeds `r`. The wheel is not
//! rebuilt between draws, so later draws see the stale accumulated values
//! of the shrinking pool. Misses (possible once members are removed, or when
//! fitness is NaN) fall back to the last member.
//!
//! Selection overwrites fitness: callers must re-evaluate parents before
//! relying on their scores.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::Chromosome;
use rand::Rng;

/// Normalizes, sorts and accumulates `population` in place.
///
/// Returns the fitness sum used for normalization. A zero sum turns every
/// fitness into NaN (or infinity); this is not special-cased.
pub fn prepare_wheel<C: Chromosome>(population: &mut [C]) -> f64 {
    let total: f64 = population.iter().map(|c| c.fitness()).sum();
    for c in population.iter_mut() {
        c.normalize(total);
    }

    population.sort_by(|a, b| {
        b.fitness()
            .partial_cmp(&a.fitness())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut accumulation = 0.0;
    for c in population.iter_mut() {
        accumulation += c.fitness();
        c.acc_normalize(accumulation);
    }

    total
}

/// Returns the index of the first member whose accumulated fitness exceeds `r`.
///
/// Falls back to the last index when no member does.
///
/// # Panics
/// Panics if `wheel` is empty.
pub fn spin<C: Chromosome>(wheel: &[C], r: f64) -> usize {
    assert!(!wheel.is_empty(), "cannot spin an empty wheel");
    wheel
        .iter()
        .position(|c| c.fitness() > r)
        .unwrap_or(wheel.len() - 1)
}

/// Draws `population.len() / 2` parents without replacement.
///
/// The members that are not drawn are dropped.
pub fn select_parents<C: Chromosome, R: Rng>(mut population: Vec<C>, rng: &mut R) -> Vec<C> {
    let parents_count = population.len() / 2;
    let mut parents = Vec::with_capacity(parents_count);
    if parents_count == 0 {
        return parents;
    }

    prepare_wheel(&mut population);

    while parents.len() < parents_count {
        let r: f64 = rng.random_range(0.0..1.0);
        let idx = spin(&population, r);
        parents.push(population.remove(idx));
    }

    parents
}
