//! The chromosome capability contract.
//!
//! [`Chromosome`] is the only thing the engine knows about a candidate
//! solution. The orchestrator never inspects the concrete type: it scores,
//! rescales, breeds and perturbs chromosomes exclusively through this trait.

use rand::Rng;
use std::fmt;

/// A candidate solution in the population.
///
/// Fitness is a plain `f64` stored inside the chromosome and **higher is
/// better**. The engine overwrites it during selection (normalized, then
/// accumulated values), so every stage that needs a real score calls
/// [`calculate_fitness`](Chromosome::calculate_fitness) again.
///
/// Breeding returns an opaque [`Offspring`](Chromosome::Offspring) pair. The
/// engine turns each offspring back into a chromosome with the converter
/// passed to [`Goga::init`](crate::ga::Goga::init). When the offspring is the
/// chromosome itself, use [`Goga::new`](crate::ga::Goga::new).
///
/// # Implementing
///
/// ```ignore
/// #[derive(Clone)]
/// struct Word {
///     value: String,
///     fitness: f64,
/// }
///
/// impl Chromosome for Word {
///     type Offspring = Word;
///
///     fn fitness(&self) -> f64 { self.fitness }
///     fn set_fitness(&mut self, f: f64) { self.fitness = f; }
///
///     fn calculate_fitness(&mut self, target: &Word) {
///         let edits = levenshtein(&self.value, &target.value);
///         self.fitness = (self.value.len() - edits) as f64;
///     }
///
///     fn is_good_enough(&self) -> bool { self.fitness > 7.0 }
///
///     fn mutate<R: Rng>(&mut self, rng: &mut R) { /* ... */ }
///
///     fn breed<R: Rng>(&self, other: &Word, rng: &mut R) -> (Word, Word) {
///         /* single-point crossover */
///     }
/// }
/// ```
///
/// # Thread Safety
///
/// Chromosomes are scored, bred and mutated on rayon worker threads, one
/// task per chromosome (or per pair when breeding), so the type must be
/// `Send + Sync`. `Clone` lets the engine keep the best chromosome while the
/// population moves on to the next generation.
pub trait Chromosome: Clone + Send + Sync + fmt::Display {
    /// Raw breeding output, converted back into a chromosome by the engine.
    type Offspring: Send;

    /// Returns the current fitness score.
    fn fitness(&self) -> f64;

    /// Overwrites the fitness score.
    fn set_fitness(&mut self, fitness: f64);

    /// Computes and stores fitness against `target`.
    ///
    /// Must be idempotent and must not change anything but the fitness.
    fn calculate_fitness(&mut self, target: &Self);

    /// Returns `true` if the fitness exceeds the convergence threshold.
    fn is_good_enough(&self) -> bool;

    /// Perturbs the internal value, typically unit by unit with some
    /// per-unit probability.
    fn mutate<R: Rng>(&mut self, rng: &mut R);

    /// Local improvement hook, run once per generation after mutation.
    ///
    /// The default implementation is a no-op.
    fn learn<R: Rng>(&mut self, _rng: &mut R) {}

    /// Produces exactly two children from one crossover with `other`.
    fn breed<R: Rng>(&self, other: &Self, rng: &mut R) -> (Self::Offspring, Self::Offspring);

    /// Rescales fitness to `fitness / total`.
    ///
    /// A zero total yields NaN (or infinity); this is not trapped.
    fn normalize(&mut self, total: f64) {
        self.set_fitness(self.fitness() / total);
    }

    /// Replaces fitness with the accumulated normalized value.
    fn acc_normalize(&mut self, accumulated: f64) {
        self.set_fitness(accumulated);
    }
}

/// Returns the index of the fittest chromosome, or `None` if empty.
///
/// NaN loses against every number: a NaN incumbent is always replaced, and a
/// NaN challenger never wins. Ties keep the earliest member.
pub fn best_index<C: Chromosome>(population: &[C]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, candidate) in population.iter().enumerate() {
        match best {
            None => best = Some(i),
            Some(b) => {
                let incumbent = population[b].fitness();
                if candidate.fitness() > incumbent || incumbent.is_nan() {
                    best = Some(i);
                }
            }
        }
    }
    best
}
