//! Parallel genetic algorithm engine.
//!
//! A generic, domain-agnostic GA built on one capability trait. Users
//! describe a candidate solution by implementing [`Chromosome`], which
//! specifies how to score, breed, mutate and (optionally) locally improve it.
//!
//! # Core Traits
//!
//! - [`Chromosome`]: A candidate solution carrying its own `f64` fitness
//!
//! # Key Types
//!
//! - [`GogaConfig`]: Iteration bound, parallelism, learning pass, seed
//! - [`Goga`]: Runs the generational loop and exposes the result
//! - [`Status`]: How the last run terminated
//!
//! # Stages
//!
//! Each stage is a plain function over a population slice, usable on its own:
//!
//! - [`evaluate_population`]: Parallel fitness refresh
//! - [`select_parents`]: Roulette-wheel selection of half the population
//! - [`crossover`]: Pairwise breeding of parents in groups of four
//! - [`mutate_generation`] / [`learn_generation`]: Parallel perturbation
//!   followed by re-scoring
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod crossover;
mod evaluation;
mod runner;
mod selection;
#[cfg(test)]
mod testing;
mod types;
mod variation;

pub use config::GogaConfig;
pub use crossover::{breeding_count, crossover};
pub use evaluation::evaluate_population;
pub use runner::{Goga, Status};
pub use selection::{prepare_wheel, select_parents, spin};
pub use types::{best_index, Chromosome};
pub use variation::{learn_generation, mutate_generation};
