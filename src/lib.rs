//! Generic parallel genetic algorithm engine.
//!
//! Given a population of candidate solutions and a pluggable
//! [`Chromosome`](ga::Chromosome) implementation, the engine repeatedly
//! selects, recombines and perturbs candidates until one passes the
//! chromosome's convergence test or the iteration bound is reached.
//!
//! - **Evaluation**: every chromosome is scored against the target in
//!   parallel.
//! - **Selection**: half the population is drawn by roulette wheel,
//!   without replacement.
//! - **Crossover**: parents breed pairwise in parallel; opaque offspring are
//!   turned back into chromosomes by a caller-supplied converter.
//! - **Variation**: children are mutated, optionally improved by a learning
//!   hook, and re-scored in parallel.
//!
//! # Architecture
//!
//! The engine knows nothing about the representation being evolved.
//! Strings, bit vectors, permutations and so on are defined by the caller
//! through the [`Chromosome`](ga::Chromosome) trait. Parallel stages run on
//! rayon; a dedicated pool can be requested through
//! [`GogaConfig::num_threads`](ga::GogaConfig::num_threads).

pub mod error;
pub mod ga;
pub mod random;

pub use error::GogaError;
