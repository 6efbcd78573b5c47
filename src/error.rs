//! Error type for engine-level failures.
//!
//! Contract violations inside a [`Chromosome`](crate::ga::Chromosome)
//! implementation are not represented here: a panicking capability aborts
//! the run through the stage barrier.

use thiserror::Error;

/// Failures reported by [`Goga`](crate::ga::Goga).
#[derive(Debug, Error)]
pub enum GogaError {
    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// `run` was called without any chromosomes.
    #[error("population is empty")]
    EmptyPopulation,

    /// Selection produced too few parents to breed a single group of four.
    #[error("generation {generation} produced no children ({parents} parents, need at least 4)")]
    ExtinctGeneration {
        /// Index of the generation that went extinct.
        generation: usize,
        /// Number of parents selection returned.
        parents: usize,
    },

    /// The dedicated worker pool could not be created.
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
