//! Generational loop execution.
//!
//! [`Goga`] orchestrates the evolutionary process:
//! evaluation → selection → re-evaluation of parents → crossover →
//! mutation → learning → merge → convergence check → repeat.
//!
//! The population carried into the next generation is the selected parents
//! followed by their varied children. Convergence is judged on the children
//! of the current generation only.

use super::config::GogaConfig;
use super::crossover::crossover;
use super::evaluation::evaluate_population;
use super::selection::select_parents;
use super::types::{best_index, Chromosome};
use super::variation::{learn_generation, mutate_generation};
use crate::error::GogaError;
use crate::random::create_rng;
use log::{debug, info, warn};
use std::fmt;
use std::time::Instant;

/// How a run terminated.
///
/// Displays as the human-readable status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A chromosome passed [`Chromosome::is_good_enough`] in `generation`.
    ///
    /// Generation 0 is the first bred generation, or the initial population
    /// when it already contains a good-enough chromosome. The two cases
    /// differ in [`Goga::generations`]: 1 for the first bred generation,
    /// 0 when no generation ran.
    Converged {
        /// Index of the converging generation.
        generation: usize,
    },

    /// The iteration bound was reached without convergence.
    Exhausted {
        /// The bound that was reached.
        max_iterations: usize,
    },
}

impl Status {
    /// Returns `true` for [`Status::Converged`].
    pub fn is_converged(&self) -> bool {
        matches!(self, Status::Converged { .. })
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Converged { generation } => write!(f, "Took {generation} generations."),
            Status::Exhausted { max_iterations } => {
                write!(f, "Failed to converge after {max_iterations} iterations.")
            }
        }
    }
}

/// The genetic algorithm engine.
///
/// Holds the configuration, the converter that turns breeding output back
/// into chromosomes, and the outcome of the last [`run`](Goga::run).
///
/// # Usage
///
/// ```ignore
/// let mut goga = Goga::init(|value: String| Word::new(value))
///     .with_config(GogaConfig::default().with_num_threads(16));
/// let population = goga.generate_population(100, || Word::random(8));
///
/// goga.run(&Word::new("renquinn"), population)?;
///
/// println!("{}", goga.result().unwrap());
/// println!("{}", goga.status().unwrap());
/// ```
pub struct Goga<C: Chromosome, F> {
    config: GogaConfig,
    converter: F,
    result: Option<C>,
    status: Option<Status>,
    history: Vec<f64>,
    generations: usize,
}

impl<C> Goga<C, fn(C) -> C>
where
    C: Chromosome<Offspring = C>,
{
    /// Creates an engine for chromosomes whose breeding output is already
    /// a chromosome.
    pub fn new() -> Self {
        Self::init(std::convert::identity)
    }
}

impl<C> Default for Goga<C, fn(C) -> C>
where
    C: Chromosome<Offspring = C>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<C, F> Goga<C, F>
where
    C: Chromosome,
    F: Fn(C::Offspring) -> C,
{
    /// Creates an engine with the default configuration.
    ///
    /// `converter` turns one breeding output into a chromosome. It is only
    /// called on the thread driving the run, but [`run`](Self::run) requires
    /// it to be `Send` because the whole loop may move into a dedicated pool
    /// (see [`GogaConfig::num_threads`]).
    pub fn init(converter: F) -> Self {
        Self {
            config: GogaConfig::default(),
            converter,
            result: None,
            status: None,
            history: Vec::new(),
            generations: 0,
        }
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: GogaConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GogaConfig {
        &self.config
    }

    /// Sets the iteration bound for subsequent runs.
    pub fn set_max_iterations(&mut self, n: usize) {
        self.config.max_iterations = n;
    }

    /// Builds a population by calling `generator` `size` times.
    pub fn generate_population<G>(&self, size: usize, mut generator: G) -> Vec<C>
    where
        G: FnMut() -> C,
    {
        (0..size).map(|_| generator()).collect()
    }

    /// Best chromosome of the last run.
    ///
    /// After convergence this is the converging chromosome; otherwise it is
    /// the best child of the last executed generation (or the best initial
    /// chromosome when no generation ran).
    pub fn result(&self) -> Option<&C> {
        self.result.as_ref()
    }

    /// Consumes the engine and returns the best chromosome.
    pub fn into_result(self) -> Option<C> {
        self.result
    }

    /// Termination status of the last run.
    ///
    /// `None` before the first run, or when the last run returned an error.
    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    /// Best fitness of the initial population followed by the best child
    /// fitness of every executed generation.
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// Number of generations executed by the last run.
    pub fn generations(&self) -> usize {
        self.generations
    }

    /// Runs the generational loop against `target`.
    ///
    /// On success, [`result`](Self::result) and [`status`](Self::status)
    /// describe the outcome. A panic in any [`Chromosome`] capability or in
    /// the converter aborts the run. The outcome of any previous run is
    /// cleared first, so after an error `status()` is `None`.
    ///
    /// The converter must be `Send` even without a dedicated pool.
    ///
    /// # Errors
    ///
    /// - [`GogaError::InvalidConfig`] if the configuration does not validate
    /// - [`GogaError::EmptyPopulation`] if `population` is empty
    /// - [`GogaError::ExtinctGeneration`] if selection leaves fewer than four
    ///   parents, so no child can be bred
    /// - [`GogaError::ThreadPool`] if the dedicated pool cannot be built
    pub fn run(&mut self, target: &C, population: Vec<C>) -> Result<(), GogaError>
    where
        F: Send,
    {
        self.result = None;
        self.status = None;
        self.history.clear();
        self.generations = 0;

        self.config.validate()?;
        if population.is_empty() {
            return Err(GogaError::EmptyPopulation);
        }

        match self.config.num_threads {
            Some(n) => {
                let pool = rayon::ThreadPoolBuilder::new().num_threads(n).build()?;
                pool.install(|| self.evolve(target, population))
            }
            None => self.evolve(target, population),
        }
    }

    fn evolve(&mut self, target: &C, mut population: Vec<C>) -> Result<(), GogaError> {
        let parallel = self.config.parallel;
        let max_iterations = self.config.max_iterations;
        let mut rng = match self.config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        info!(
            "goga: {} chromosomes, max {} iterations, {} workers",
            population.len(),
            max_iterations,
            if parallel {
                rayon::current_num_threads()
            } else {
                1
            }
        );

        timed("evaluate population", || {
            evaluate_population(&mut population, target, parallel)
        });

        let Some(initial) = best_index(&population) else {
            return Err(GogaError::EmptyPopulation);
        };
        let initial = &population[initial];
        self.history.push(initial.fitness());
        self.result = Some(initial.clone());

        if initial.is_good_enough() {
            self.finish(Status::Converged { generation: 0 });
            return Ok(());
        }

        for generation in 0..max_iterations {
            let mut parents = timed("selection", || select_parents(population, &mut rng));
            timed("evaluate parents", || {
                evaluate_population(&mut parents, target, parallel)
            });

            let mut children = timed("crossover", || {
                crossover(&parents, &self.converter, &mut rng, parallel)
            });
            if children.is_empty() {
                return Err(GogaError::ExtinctGeneration {
                    generation,
                    parents: parents.len(),
                });
            }

            timed("mutation", || {
                mutate_generation(&mut children, target, &mut rng, parallel)
            });
            if self.config.learning {
                timed("learning", || {
                    learn_generation(&mut children, target, &mut rng, parallel)
                });
            }

            let best = &children[best_index(&children).unwrap_or(0)];
            let converged = best.is_good_enough();
            if best.fitness().is_nan() {
                warn!("goga: generation {generation} has no comparable fitness");
            }
            debug!(
                "goga: generation {generation}: best {best}, {} parents + {} children",
                parents.len(),
                children.len()
            );
            self.history.push(best.fitness());
            self.result = Some(best.clone());
            self.generations = generation + 1;

            parents.append(&mut children);
            population = parents;

            if converged {
                self.finish(Status::Converged { generation });
                return Ok(());
            }
        }

        self.finish(Status::Exhausted { max_iterations });
        Ok(())
    }

    fn finish(&mut self, status: Status) {
        match &self.result {
            Some(best) => info!("goga: {status} best {best}"),
            None => info!("goga: {status}"),
        }
        self.status = Some(status);
    }
}

/// Runs `stage` and logs its wall-clock time at debug level.
fn timed<T>(label: &str, stage: impl FnOnce() -> T) -> T {
    let started = Instant::now();
    let out = stage();
    debug!("goga: {label} took {:?}", started.elapsed());
    out
}

// ============================================================================
// Tests
// ============================================================================
