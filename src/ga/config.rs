//! Engine configuration.
//!
//! [`GogaConfig`] holds every parameter that controls the generational loop.

use crate::error::GogaError;

/// Configuration for the [`Goga`](super::Goga) engine.
///
/// # Defaults
///
/// ```
/// use goga::ga::GogaConfig;
///
/// let config = GogaConfig::default();
/// assert_eq!(config.max_iterations, 1000);
/// assert!(config.parallel);
/// assert!(config.num_threads.is_none());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use goga::ga::GogaConfig;
///
/// let config = GogaConfig::default()
///     .with_max_iterations(200)
///     .with_num_threads(16)
///     .with_learning(false)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GogaConfig {
    /// Maximum number of generations before giving up.
    ///
    /// Zero is allowed: the run then only evaluates the initial population.
    pub max_iterations: usize,

    /// Whether stages fan out over rayon workers.
    ///
    /// When `false`, every stage runs on the calling thread.
    pub parallel: bool,

    /// Size of a dedicated worker pool for this engine.
    ///
    /// `None` uses rayon's global pool. The pool is built per run and
    /// never changes process-wide settings. The run loop is moved into the
    /// pool, which is why [`Goga::run`](super::Goga::run) needs a `Send`
    /// converter.
    pub num_threads: Option<usize>,

    /// Whether the learning pass runs after mutation each generation.
    pub learning: bool,

    /// Seed for the master RNG.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GogaConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            parallel: true,
            num_threads: None,
            learning: true,
            seed: None,
        }
    }
}

impl GogaConfig {
    /// Sets the maximum number of generations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Enables or disables parallel stages.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Runs the engine on a dedicated pool of `n` workers.
    pub fn with_num_threads(mut self, n: usize) -> Self {
        self.num_threads = Some(n);
        self
    }

    /// Enables or disables the learning pass.
    pub fn with_learning(mut self, learning: bool) -> Self {
        self.learning = learning;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), GogaError> {
        if self.num_threads == Some(0) {
            return Err(GogaError::InvalidConfig(
                "num_threads must be positive or None".into(),
            ));
        }
        Ok(())
    }
}
