//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the generation loop.

use crate::error::{TspError, TspResult};

/// Configuration for the genetic solver.
///
/// # Defaults
///
/// ```
/// use u_tsp::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 1000);
/// assert_eq!(config.max_generations, 500);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tsp::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_elite_fraction(0.05)
///     .with_mutation_rate(0.02)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of candidate tours per generation.
    pub population_size: usize,

    /// Number of generations to run.
    pub max_generations: usize,

    /// Fraction of each new population overwritten with the current best
    /// tour (0.0–1.0). The slot count is `floor(population_size × fraction)`.
    pub elite_fraction: f64,

    /// Per-position swap probability applied to every child (0.0–1.0).
    pub mutation_rate: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Compute tour lengths on the rayon pool.
    ///
    /// Only honored with the `parallel` feature. Results are identical to
    /// the sequential path.
    pub parallel: bool,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 1000,
            max_generations: 500,
            elite_fraction: 0.02,
            mutation_rate: 0.1,
            seed: None,
            parallel: false,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the elite fraction. Out-of-range values are rejected by
    /// [`validate`](Self::validate), not clamped.
    pub fn with_elite_fraction(mut self, fraction: f64) -> Self {
        self.elite_fraction = fraction;
        self
    }

    /// Sets the per-position mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel length evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Preset for quick runs: 100 tours for 100 generations.
    pub fn fast() -> Self {
        Self {
            population_size: 100,
            max_generations: 100,
            ..Self::default()
        }
    }

    /// Number of elite slots per generation: `floor(P × elite_fraction)`.
    pub fn elite_count(&self) -> usize {
        super::operators::elite_count(self.population_size, self.elite_fraction)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> TspResult<()> {
        if self.population_size == 0 {
            return Err(TspError::config("population_size must be at least 1"));
        }
        if self.max_generations == 0 {
            return Err(TspError::config("max_generations must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(TspError::config(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.elite_fraction) {
            return Err(TspError::config(format!(
                "elite_fraction must be in [0, 1], got {}",
                self.elite_fraction
            )));
        }
        Ok(())
    }
}
