//! Run configuration for the assignment GA.

use serde::{Deserialize, Serialize};

use super::operators::{check_rate, GeneticOperators};
use crate::error::{AssignError, AssignResult};

/// Parameters of one optimization run.
///
/// # Example
/// ```
/// use u_assign::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_generations(200)
///     .with_population_size(40)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// assert!(GaConfig::default().with_population_size(1).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Number of generations to run (exactly; there is no early stop).
    pub generations: usize,
    /// Population size, at least 2.
    pub population_size: usize,
    /// Probability that a child is mutated, in `[0, 1]`.
    pub mutation_rate: f64,
    /// Probability that a child is recombined rather than copied, in `[0, 1]`.
    pub crossover_rate: f64,
    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
    /// Score population members on the rayon thread pool.
    pub parallel: bool,
    /// Report progress every this many generations (0 disables reports).
    pub report_interval: usize,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            generations: 100,
            population_size: 50,
            mutation_rate: 0.1,
            crossover_rate: 0.8,
            seed: None,
            parallel: true,
            report_interval: 10,
        }
    }
}

impl GaConfig {
    /// Sets the generation count.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Fixes the RNG seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel scoring.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the progress report interval.
    pub fn with_report_interval(mut self, interval: usize) -> Self {
        self.report_interval = interval;
        self
    }

    /// Checks parameter ranges.
    ///
    /// # Errors
    /// [`AssignError::Configuration`] if a rate is outside `[0, 1]` or the
    /// population has fewer than 2 members.
    pub fn validate(&self) -> AssignResult<()> {
        if self.population_size < 2 {
            return Err(AssignError::Configuration(format!(
                "population_size must be at least 2, got {}",
                self.population_size
            )));
        }
        check_rate("mutation_rate", self.mutation_rate)?;
        check_rate("crossover_rate", self.crossover_rate)?;
        Ok(())
    }

    /// Operators configured with this run's rates.
    pub fn operators(&self) -> AssignResult<GeneticOperators> {
        GeneticOperators::new(self.crossover_rate, self.mutation_rate)
    }

    /// Number of survivors kept each generation.
    pub fn survivor_count(&self) -> usize {
        self.population_size / 2
    }
}
