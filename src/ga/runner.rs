//! Generational loop.
//!
//! Each generation scores the whole population, ranks it, records the
//! best solution seen so far, keeps the better half unchanged and refills
//! the rest with mutated crossover children of survivors.

use std::time::{Duration, Instant};

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;
use tracing::instrument;

use super::config::GaConfig;
use super::operators::GeneticOperators;
use super::problem::AssignmentProblem;
use crate::error::AssignResult;
use crate::models::Solution;

/// Progress snapshot taken after a generation has been scored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenerationReport {
    /// Zero-based generation index.
    pub generation: usize,
    /// Best fitness seen in the run so far.
    pub best_fitness: f64,
    /// Best fitness within this generation's population.
    pub population_best: f64,
    /// Mean fitness of this generation's population.
    pub population_mean: f64,
}

/// Outcome of an optimization run.
#[derive(Debug, Clone, Serialize)]
pub struct GaResult {
    /// Best solution seen in any generation. `None` when zero generations
    /// were run.
    pub best_solution: Option<Solution>,
    /// Fitness of `best_solution` (`f64::INFINITY` when there is none).
    pub best_fitness: f64,
    /// Generations executed.
    pub generations: usize,
    /// One report per generation.
    pub history: Vec<GenerationReport>,
    /// Wall-clock run time.
    pub elapsed: Duration,
}

/// Best solution seen across a run.
///
/// Starts empty at `f64::INFINITY` and only accepts a strictly lower
/// fitness, so NaN and infinite offers never replace it.
#[derive(Debug, Clone)]
struct BestTracker {
    solution: Option<Solution>,
    fitness: f64,
}

impl BestTracker {
    fn new() -> Self {
        Self {
            solution: None,
            fitness: f64::INFINITY,
        }
    }

    /// Records `solution` if it beats the current best. Returns whether it did.
    fn offer(&mut self, solution: &Solution, fitness: f64) -> bool {
        if fitness < self.fitness {
            self.solution = Some(solution.clone());
            self.fitness = fitness;
            true
        } else {
            false
        }
    }
}

/// Runs the assignment GA over a fixed problem.
///
/// # Example
/// ```
/// use u_assign::ga::{AssignmentProblem, GaConfig, Optimizer};
/// use u_assign::models::{WorkItem, Worker};
///
/// let workers = vec![
///     Worker::new(1).with_specialty(1).with_capacity(10.0),
///     Worker::new(2).with_specialty(1).with_capacity(10.0),
/// ];
/// let items = vec![
///     WorkItem::new(0, 1).with_weight(4.0),
///     WorkItem::new(1, 1).with_weight(4.0),
/// ];
/// let problem = AssignmentProblem::new(workers, items).unwrap();
/// let config = GaConfig::default().with_generations(30).with_population_size(10).with_seed(1);
///
/// let result = Optimizer::new(problem, config).unwrap().run().unwrap();
/// assert_eq!(result.best_fitness, 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Optimizer {
    problem: AssignmentProblem,
    config: GaConfig,
    operators: GeneticOperators,
}

impl Optimizer {
    /// Creates an optimizer.
    ///
    /// # Errors
    /// [`AssignError::Configuration`](crate::error::AssignError::Configuration)
    /// if `config` fails [`GaConfig::validate`].
    pub fn new(problem: AssignmentProblem, config: GaConfig) -> AssignResult<Self> {
        config.validate()?;
        let operators = config.operators()?;
        Ok(Self {
            problem,
            config,
            operators,
        })
    }

    /// The problem being optimized.
    pub fn problem(&self) -> &AssignmentProblem {
        &self.problem
    }

    /// The run configuration.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Runs the GA without progress callbacks.
    pub fn run(&self) -> AssignResult<GaResult> {
        self.run_with_observer(|_| {})
    }

    /// Runs the GA, calling `observer` every `report_interval` generations.
    ///
    /// # Errors
    /// Propagates fitness evaluation errors, e.g.
    /// [`AssignError::NoWorkers`](crate::error::AssignError::NoWorkers).
    #[instrument(
        level = "info",
        skip_all,
        fields(
            generations = self.config.generations,
            population_size = self.config.population_size,
            workers = self.problem.workers().len(),
            work_items = self.problem.work_items().len()
        )
    )]
    pub fn run_with_observer<F>(&self, mut observer: F) -> AssignResult<GaResult>
    where
        F: FnMut(&GenerationReport),
    {
        let start = Instant::now();
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut population: Vec<Solution> = (0..self.config.population_size)
            .map(|_| self.problem.random_solution(&mut rng))
            .collect();

        let mut best = BestTracker::new();
        let mut history = Vec::with_capacity(self.config.generations);

        for generation in 0..self.config.generations {
            let scores = self.score(&population)?;
            let population_mean = scores.iter().sum::<f64>() / scores.len() as f64;

            let mut ranked: Vec<(Solution, f64)> = population.into_iter().zip(scores).collect();
            ranked.sort_by(|a, b| a.1.total_cmp(&b.1));

            let population_best = ranked.first().map_or(f64::INFINITY, |(_, f)| *f);
            if let Some((leader, fitness)) = ranked.first() {
                if best.offer(leader, *fitness) {
                    tracing::debug!(generation, fitness = *fitness, "New best solution");
                }
            }

            let report = GenerationReport {
                generation,
                best_fitness: best.fitness,
                population_best,
                population_mean,
            };
            tracing::debug!(
                generation,
                best_fitness = report.best_fitness,
                population_best,
                population_mean,
                "Generation scored"
            );
            if self.config.report_interval > 0 && generation % self.config.report_interval == 0 {
                tracing::info!(generation, best_fitness = report.best_fitness, "Progress");
                observer(&report);
            }
            history.push(report);

            ranked.truncate(self.config.survivor_count());
            let survivors: Vec<Solution> = ranked.into_iter().map(|(s, _)| s).collect();
            population = self.next_generation(survivors, &mut rng)?;
        }

        let elapsed = start.elapsed();
        let BestTracker {
            solution: best_solution,
            fitness: best_fitness,
        } = best;
        tracing::info!(
            best_fitness,
            elapsed_ms = elapsed.as_millis() as u64,
            "Optimization finished"
        );

        Ok(GaResult {
            best_solution,
            best_fitness,
            generations: self.config.generations,
            history,
            elapsed,
        })
    }

    /// Scores every member. Each evaluation builds its own load ledger, so
    /// members are scored independently.
    fn score(&self, population: &[Solution]) -> AssignResult<Vec<f64>> {
        if self.config.parallel {
            population
                .par_iter()
                .map(|s| self.problem.evaluate(s))
                .collect()
        } else {
            population.iter().map(|s| self.problem.evaluate(s)).collect()
        }
    }

    /// Survivors verbatim, then children until the population is full.
    fn next_generation<R: Rng + ?Sized>(
        &self,
        survivors: Vec<Solution>,
        rng: &mut R,
    ) -> AssignResult<Vec<Solution>> {
        let mut next = Vec::with_capacity(self.config.population_size);
        next.extend(survivors.iter().cloned());

        while next.len() < self.config.population_size {
            let (Some(parent_a), Some(parent_b)) = (survivors.choose(rng), survivors.choose(rng))
            else {
                break;
            };
            let mut child = self
                .operators
                .crossover(&self.problem, parent_a, parent_b, rng)?;
            self.operators.mutate(&self.problem, &mut child, rng)?;
            next.push(child);
        }
        Ok(next)
    }
}
