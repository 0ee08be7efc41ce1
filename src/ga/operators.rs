//! Variation operators for assignment solutions.
//!
//! # Usage
//!
//! ```
//! use u_assign::ga::operators::GeneticOperators;
//!
//! let ops = GeneticOperators::new(0.8, 0.1).unwrap();
//! assert_eq!(ops.crossover_rate(), 0.8);
//! assert!(GeneticOperators::new(1.5, 0.1).is_err());
//! ```

use std::collections::BTreeSet;

use rand::prelude::IndexedRandom;
use rand::Rng;

use super::problem::AssignmentProblem;
use crate::error::{AssignError, AssignResult};
use crate::models::Solution;

/// Crossover and mutation with their application probabilities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneticOperators {
    crossover_rate: f64,
    mutation_rate: f64,
}

impl Default for GeneticOperators {
    fn default() -> Self {
        Self {
            crossover_rate: 0.8,
            mutation_rate: 0.1,
        }
    }
}

impl GeneticOperators {
    /// Creates operators with the given rates.
    ///
    /// # Errors
    /// [`AssignError::Configuration`] if either rate is outside `[0, 1]`.
    pub fn new(crossover_rate: f64, mutation_rate: f64) -> AssignResult<Self> {
        check_rate("crossover_rate", crossover_rate)?;
        check_rate("mutation_rate", mutation_rate)?;
        Ok(Self {
            crossover_rate,
            mutation_rate,
        })
    }

    /// Probability that crossover recombines instead of copying parent A.
    pub fn crossover_rate(&self) -> f64 {
        self.crossover_rate
    }

    /// Probability that mutation relocates an item.
    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// Produces one child from two parents.
    ///
    /// With probability `1 - crossover_rate` the child is a copy of
    /// `parent_a`. Otherwise every item assigned in either parent is placed
    /// afresh on a uniformly chosen compatible worker: the child inherits
    /// which items are covered, not who holds them.
    pub fn crossover<R: Rng + ?Sized>(
        &self,
        problem: &AssignmentProblem,
        parent_a: &Solution,
        parent_b: &Solution,
        rng: &mut R,
    ) -> AssignResult<Solution> {
        if !rng.random_bool(self.crossover_rate) {
            return Ok(parent_a.clone());
        }

        let covered: BTreeSet<u32> = parent_a
            .assigned_items()
            .into_iter()
            .chain(parent_b.assigned_items())
            .collect();

        let mut child = Solution::new();
        for item_id in covered {
            problem.place_randomly(&mut child, item_id, rng)?;
        }
        Ok(child)
    }

    /// Relocates one assigned item, in place.
    ///
    /// With probability `1 - mutation_rate`, or when nothing is assigned,
    /// the solution is left untouched. Otherwise one assigned item is picked
    /// uniformly, removed from its worker and handed to a uniformly chosen
    /// compatible worker (possibly the same one).
    pub fn mutate<R: Rng + ?Sized>(
        &self,
        problem: &AssignmentProblem,
        solution: &mut Solution,
        rng: &mut R,
    ) -> AssignResult<()> {
        if !rng.random_bool(self.mutation_rate) {
            return Ok(());
        }

        let assigned = solution.assigned_items();
        let Some(&item_id) = assigned.choose(rng) else {
            return Ok(());
        };

        solution.remove_item(item_id);
        problem.place_randomly(solution, item_id, rng)?;
        Ok(())
    }
}

pub(crate) fn check_rate(name: &str, rate: f64) -> AssignResult<()> {
    if (0.0..=1.0).contains(&rate) {
        Ok(())
    } else {
        Err(AssignError::Configuration(format!(
            "{name} must be within [0, 1], got {rate}"
        )))
    }
}
