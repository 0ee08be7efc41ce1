//! Assignment problem definition.
//!
//! Holds the domain data for one optimization run and provides the two
//! problem-specific pieces of the GA: fitness evaluation and random
//! construction of an initial solution.

use std::collections::HashMap;

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::error::{AssignError, AssignResult};
use crate::models::{LoadLedger, Solution, WorkItem, Worker};
use crate::validation::validate_input;

/// Cost added per unit of load a worker carries beyond its capacity.
///
/// Large enough that any capacity violation outweighs pure imbalance, so
/// feasible solutions rank ahead of infeasible ones without rejecting them.
pub const CAPACITY_PENALTY: f64 = 1000.0;

/// Workers, work items and the lookup tables derived from them.
///
/// # Example
/// ```
/// use u_assign::ga::AssignmentProblem;
/// use u_assign::models::{Solution, WorkItem, Worker};
///
/// let workers = vec![
///     Worker::new(1).with_specialty(1).with_capacity(10.0),
///     Worker::new(2).with_specialty(2).with_capacity(10.0),
/// ];
/// let items = vec![
///     WorkItem::new(0, 1).with_weight(5.0),
///     WorkItem::new(1, 2).with_weight(5.0),
/// ];
/// let problem = AssignmentProblem::new(workers, items).unwrap();
///
/// let mut solution = Solution::new();
/// solution.assign(1, 0);
/// solution.assign(2, 1);
/// assert_eq!(problem.evaluate(&solution).unwrap(), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct AssignmentProblem {
    workers: Vec<Worker>,
    items: Vec<WorkItem>,
    item_index: HashMap<u32, usize>,
    worker_index: HashMap<u32, usize>,
    /// category → compatible worker ids, in worker input order.
    compatible: HashMap<u32, Vec<u32>>,
}

impl AssignmentProblem {
    /// Builds a problem from domain data.
    ///
    /// # Errors
    /// [`AssignError::InvalidInput`] if the data fails
    /// [`validate_input`](crate::validation::validate_input).
    pub fn new(workers: Vec<Worker>, items: Vec<WorkItem>) -> AssignResult<Self> {
        validate_input(&workers, &items).map_err(AssignError::InvalidInput)?;

        let item_index = items
            .iter()
            .enumerate()
            .map(|(idx, item)| (item.id, idx))
            .collect();
        let worker_index = workers
            .iter()
            .enumerate()
            .map(|(idx, w)| (w.id, idx))
            .collect();

        let mut compatible: HashMap<u32, Vec<u32>> = HashMap::new();
        for item in &items {
            compatible.entry(item.category).or_insert_with(|| {
                workers
                    .iter()
                    .filter(|w| w.can_handle(item.category))
                    .map(|w| w.id)
                    .collect()
            });
        }

        Ok(Self {
            workers,
            items,
            item_index,
            worker_index,
            compatible,
        })
    }

    /// All workers, in input order.
    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    /// All work items, in input order.
    pub fn work_items(&self) -> &[WorkItem] {
        &self.items
    }

    /// Looks up a work item by id.
    pub fn work_item(&self, id: u32) -> AssignResult<&WorkItem> {
        self.item_index
            .get(&id)
            .map(|&idx| &self.items[idx])
            .ok_or(AssignError::UnknownWorkItem(id))
    }

    /// Looks up a worker by id.
    pub fn worker(&self, id: u32) -> AssignResult<&Worker> {
        self.worker_index
            .get(&id)
            .map(|&idx| &self.workers[idx])
            .ok_or(AssignError::UnknownWorker(id))
    }

    /// Ids of the workers whose specialties include `category`.
    pub fn compatible_workers(&self, category: u32) -> &[u32] {
        self.compatible
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Computes per-worker load for a solution into a fresh ledger.
    pub fn load_ledger(&self, solution: &Solution) -> AssignResult<LoadLedger> {
        let mut ledger = LoadLedger::for_workers(&self.workers);
        for (worker_id, item_ids) in solution.iter() {
            self.worker(worker_id)?;
            for &item_id in item_ids {
                ledger.add(worker_id, self.work_item(item_id)?.weight)?;
            }
        }
        Ok(ledger)
    }

    /// Scores a solution. Lower is better; 0.0 is perfectly balanced and
    /// within every capacity.
    ///
    /// `cost = (max_load - min_load) + Σ max(0, load - capacity) × CAPACITY_PENALTY`,
    /// with max/min taken over all workers, idle ones included.
    ///
    /// # Errors
    /// - [`AssignError::NoWorkers`] if the problem has no workers.
    /// - [`AssignError::UnknownWorker`] / [`AssignError::UnknownWorkItem`]
    ///   if the solution references ids outside the problem.
    /// - [`AssignError::Numerical`] if a load or the cost overflows.
    pub fn evaluate(&self, solution: &Solution) -> AssignResult<f64> {
        let ledger = self.load_ledger(solution)?;
        let spread = ledger.spread()?;
        let penalty: f64 = self
            .workers
            .iter()
            .map(|w| ledger.overload_of(w) * CAPACITY_PENALTY)
            .sum();
        let cost = spread + penalty;
        if !cost.is_finite() {
            return Err(AssignError::Numerical(format!(
                "cost is {cost} (spread {spread}, penalty {penalty})"
            )));
        }
        Ok(cost)
    }

    /// Builds a random solution.
    ///
    /// Items are visited by urgency, most urgent first (stable for ties),
    /// and each goes to a uniformly chosen compatible worker. Items with no
    /// compatible worker stay unassigned.
    pub fn random_solution<R: Rng + ?Sized>(&self, rng: &mut R) -> Solution {
        let mut order: Vec<&WorkItem> = self.items.iter().collect();
        order.sort_by(|a, b| b.urgency.cmp(&a.urgency));

        let mut solution = Solution::new();
        for item in order {
            if let Some(&worker_id) = self.compatible_workers(item.category).choose(rng) {
                solution.assign(worker_id, item.id);
            }
        }
        solution
    }

    /// Assigns `item_id` to a uniformly chosen compatible worker.
    ///
    /// Returns `false` (leaving the item unassigned) if no worker can take it.
    pub(crate) fn place_randomly<R: Rng + ?Sized>(
        &self,
        solution: &mut Solution,
        item_id: u32,
        rng: &mut R,
    ) -> AssignResult<bool> {
        let category = self.work_item(item_id)?.category;
        match self.compatible_workers(category).choose(rng) {
            Some(&worker_id) => {
                solution.assign(worker_id, item_id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Checks that a solution only uses known ids, assigns each item at
    /// most once, and respects specialty compatibility.
    pub fn is_valid(&self, solution: &Solution) -> bool {
        if solution.has_duplicate_assignments() {
            return false;
        }
        solution.iter().all(|(worker_id, item_ids)| {
            let Ok(worker) = self.worker(worker_id) else {
                return false;
            };
            item_ids.iter().all(|&item_id| {
                self.work_item(item_id)
                    .map(|item| worker.can_handle(item.category))
                    .unwrap_or(false)
            })
        })
    }
}
