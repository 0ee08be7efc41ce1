//! Assignment quality metrics (KPIs).
//!
//! Summarizes how a solution distributes load across workers.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Load | Sum of item weights per worker |
//! | Utilization | load / capacity per worker |
//! | Spread | max load - min load, idle workers included |
//! | Total Overload | Sum of max(0, load - capacity) |
//! | Coverage | Assigned items / all items |

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::error::AssignResult;
use crate::ga::AssignmentProblem;
use crate::models::Solution;

/// Load figures for a single worker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkerLoad {
    /// Number of assigned items.
    pub item_count: usize,
    /// Sum of assigned item weights.
    pub load: f64,
    /// `load / capacity`. `None` for zero-capacity workers.
    pub utilization: Option<f64>,
    /// Load above capacity (0.0 when within capacity).
    pub overload: f64,
}

/// Solution performance indicators.
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentKpi {
    /// Per-worker figures, keyed by worker id.
    pub by_worker: BTreeMap<u32, WorkerLoad>,
    /// Highest worker load.
    pub max_load: f64,
    /// Lowest worker load.
    pub min_load: f64,
    /// `max_load - min_load`.
    pub spread: f64,
    /// Sum of per-worker overloads.
    pub total_overload: f64,
    /// Workers above capacity, ascending id.
    pub overloaded_workers: Vec<u32>,
    /// Number of assigned items.
    pub assigned_count: usize,
    /// Items not held by any worker, in input order.
    pub unassigned_items: Vec<u32>,
}

impl AssignmentKpi {
    /// Computes KPIs for a solution.
    ///
    /// # Errors
    /// Same as [`AssignmentProblem::evaluate`]: unknown ids or no workers.
    pub fn calculate(problem: &AssignmentProblem, solution: &Solution) -> AssignResult<Self> {
        let ledger = problem.load_ledger(solution)?;
        let spread = ledger.spread()?;

        let mut by_worker = BTreeMap::new();
        let mut total_overload = 0.0;
        let mut overloaded_workers = Vec::new();

        for (worker_id, load) in ledger.iter() {
            let worker = problem.worker(worker_id)?;
            let overload = ledger.overload_of(worker);
            if overload > 0.0 {
                total_overload += overload;
                overloaded_workers.push(worker.id);
            }
            let utilization = (worker.capacity > 0.0).then(|| load / worker.capacity);
            by_worker.insert(
                worker.id,
                WorkerLoad {
                    item_count: solution.items_of(worker.id).len(),
                    load,
                    utilization,
                    overload,
                },
            );
        }

        let assigned: HashSet<u32> = solution.assigned_items().into_iter().collect();
        let unassigned_items = problem
            .work_items()
            .iter()
            .map(|item| item.id)
            .filter(|id| !assigned.contains(id))
            .collect();

        Ok(Self {
            by_worker,
            max_load: ledger.max_load().unwrap_or(0.0),
            min_load: ledger.min_load().unwrap_or(0.0),
            spread,
            total_overload,
            overloaded_workers,
            assigned_count: solution.assigned_count(),
            unassigned_items,
        })
    }

    /// Whether every worker is within capacity.
    pub fn is_feasible(&self) -> bool {
        self.overloaded_workers.is_empty()
    }

    /// Fraction of items assigned (1.0 when there are no items).
    pub fn coverage(&self) -> f64 {
        let total = self.assigned_count + self.unassigned_items.len();
        if total == 0 {
            1.0
        } else {
            self.assigned_count as f64 / total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AssignError;
    use crate::models::{WorkItem, Worker};

    fn sample_problem() -> AssignmentProblem {
        let workers = vec![
            Worker::new(1).with_specialty(1).with_capacity(10.0),
            Worker::new(2).with_specialty(1).with_capacity(4.0),
            Worker::new(3).with_specialty(1).with_capacity(0.0),
        ];
        let items = vec![
            WorkItem::new(0, 1).with_weight(5.0),
            WorkItem::new(1, 1).with_weight(6.0),
            WorkItem::new(2, 9).with_weight(1.0),
        ];
        AssignmentProblem::new(workers, items).unwrap()
    }

    #[test]
    fn test_kpi_basic() {
        let problem = sample_problem();
        let mut solution = Solution::new();
        solution.assign(1, 0);
        solution.assign(2, 1);

        let kpi = AssignmentKpi::calculate(&problem, &solution).unwrap();
        assert!((kpi.max_load - 6.0).abs() < 1e-10);
        assert!((kpi.min_load - 0.0).abs() < 1e-10);
        assert!((kpi.spread - 6.0).abs() < 1e-10);
        assert!((kpi.total_overload - 2.0).abs() < 1e-10);
        assert_eq!(kpi.overloaded_workers, vec![2]);
        assert!(!kpi.is_feasible());

        let w1 = &kpi.by_worker[&1];
        assert_eq!(w1.item_count, 1);
        assert!((w1.utilization.unwrap() - 0.5).abs() < 1e-10);
        assert_eq!(kpi.by_worker[&3].utilization, None);
    }

    #[test]
    fn test_kpi_matches_fitness() {
        let problem = sample_problem();
        let mut solution = Solution::new();
        solution.assign(1, 0);
        solution.assign(2, 1);

        let kpi = AssignmentKpi::calculate(&problem, &solution).unwrap();
        let fitness = problem.evaluate(&solution).unwrap();
        let recomputed = kpi.spread + kpi.total_overload * crate::ga::CAPACITY_PENALTY;
        assert!((fitness - recomputed).abs() < 1e-9);
    }

    #[test]
    fn test_kpi_coverage() {
        let problem = sample_problem();
        let mut solution = Solution::new();
        solution.assign(1, 0);

        let kpi = AssignmentKpi::calculate(&problem, &solution).unwrap();
        assert_eq!(kpi.assigned_count, 1);
        assert_eq!(kpi.unassigned_items, vec![1, 2]);
        assert!((kpi.coverage() - 1.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_empty_solution() {
        let problem = sample_problem();
        let kpi = AssignmentKpi::calculate(&problem, &Solution::new()).unwrap();
        assert_eq!(kpi.spread, 0.0);
        assert!(kpi.is_feasible());
        assert_eq!(kpi.assigned_count, 0);
    }

    #[test]
    fn test_kpi_no_workers() {
        let problem = AssignmentProblem::new(vec![], vec![]).unwrap();
        let result = AssignmentKpi::calculate(&problem, &Solution::new());
        assert!(matches!(result, Err(AssignError::NoWorkers)));
    }
}
