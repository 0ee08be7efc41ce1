//! Per-evaluation worker load accumulator.

use std::collections::BTreeMap;

use super::Worker;
use crate::error::{AssignError, AssignResult};

/// Accumulated load per worker for a single solution.
///
/// A fresh ledger starts every known worker at zero. Ledgers are never
/// shared between evaluations, so scoring distinct solutions can run
/// concurrently.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadLedger {
    loads: BTreeMap<u32, f64>,
}

impl LoadLedger {
    /// Creates a ledger with every worker at zero load.
    pub fn for_workers(workers: &[Worker]) -> Self {
        Self {
            loads: workers.iter().map(|w| (w.id, 0.0)).collect(),
        }
    }

    /// Adds `weight` to a worker's load.
    pub fn add(&mut self, worker_id: u32, weight: f64) -> AssignResult<()> {
        let load = self
            .loads
            .get_mut(&worker_id)
            .ok_or(AssignError::UnknownWorker(worker_id))?;
        *load += weight;
        Ok(())
    }

    /// Current load of a worker (`None` if unknown).
    pub fn load_of(&self, worker_id: u32) -> Option<f64> {
        self.loads.get(&worker_id).copied()
    }

    /// Highest load across all workers, including idle ones.
    pub fn max_load(&self) -> Option<f64> {
        self.loads.values().copied().reduce(f64::max)
    }

    /// Lowest load across all workers, including idle ones.
    pub fn min_load(&self) -> Option<f64> {
        self.loads.values().copied().reduce(f64::min)
    }

    /// `max_load - min_load`.
    ///
    /// # Errors
    /// [`AssignError::NoWorkers`] if the ledger tracks no workers.
    pub fn spread(&self) -> AssignResult<f64> {
        match (self.max_load(), self.min_load()) {
            (Some(max), Some(min)) => Ok(max - min),
            _ => Err(AssignError::NoWorkers),
        }
    }

    /// Load carried beyond the worker's capacity (0.0 when within capacity).
    pub fn overload_of(&self, worker: &Worker) -> f64 {
        let load = self.load_of(worker.id).unwrap_or(0.0);
        (load - worker.capacity).max(0.0)
    }

    /// Iterates `(worker_id, load)` in ascending worker id order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.loads.iter().map(|(&id, &load)| (id, load))
    }

    /// Number of tracked workers.
    pub fn len(&self) -> usize {
        self.loads.len()
    }

    /// Whether the ledger tracks no workers.
    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workers() -> Vec<Worker> {
        vec![
            Worker::new(1).with_capacity(10.0),
            Worker::new(2).with_capacity(4.0),
            Worker::new(3).with_capacity(10.0),
        ]
    }

    #[test]
    fn test_fresh_ledger_is_zeroed() {
        let ledger = LoadLedger::for_workers(&workers());
        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.load_of(2), Some(0.0));
        assert_eq!(ledger.spread(), Ok(0.0));
    }

    #[test]
    fn test_spread_includes_idle_workers() {
        let mut ledger = LoadLedger::for_workers(&workers());
        ledger.add(1, 5.0).unwrap();
        ledger.add(2, 6.0).unwrap();

        assert_eq!(ledger.max_load(), Some(6.0));
        assert_eq!(ledger.min_load(), Some(0.0));
        assert!((ledger.spread().unwrap() - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_overload() {
        let ws = workers();
        let mut ledger = LoadLedger::for_workers(&ws);
        ledger.add(2, 6.0).unwrap();
        assert!((ledger.overload_of(&ws[1]) - 2.0).abs() < 1e-10);
        assert_eq!(ledger.overload_of(&ws[0]), 0.0);
    }

    #[test]
    fn test_iter_in_worker_order() {
        let mut ledger = LoadLedger::for_workers(&workers());
        ledger.add(3, 2.5).unwrap();
        ledger.add(1, 1.0).unwrap();
        let loads: Vec<(u32, f64)> = ledger.iter().collect();
        assert_eq!(loads, vec![(1, 1.0), (2, 0.0), (3, 2.5)]);
    }

    #[test]
    fn test_unknown_worker() {
        let mut ledger = LoadLedger::for_workers(&workers());
        assert_eq!(ledger.add(99, 1.0), Err(AssignError::UnknownWorker(99)));
    }

    #[test]
    fn test_empty_ledger_spread_fails() {
        let ledger = LoadLedger::for_workers(&[]);
        assert!(ledger.is_empty());
        assert_eq!(ledger.spread(), Err(AssignError::NoWorkers));
    }
}
