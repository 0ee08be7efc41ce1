//! Solution (candidate assignment) model.
//!
//! A solution maps each worker to the ordered list of work items it
//! receives. Items absent from every list are unassigned.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// One proposed assignment of work items to workers.
///
/// Keyed by worker id in ascending order so that iteration, and therefore
/// every seeded operator, is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    assignments: BTreeMap<u32, Vec<u32>>,
}

impl Solution {
    /// Creates an empty solution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item to a worker's list.
    ///
    /// Does not check exclusivity; callers assign each item at most once.
    pub fn assign(&mut self, worker_id: u32, item_id: u32) {
        self.assignments.entry(worker_id).or_default().push(item_id);
    }

    /// Removes an item from the first worker (ascending id) holding it.
    ///
    /// Returns the worker it was removed from.
    pub fn remove_item(&mut self, item_id: u32) -> Option<u32> {
        for (&worker_id, items) in self.assignments.iter_mut() {
            if let Some(pos) = items.iter().position(|&id| id == item_id) {
                items.remove(pos);
                return Some(worker_id);
            }
        }
        None
    }

    /// Items assigned to a worker, in assignment order.
    pub fn items_of(&self, worker_id: u32) -> &[u32] {
        self.assignments
            .get(&worker_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The worker holding an item, if any.
    pub fn worker_of(&self, item_id: u32) -> Option<u32> {
        self.assignments
            .iter()
            .find(|(_, items)| items.contains(&item_id))
            .map(|(&worker_id, _)| worker_id)
    }

    /// Whether the item is assigned to any worker.
    pub fn contains_item(&self, item_id: u32) -> bool {
        self.worker_of(item_id).is_some()
    }

    /// All assigned item ids, flattened in worker order.
    pub fn assigned_items(&self) -> Vec<u32> {
        self.assignments.values().flatten().copied().collect()
    }

    /// Total number of assigned items.
    pub fn assigned_count(&self) -> usize {
        self.assignments.values().map(Vec::len).sum()
    }

    /// Whether any item id appears more than once.
    pub fn has_duplicate_assignments(&self) -> bool {
        let mut seen = HashSet::new();
        self.assignments
            .values()
            .flatten()
            .any(|&id| !seen.insert(id))
    }

    /// Iterates `(worker_id, items)` in ascending worker id order.
    ///
    /// Includes workers whose list became empty after a removal.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[u32])> + '_ {
        self.assignments
            .iter()
            .map(|(&worker_id, items)| (worker_id, items.as_slice()))
    }

    /// Whether no item is assigned.
    pub fn is_empty(&self) -> bool {
        self.assigned_count() == 0
    }
}
