//! Worker model.
//!
//! Workers receive work items. Each worker has a set of specialties
//! (categories it may handle), a load capacity, and a seniority level.
//!
//! Workers carry no mutable load state: the load a solution places on a
//! worker is computed into a [`LoadLedger`](super::LoadLedger) owned by
//! the evaluation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A worker that can be assigned work items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    /// Unique worker identifier.
    pub id: u32,
    /// Human-readable name.
    pub name: String,
    /// Categories this worker is able to handle.
    pub specialties: BTreeSet<u32>,
    /// Load the worker can carry before capacity penalties apply.
    pub capacity: f64,
    /// Seniority level (1 = junior, 5 = most senior).
    pub seniority: u8,
}

impl Worker {
    /// Creates a worker with no specialties, zero capacity and seniority 1.
    pub fn new(id: u32) -> Self {
        Self {
            id,
            name: String::new(),
            specialties: BTreeSet::new(),
            capacity: 0.0,
            seniority: 1,
        }
    }

    /// Sets the worker name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a specialty.
    pub fn with_specialty(mut self, category: u32) -> Self {
        self.specialties.insert(category);
        self
    }

    /// Adds several specialties.
    pub fn with_specialties(mut self, categories: impl IntoIterator<Item = u32>) -> Self {
        self.specialties.extend(categories);
        self
    }

    /// Sets the load capacity.
    pub fn with_capacity(mut self, capacity: f64) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the seniority level.
    pub fn with_seniority(mut self, seniority: u8) -> Self {
        self.seniority = seniority;
        self
    }

    /// Whether this worker may receive items of the given category.
    #[inline]
    pub fn can_handle(&self, category: u32) -> bool {
        self.specialties.contains(&category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_builder() {
        let w = Worker::new(1)
            .with_name("Ana")
            .with_specialty(1)
            .with_specialties([2, 3])
            .with_capacity(44.0)
            .with_seniority(3);

        assert_eq!(w.id, 1);
        assert_eq!(w.name, "Ana");
        assert_eq!(w.specialties.len(), 3);
        assert!((w.capacity - 44.0).abs() < 1e-10);
        assert_eq!(w.seniority, 3);
    }

    #[test]
    fn test_can_handle() {
        let w = Worker::new(1).with_specialties([1, 5]);
        assert!(w.can_handle(1));
        assert!(w.can_handle(5));
        assert!(!w.can_handle(3));
    }

    #[test]
    fn test_duplicate_specialty_collapses() {
        let w = Worker::new(1).with_specialty(2).with_specialty(2);
        assert_eq!(w.specialties.len(), 1);
    }
}
