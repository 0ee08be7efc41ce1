//! Work item model.
//!
//! A work item is a unit of work that must be handed to exactly one
//! worker whose specialties cover the item's category.

use serde::{Deserialize, Serialize};

/// A weighted, prioritized unit of work.
///
/// `weight` is the load the item adds to whichever worker receives it.
/// The optimizer treats it as an opaque positive scalar; see
/// [`crate::sample::derived_weight`] for the urgency/duration heuristic
/// used by the sample data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    /// Unique work item identifier.
    pub id: u32,
    /// Human-readable name.
    pub name: String,
    /// Category matched against worker specialties.
    pub category: u32,
    /// Load contribution (positive).
    pub weight: f64,
    /// Urgency level (1 = lowest, 5 = highest).
    pub urgency: u8,
    /// Estimated effort, in the caller's time unit.
    pub estimated_duration: f64,
}

impl WorkItem {
    /// Creates a work item with unit weight, lowest urgency and unit duration.
    pub fn new(id: u32, category: u32) -> Self {
        Self {
            id,
            name: String::new(),
            category,
            weight: 1.0,
            urgency: 1,
            estimated_duration: 1.0,
        }
    }

    /// Sets the item name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the load contribution.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Sets the urgency level.
    pub fn with_urgency(mut self, urgency: u8) -> Self {
        self.urgency = urgency;
        self
    }

    /// Sets the estimated duration.
    pub fn with_estimated_duration(mut self, duration: f64) -> Self {
        self.estimated_duration = duration;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_item_builder() {
        let item = WorkItem::new(3, 2)
            .with_name("Invoice review")
            .with_weight(12.5)
            .with_urgency(4)
            .with_estimated_duration(3.2);

        assert_eq!(item.id, 3);
        assert_eq!(item.name, "Invoice review");
        assert_eq!(item.category, 2);
        assert!((item.weight - 12.5).abs() < 1e-10);
        assert_eq!(item.urgency, 4);
        assert!((item.estimated_duration - 3.2).abs() < 1e-10);
    }

    #[test]
    fn test_work_item_defaults() {
        let item = WorkItem::new(0, 1);
        assert!((item.weight - 1.0).abs() < 1e-10);
        assert_eq!(item.urgency, 1);
        assert!(item.name.is_empty());
    }
}
