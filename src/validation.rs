//! Input validation for assignment problems.
//!
//! Checks structural integrity of workers and work items before
//! optimization. Detects:
//! - Duplicate IDs
//! - Non-positive or non-finite item weights
//! - Urgency and seniority levels outside 1..=5
//! - Negative or non-finite capacities and durations

use crate::models::{WorkItem, Worker};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// Valid range for urgency and seniority levels.
pub const LEVEL_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A work item weight is not a positive finite number.
    InvalidWeight,
    /// An urgency or seniority level is outside 1..=5.
    LevelOutOfRange,
    /// A worker capacity is negative or not finite.
    InvalidCapacity,
    /// A work item duration is negative or not finite.
    InvalidDuration,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for an assignment problem.
///
/// Checks:
/// 1. No duplicate worker IDs
/// 2. No duplicate work item IDs
/// 3. Worker capacity is finite and non-negative
/// 4. Worker seniority within 1..=5
/// 5. Item weight is finite and positive
/// 6. Item urgency within 1..=5
/// 7. Item duration is finite and non-negative
/// 8. The summed weight of all items is finite, so no worker load can
///    overflow
///
/// Workers without specialties and items no worker can take are allowed;
/// such items simply stay unassigned.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(workers: &[Worker], items: &[WorkItem]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut worker_ids = HashSet::new();
    for w in workers {
        if !worker_ids.insert(w.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate worker ID: {}", w.id),
            ));
        }
        if !w.capacity.is_finite() || w.capacity < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCapacity,
                format!("Worker {} has invalid capacity {}", w.id, w.capacity),
            ));
        }
        if !LEVEL_RANGE.contains(&w.seniority) {
            errors.push(ValidationError::new(
                ValidationErrorKind::LevelOutOfRange,
                format!("Worker {} has seniority {} outside 1..=5", w.id, w.seniority),
            ));
        }
    }

    let mut item_ids = HashSet::new();
    for item in items {
        if !item_ids.insert(item.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate work item ID: {}", item.id),
            ));
        }
        if !item.weight.is_finite() || item.weight <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidWeight,
                format!("Work item {} has invalid weight {}", item.id, item.weight),
            ));
        }
        if !LEVEL_RANGE.contains(&item.urgency) {
            errors.push(ValidationError::new(
                ValidationErrorKind::LevelOutOfRange,
                format!(
                    "Work item {} has urgency {} outside 1..=5",
                    item.id, item.urgency
                ),
            ));
        }
        if !item.estimated_duration.is_finite() || item.estimated_duration < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDuration,
                format!(
                    "Work item {} has invalid duration {}",
                    item.id, item.estimated_duration
                ),
            ));
        }
    }

    let total_weight: f64 = items
        .iter()
        .map(|item| item.weight)
        .filter(|w| w.is_finite())
        .sum();
    if !total_weight.is_finite() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidWeight,
            "Total work item weight overflows",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_workers() -> Vec<Worker> {
        vec![
            Worker::new(1).with_specialties([1, 2]).with_capacity(44.0),
            Worker::new(2).with_specialties([2, 3]).with_capacity(40.0),
        ]
    }

    fn sample_items() -> Vec<WorkItem> {
        vec![
            WorkItem::new(0, 1).with_weight(5.0).with_urgency(3),
            WorkItem::new(1, 3).with_weight(2.5).with_urgency(5),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&sample_workers(), &sample_items()).is_ok());
    }

    #[test]
    fn test_empty_input_is_valid() {
        assert!(validate_input(&[], &[]).is_ok());
    }

    #[test]
    fn test_duplicate_worker_id() {
        let workers = vec![Worker::new(1), Worker::new(1)];
        let errors = validate_input(&workers, &sample_items()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("worker")));
    }

    #[test]
    fn test_duplicate_item_id() {
        let items = vec![WorkItem::new(4, 1), WorkItem::new(4, 2)];
        let errors = validate_input(&sample_workers(), &items).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("item")));
    }

    #[test]
    fn test_invalid_weight() {
        let items = vec![
            WorkItem::new(0, 1).with_weight(0.0),
            WorkItem::new(1, 1).with_weight(f64::NAN),
        ];
        let errors = validate_input(&sample_workers(), &items).unwrap_err();
        let count = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::InvalidWeight)
            .count();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_total_weight_overflow() {
        let items = vec![
            WorkItem::new(0, 1).with_weight(f64::MAX),
            WorkItem::new(1, 1).with_weight(f64::MAX),
        ];
        let errors = validate_input(&sample_workers(), &items).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidWeight);
        assert!(errors[0].message.contains("Total"));
    }

    #[test]
    fn test_levels_out_of_range() {
        let workers = vec![Worker::new(1).with_seniority(0)];
        let items = vec![WorkItem::new(0, 1).with_urgency(6)];
        let errors = validate_input(&workers, &items).unwrap_err();
        let count = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::LevelOutOfRange)
            .count();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_invalid_capacity_and_duration() {
        let workers = vec![Worker::new(1).with_capacity(-1.0)];
        let items = vec![WorkItem::new(0, 1).with_estimated_duration(f64::INFINITY)];
        let errors = validate_input(&workers, &items).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidCapacity));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidDuration));
    }

    #[test]
    fn test_multiple_errors() {
        let workers = vec![Worker::new(1), Worker::new(1).with_capacity(f64::NAN)];
        let items = vec![WorkItem::new(0, 1).with_weight(-2.0)];
        let errors = validate_input(&workers, &items).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
