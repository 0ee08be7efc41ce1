//! Synthetic input data for demonstrations and benchmarks.
//!
//! The optimizer does not depend on this module; it mirrors the data a
//! back-office deployment would load from its own systems.

use rand::Rng;

use crate::models::{WorkItem, Worker};

/// Number of distinct categories produced by [`random_work_items`].
pub const CATEGORY_COUNT: u32 = 5;

/// Weight heuristic: urgent, quick items weigh the most.
///
/// `weight = urgency × 10 / estimated_duration`
pub fn derived_weight(urgency: u8, estimated_duration: f64) -> f64 {
    f64::from(urgency) * 10.0 / estimated_duration
}

/// Nine workers covering categories 1..=5, two specialties each.
pub fn reference_workers() -> Vec<Worker> {
    let specs: [(u32, [u32; 2], f64, u8); 9] = [
        (1, [1, 2], 44.0, 3),
        (2, [2, 3], 40.0, 4),
        (3, [3, 4], 36.0, 2),
        (4, [4, 5], 44.0, 5),
        (5, [1, 5], 40.0, 3),
        (6, [1, 3], 44.0, 4),
        (7, [2, 4], 36.0, 3),
        (8, [3, 5], 40.0, 2),
        (9, [1, 4], 44.0, 5),
    ];
    specs
        .into_iter()
        .map(|(id, specialties, capacity, seniority)| {
            Worker::new(id)
                .with_name(format!("Worker {id}"))
                .with_specialties(specialties)
                .with_capacity(capacity)
                .with_seniority(seniority)
        })
        .collect()
}

/// Random work items with ids `0..count`.
///
/// Category and urgency are uniform in 1..=5, duration uniform in
/// `[0.5, 5.0)`, and weight follows [`derived_weight`].
pub fn random_work_items<R: Rng + ?Sized>(count: u32, rng: &mut R) -> Vec<WorkItem> {
    (0..count)
        .map(|id| {
            let category = rng.random_range(1..=CATEGORY_COUNT);
            let urgency = rng.random_range(1..=5u8);
            let duration = rng.random_range(0.5..5.0);
            WorkItem::new(id, category)
                .with_name(format!("Item {id}"))
                .with_urgency(urgency)
                .with_estimated_duration(duration)
                .with_weight(derived_weight(urgency, duration))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_input;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_derived_weight() {
        assert!((derived_weight(5, 2.0) - 25.0).abs() < 1e-10);
        assert!((derived_weight(1, 0.5) - 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_reference_workers_cover_every_category() {
        let workers = reference_workers();
        assert_eq!(workers.len(), 9);
        for category in 1..=CATEGORY_COUNT {
            let count = workers.iter().filter(|w| w.can_handle(category)).count();
            assert!(count >= 3, "category {category} covered by {count} workers");
        }
    }

    #[test]
    fn test_random_work_items_are_valid() {
        let mut rng = SmallRng::seed_from_u64(42);
        let items = random_work_items(100, &mut rng);
        assert_eq!(items.len(), 100);
        assert!(items.iter().enumerate().all(|(i, item)| item.id == i as u32));
        assert!(items
            .iter()
            .all(|item| (1..=CATEGORY_COUNT).contains(&item.category)));
        assert!(validate_input(&reference_workers(), &items).is_ok());
    }
}
