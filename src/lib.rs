//! Workload-balancing assignment for the U-Engine ecosystem.
//!
//! Assigns weighted, prioritized work items to specialized workers so
//! that load is spread evenly, capacities are respected and every item
//! goes to a worker whose specialties cover its category. The search is a
//! generational genetic algorithm: approximate, anytime, and tunable
//! through generation count and population size.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `WorkItem`, `Worker`, `Solution`, `LoadLedger`
//! - **`validation`**: Input integrity checks (duplicate IDs, level ranges, weights)
//! - **`ga`**: Problem definition, variation operators, run configuration, optimizer
//! - **`kpi`**: Per-worker load and feasibility metrics for a solution
//! - **`sample`**: Synthetic workers and work items for demos
//!
//! # Example
//!
//! ```
//! use u_assign::ga::{AssignmentProblem, GaConfig, Optimizer};
//! use u_assign::kpi::AssignmentKpi;
//! use u_assign::sample;
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let problem = AssignmentProblem::new(
//!     sample::reference_workers(),
//!     sample::random_work_items(30, &mut rng),
//! )
//! .unwrap();
//!
//! let config = GaConfig::default().with_generations(20).with_seed(7);
//! let optimizer = Optimizer::new(problem, config).unwrap();
//! let result = optimizer.run().unwrap();
//!
//! let best = result.best_solution.unwrap();
//! let kpi = AssignmentKpi::calculate(optimizer.problem(), &best).unwrap();
//! assert_eq!(kpi.assigned_count, 30);
//! ```

pub mod error;
pub mod ga;
pub mod kpi;
pub mod models;
pub mod sample;
pub mod validation;

pub use error::{AssignError, AssignResult};
