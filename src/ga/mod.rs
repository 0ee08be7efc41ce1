//! GA-based workload balancing.
//!
//! # Encoding
//!
//! A [`Solution`](crate::models::Solution) maps each worker to the list of
//! work items it receives. Fitness is the load spread across all workers
//! plus a heavy penalty per unit of load above capacity (minimization).
//!
//! # Submodules
//!
//! - [`operators`]: crossover and mutation with their application rates
//!
//! # Loop
//!
//! Truncation selection keeps the better half of each generation
//! unchanged; children of uniformly drawn survivors fill the rest.
//! Runs stop after a fixed number of generations.

mod config;
pub mod operators;
mod problem;
mod runner;

pub use config::GaConfig;
pub use operators::GeneticOperators;
pub use problem::{AssignmentProblem, CAPACITY_PENALTY};
pub use runner::{GaResult, GenerationReport, Optimizer};
