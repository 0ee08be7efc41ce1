//! Assignment domain models.
//!
//! Provides the data types for describing a workload-balancing problem
//! and its candidate solutions.
//!
//! # Domain Mappings
//!
//! | u-assign | Back office | Support desk | Maintenance |
//! |----------|-------------|--------------|-------------|
//! | WorkItem | Case file | Ticket | Work order |
//! | Worker | Clerk | Agent | Technician |
//! | category | Case type | Product area | Trade |
//! | Solution | Case allocation | Queue routing | Crew plan |

mod load;
mod solution;
mod work_item;
mod worker;

pub use load::LoadLedger;
pub use solution::Solution;
pub use work_item::WorkItem;
pub use worker::Worker;
