//! Solution interpretation: solved booleans to the reporting surface.
//!
//! The interpreter never touches the solver. It reads a
//! [`crate::solver::SolvedValues`] and produces the output grid, the
//! assignment list, the denied-request list, workload statistics, and the
//! reinforcement availability pool.

pub mod availability;
pub mod grid;
pub mod stats;

pub use availability::build_availability;
pub use grid::{build_grid, collect_assignments, collect_denied};
pub use stats::build_stats;
