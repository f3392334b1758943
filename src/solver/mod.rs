//! Constraint model construction and the MILP solve bridge.
//!
//! [`model::ShiftModel`] holds the variables; the sibling modules each
//! emit one constraint group; [`engine`] assembles everything, runs the
//! backing solver under the wall-clock budget, and reduces the answer
//! to the plain booleans of [`engine::SolvedValues`].

pub mod coverage;
pub mod engine;
pub mod equity;
pub mod exclusion;
pub mod model;
pub mod objective;
pub mod rest;
pub mod weekend;

pub use engine::{SolvedValues, build_model, check_viability, solve_schedule};
pub use model::{AssignKey, ShiftModel};
