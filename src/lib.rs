//! Shift scheduling engine for medical staffing units.
//!
//! This crate builds a constraint model from a staff roster, leave rows,
//! and a staffing policy, solves it with a MILP backend, and interprets
//! the solution into a monthly duty grid with workload statistics.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod interpret;
pub mod models;
pub mod roster;
pub mod solver;
