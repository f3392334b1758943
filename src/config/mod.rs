//! Scheduling policy configuration.
//!
//! This module contains the strongly-typed policy object and its YAML loader.

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{
    BandThresholds, CoverageTarget, DeviationBands, ObjectiveWeights, PostRestriction,
    SchedulePolicy, ShiftHours, SolverSettings,
};
