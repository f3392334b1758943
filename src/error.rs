//! Error types for the rostering engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during schedule generation.

use thiserror::Error;

/// The main error type for the rostering engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use roster_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The requested planning horizon could not be constructed.
    #[error("Invalid planning horizon: {message}")]
    InvalidHorizon {
        /// A description of what made the horizon invalid.
        message: String,
    },

    /// No active staff remain after normalization.
    #[error("Roster is empty: no active staff to schedule")]
    EmptyRoster,

    /// The active roster cannot meet a single day's required headcount.
    ///
    /// Detected before any solve is attempted, so an obviously empty
    /// problem never consumes solver time.
    #[error(
        "Roster too small: day {day} requires {required} staff but only {available} are active"
    )]
    RosterTooSmall {
        /// The 1-based day index with the highest unmet requirement.
        day: u32,
        /// The total headcount required on that day.
        required: u32,
        /// The number of active staff available.
        available: u32,
    },

    /// The solver proved that no assignment satisfies all hard constraints.
    #[error("No feasible schedule exists: {hint}")]
    Infeasible {
        /// Advisory pointer at the policy levers most likely over-constrained.
        hint: String,
    },

    /// The solve budget elapsed without any feasible assignment being found.
    ///
    /// Reported like infeasibility, though a longer budget might have
    /// found a solution.
    #[error("No schedule found within the {budget_secs}s solve budget")]
    SolveTimeout {
        /// The configured wall-clock budget in seconds.
        budget_secs: u64,
    },

    /// The solving backend failed for a reason other than infeasibility.
    #[error("Solver failure: {message}")]
    SolverFailure {
        /// A description of the backend failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
