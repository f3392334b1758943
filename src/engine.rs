//! End-to-end schedule generation.
//!
//! Ties the pipeline together: horizon construction, roster
//! normalization, the budgeted solve, and interpretation into the
//! [`ScheduleResult`] envelope.

use std::time::Instant;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::config::SchedulePolicy;
use crate::error::EngineResult;
use crate::interpret;
use crate::models::{Horizon, HorizonSpec, LeaveRow, ScheduleResult, StaffRow};
use crate::roster::Roster;
use crate::solver;

/// Generates a complete schedule for the given inputs.
///
/// # Errors
///
/// Returns [`crate::error::EngineError`] when the horizon is invalid, the
/// roster cannot cover the policy's headcount, the model is infeasible,
/// or the solve budget elapses.
pub fn generate_schedule(
    staff_rows: &[StaffRow],
    leave_rows: &[LeaveRow],
    horizon_spec: HorizonSpec,
    policy: &SchedulePolicy,
) -> EngineResult<ScheduleResult> {
    let run_id = Uuid::new_v4();
    let horizon = Horizon::from_spec(horizon_spec)?;
    let roster = Roster::normalize(staff_rows, leave_rows, &horizon);

    let started = Instant::now();
    let solved = solver::solve_schedule(&roster, policy, &horizon)?;
    let solve_duration_ms = started.elapsed().as_millis() as u64;

    let result = ScheduleResult {
        run_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        status: solved.status(),
        days: horizon.days().to_vec(),
        staff: roster.staff.iter().map(|m| m.name.clone()).collect(),
        grid: interpret::build_grid(&solved, &roster, &horizon),
        assignments: interpret::collect_assignments(&solved, &roster, &horizon),
        stats: interpret::build_stats(&solved, &roster, policy, &horizon),
        denied_requests: interpret::collect_denied(&solved, &roster, &horizon),
        reinforcement: interpret::build_availability(&solved, &roster, &horizon),
        solve_duration_ms,
    };

    info!(
        run_id = %result.run_id,
        status = ?result.status,
        staff = result.staff.len(),
        days = result.days.len(),
        denied = result.denied_requests.len(),
        solve_duration_ms,
        "schedule generated"
    );

    Ok(result)
}
