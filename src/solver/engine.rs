//! The solving engine bridge.
//!
//! Solves in two passes on a worker thread. The first pass carries only
//! the hard constraints and the preference terms, which the backend
//! dispatches quickly; its solution is held as the incumbent. The second
//! pass adds the equity spread machinery and re-optimizes. The wall-clock
//! budget is enforced from the outside: if the refinement misses the
//! deadline the incumbent is returned as a feasible (not proven optimal)
//! schedule, while the abandoned thread winds down on its own. A run only
//! times out when not even the first pass fits the budget.

use std::collections::{HashMap, HashSet};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use good_lp::{ResolutionError, Solution, SolverModel, default_solver};
use tracing::debug;

use crate::config::SchedulePolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{Horizon, Post, RunStatus, ShiftKind};
use crate::roster::Roster;
use crate::solver::model::{AssignKey, ShiftModel};
use crate::solver::{coverage, equity, exclusion, objective, rest, weekend};

/// The solved assignment, reduced to plain booleans.
///
/// Decouples interpretation from the solver: the interpreter only ever
/// sees this value, and tests construct it directly.
#[derive(Debug, Clone)]
pub struct SolvedValues {
    assigned: HashSet<AssignKey>,
    posts: Vec<Post>,
    status: RunStatus,
}

impl SolvedValues {
    /// Wraps an explicit assignment set.
    pub fn new(assigned: HashSet<AssignKey>, posts: Vec<Post>, status: RunStatus) -> Self {
        Self { assigned, posts, status }
    }

    /// True if the (staff, day, shift, post) assignment fired.
    pub fn assigned(&self, staff: usize, day: u32, shift: ShiftKind, post: Post) -> bool {
        self.assigned.contains(&(staff, day, shift, post))
    }

    /// True if the staff member works any shift on the day.
    pub fn worked_any(&self, staff: usize, day: u32) -> bool {
        ShiftKind::ALL
            .into_iter()
            .any(|shift| self.posts.iter().any(|&post| self.assigned(staff, day, shift, post)))
    }

    /// The active posts of the run.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// How the run terminated.
    pub fn status(&self) -> RunStatus {
        self.status
    }

    /// Number of assignments that fired.
    pub fn assignment_count(&self) -> usize {
        self.assigned.len()
    }

    pub(crate) fn with_status(mut self, status: RunStatus) -> Self {
        self.status = status;
        self
    }
}

/// Progress message from the solver worker.
enum SolveUpdate {
    /// The preference-only pass solved; held in case the refinement
    /// misses the deadline.
    Incumbent(SolvedValues),
    /// The final outcome of the run.
    Outcome(EngineResult<SolvedValues>),
}

/// Builds the complete model: variables, every constraint group, and the
/// objective terms.
pub fn build_model(roster: &Roster, policy: &SchedulePolicy, horizon: &Horizon) -> ShiftModel {
    build_stage(roster, policy, horizon, true)
}

/// Builds the model with or without the equity spread machinery.
///
/// Every hard constraint and the preference terms are present either way;
/// only the spread counters, indicators, and objective terms are staged.
fn build_stage(
    roster: &Roster,
    policy: &SchedulePolicy,
    horizon: &Horizon,
    with_equity: bool,
) -> ShiftModel {
    let mut model = ShiftModel::new(roster, policy, horizon);
    coverage::apply(&mut model, policy, horizon);
    exclusion::apply(&mut model, roster, policy, horizon);
    rest::apply(&mut model, roster, policy, horizon);
    weekend::apply(&mut model, roster, policy, horizon);
    if with_equity {
        equity::apply(&mut model, roster, policy, horizon);
    }
    objective::apply(&mut model, roster, policy, horizon);
    debug!(
        variables = model.variable_count(),
        constraints = model.constraint_count(),
        with_equity,
        "model assembled"
    );
    model
}

/// Checks that the roster could plausibly satisfy the coverage table.
///
/// A day whose required headcount exceeds the unblocked staff count can
/// never be covered; failing here spares the solve budget.
pub fn check_viability(
    roster: &Roster,
    policy: &SchedulePolicy,
    horizon: &Horizon,
) -> EngineResult<()> {
    if roster.is_empty() {
        return Err(EngineError::EmptyRoster);
    }

    let worst = horizon
        .days()
        .iter()
        .map(|day| {
            let required = policy.required_headcount(day);
            let available = roster
                .staff
                .iter()
                .filter(|m| !roster.is_blocked(m.id, day.index))
                .count() as u32;
            (day.index, required, available)
        })
        .filter(|&(_, required, available)| available < required)
        .max_by_key(|&(_, required, available)| required - available);

    match worst {
        Some((day, required, available)) => {
            Err(EngineError::RosterTooSmall { day, required, available })
        }
        None => Ok(()),
    }
}

/// Builds and solves the model within the policy's wall-clock budget.
///
/// Returns [`RunStatus::Optimal`] when the equity-refined pass completes
/// in time, [`RunStatus::Feasible`] when only the preference pass did.
pub fn solve_schedule(
    roster: &Roster,
    policy: &SchedulePolicy,
    horizon: &Horizon,
) -> EngineResult<SolvedValues> {
    check_viability(roster, policy, horizon)?;

    let budget_secs = policy.solver.time_limit_secs;
    let (tx, rx) = mpsc::channel();
    let worker_roster = roster.clone();
    let worker_policy = policy.clone();
    let worker_horizon = horizon.clone();

    thread::spawn(move || {
        match run_solver(&worker_roster, &worker_policy, &worker_horizon, false) {
            Ok(incumbent) => {
                // The receiver is gone once the budget elapses; stop then.
                if tx.send(SolveUpdate::Incumbent(incumbent)).is_err() {
                    return;
                }
                let refined = run_solver(&worker_roster, &worker_policy, &worker_horizon, true);
                let _ = tx.send(SolveUpdate::Outcome(refined));
            }
            // Infeasibility does not depend on the equity terms; no point
            // attempting the refinement.
            Err(e) => {
                let _ = tx.send(SolveUpdate::Outcome(Err(e)));
            }
        }
    });

    await_outcome(&rx, budget_secs)
}

/// Waits out the solve budget, falling back to the incumbent.
fn await_outcome(
    rx: &mpsc::Receiver<SolveUpdate>,
    budget_secs: u64,
) -> EngineResult<SolvedValues> {
    let deadline = Instant::now() + Duration::from_secs(budget_secs);
    let mut incumbent: Option<SolvedValues> = None;

    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match rx.recv_timeout(remaining) {
            Ok(SolveUpdate::Incumbent(values)) => incumbent = Some(values),
            Ok(SolveUpdate::Outcome(outcome)) => return outcome,
            Err(RecvTimeoutError::Timeout) => {
                return match incumbent {
                    Some(values) => Ok(values.with_status(RunStatus::Feasible)),
                    None => Err(EngineError::SolveTimeout { budget_secs }),
                };
            }
            Err(RecvTimeoutError::Disconnected) => {
                return match incumbent {
                    Some(values) => Ok(values.with_status(RunStatus::Feasible)),
                    None => Err(EngineError::SolverFailure {
                        message: "solver worker terminated unexpectedly".to_string(),
                    }),
                };
            }
        }
    }
}

fn run_solver(
    roster: &Roster,
    policy: &SchedulePolicy,
    horizon: &Horizon,
    with_equity: bool,
) -> EngineResult<SolvedValues> {
    let model = build_stage(roster, policy, horizon, with_equity);
    let (vars, constraints, objective, assignment) = model.into_parts();

    let mut problem = vars.maximise(objective).using(default_solver);
    for constraint in constraints {
        problem.add_constraint(constraint);
    }

    let solution = problem.solve().map_err(|e| match e {
        ResolutionError::Infeasible => EngineError::Infeasible {
            hint: policy.infeasibility_hint(),
        },
        other => EngineError::SolverFailure { message: other.to_string() },
    })?;

    let assigned = extract_assignments(&solution, &assignment);
    debug!(assignments = assigned.len(), "solution extracted");
    Ok(SolvedValues::new(assigned, policy.posts.clone(), RunStatus::Optimal))
}

fn extract_assignments(
    solution: &impl Solution,
    assignment: &HashMap<AssignKey, good_lp::Variable>,
) -> HashSet<AssignKey> {
    assignment
        .iter()
        .filter(|&(_, &var)| solution.value(var) >= 0.5)
        .map(|(&key, _)| key)
        .collect()
}
