//! Coverage constraints: per-day headcount per (shift, post).
//!
//! Targets marked `exact` pin the headcount with an equality; all others
//! are floors. Combinations without a target for the day are forced to
//! zero, so the coverage table fully defines the staffing shape. Morning
//! targets never apply on weekends.

use crate::config::SchedulePolicy;
use crate::models::{Horizon, ShiftKind};
use crate::solver::model::ShiftModel;

/// Emits one coverage row per (day, shift, post).
pub fn apply(model: &mut ShiftModel, policy: &SchedulePolicy, horizon: &Horizon) {
    let posts = model.posts().to_vec();
    for day in horizon.days() {
        for shift in ShiftKind::ALL {
            for &post in &posts {
                let target = policy
                    .coverage_for_day(day)
                    .find(|t| t.shift == shift && t.post == post);
                let sum = model.coverage_sum(day.index, shift, post);
                let constraint = match target {
                    Some(t) if t.exact => sum.eq(f64::from(t.count)),
                    Some(t) => sum.geq(f64::from(t.count)),
                    None => sum.eq(0.0),
                };
                model.add_constraint(constraint);
            }
        }
    }
}
