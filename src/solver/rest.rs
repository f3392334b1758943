//! Rest rules: post-night recovery and rolling workload caps.

use good_lp::Expression;

use crate::config::SchedulePolicy;
use crate::models::{Horizon, ShiftKind};
use crate::roster::Roster;
use crate::solver::model::ShiftModel;

/// Emits recovery and cap rows for every staff member.
///
/// A night worked on day `d` forbids every shift on day `d + 1`; with
/// 24-hour shifts enabled the night half of the pairing carries the same
/// recovery day. Rolling 7-day windows cap nights and total shifts, and
/// each ISO calendar week caps Morning shifts. Windows extending past the
/// horizon edge are not emitted.
pub fn apply(
    model: &mut ShiftModel,
    roster: &Roster,
    policy: &SchedulePolicy,
    horizon: &Horizon,
) {
    let n_days = horizon.len();

    for member in &roster.staff {
        // Post-night recovery, one row per next-day variable.
        for day in 1..n_days {
            let night = model.kind_sum(member.id, day, ShiftKind::Night);
            for var in model.shift_vars(member.id, day + 1) {
                model.add_constraint((night.clone() + var).leq(1.0));
            }
        }

        // Rolling 7-day caps.
        for start in 1..=n_days.saturating_sub(6) {
            let mut nights = Expression::from(0.0);
            let mut shifts = Expression::from(0.0);
            for day in start..start + 7 {
                nights += model.kind_sum(member.id, day, ShiftKind::Night);
                shifts += model.day_total(member.id, day);
            }
            model.add_constraint(nights.leq(f64::from(policy.max_nights_per_week)));
            model.add_constraint(shifts.leq(f64::from(policy.max_shifts_per_week)));
        }

        // Morning cap per ISO calendar week.
        for week in horizon.iso_weeks() {
            let mut mornings = Expression::from(0.0);
            for day in week {
                mornings += model.kind_sum(member.id, day, ShiftKind::Morning);
            }
            model.add_constraint(mornings.leq(f64::from(policy.max_mornings_per_week)));
        }
    }
}
