//! Preference terms: soft day-off requests and 24-hour pairing.

use good_lp::Expression;

use crate::config::SchedulePolicy;
use crate::models::Horizon;
use crate::roster::Roster;
use crate::solver::model::ShiftModel;

/// Emits the preference terms of the objective.
///
/// Each soft request gets an exact worked-that-day indicator whose weight
/// penalizes denying the request. When 24-hour shifts are allowed, the
/// pairing indicator is rewarded for staff who prefer long shifts and
/// penalized for everyone else.
pub fn apply(
    model: &mut ShiftModel,
    roster: &Roster,
    policy: &SchedulePolicy,
    horizon: &Horizon,
) {
    for &(staff, day) in &roster.soft_requests {
        let denied = model.add_bool(format!("denied_{staff}_{day}"));
        let mut total = Expression::from(0.0);
        for var in model.shift_vars(staff, day) {
            model.add_constraint((Expression::from(var) - denied).leq(0.0));
            total += var;
        }
        model.add_constraint((Expression::from(denied) - total).leq(0.0));
        model.add_objective_term(-policy.weights.denied_request, denied);
    }

    if policy.allow_24h_shifts {
        for member in &roster.staff {
            let weight = if member.prefers_24h {
                policy.weights.preference_24h
            } else {
                -policy.weights.preference_24h
            };
            for day in horizon.days() {
                let is24 = model.is_24h(member.id, day.index);
                model.add_objective_term(weight, is24);
            }
        }
    }
}
