//! Per-person exclusions: shift combinations, hard leave, competency bars.

use good_lp::Expression;

use crate::config::SchedulePolicy;
use crate::models::{Horizon, ShiftKind};
use crate::roster::Roster;
use crate::solver::model::ShiftModel;

/// Emits the per-(staff, day) exclusion rows and the competency bar.
///
/// Every staff member holds at most one post per shift kind. A Morning
/// shift never combines with anything else. Day and Night combine into a
/// 24-hour shift only when the policy allows it; otherwise one shift per
/// day is the ceiling. Hard leave zeroes the whole day.
pub fn apply(
    model: &mut ShiftModel,
    roster: &Roster,
    policy: &SchedulePolicy,
    horizon: &Horizon,
) {
    for member in &roster.staff {
        for day in horizon.days() {
            for shift in ShiftKind::ALL {
                let sum = model.kind_sum(member.id, day.index, shift);
                model.add_constraint(sum.leq(1.0));
            }

            if policy.allow_24h_shifts {
                let morning = model.kind_sum(member.id, day.index, ShiftKind::Morning);
                let day_shift = model.kind_sum(member.id, day.index, ShiftKind::Day);
                let night = model.kind_sum(member.id, day.index, ShiftKind::Night);
                model.add_constraint((morning.clone() + day_shift).leq(1.0));
                model.add_constraint((morning + night).leq(1.0));
            } else {
                let total = model.day_total(member.id, day.index);
                model.add_constraint(total.leq(1.0));
            }

            if roster.is_blocked(member.id, day.index) {
                let total = model.day_total(member.id, day.index);
                model.add_constraint(total.eq(0.0));
            }
        }
    }

    // A restriction naming an inactive post has nothing to bar.
    if let Some(restriction) = policy.restricted.filter(|r| policy.posts.contains(&r.post)) {
        for member in &roster.staff {
            if member.tier != restriction.tier {
                continue;
            }
            let mut total = Expression::from(0.0);
            for day in horizon.days() {
                for shift in ShiftKind::ALL {
                    total += model.assignment(member.id, day.index, shift, restriction.post);
                }
            }
            model.add_constraint(total.eq(0.0));
        }
    }
}
