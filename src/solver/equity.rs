//! Equity terms: spread variables over nights, weekend touches, and hours.
//!
//! Each fairness metric gets one counter expression per staff member and a
//! shared min/max pair bounded against every counter. The objective rewards
//! the min and penalizes the max, so at the optimum the pair equals the
//! true extremes and the penalized gap is the spread.

use good_lp::Expression;

use crate::config::SchedulePolicy;
use crate::models::{Horizon, ShiftKind};
use crate::roster::Roster;
use crate::solver::model::ShiftModel;

/// Emits the spread machinery and its objective terms.
pub fn apply(
    model: &mut ShiftModel,
    roster: &Roster,
    policy: &SchedulePolicy,
    horizon: &Horizon,
) {
    if roster.len() < 2 {
        return;
    }

    let nights: Vec<Expression> = roster
        .staff
        .iter()
        .map(|m| night_counter(model, m.id, horizon))
        .collect();
    add_spread(
        model,
        "nights",
        nights,
        f64::from(horizon.len()),
        policy.weights.night_spread,
    );

    let pairs = horizon.weekend_pairs(policy.count_truncated_weekends);
    if !pairs.is_empty() {
        let touches: Vec<Expression> = roster
            .staff
            .iter()
            .map(|m| weekend_counter(model, m.id, &pairs))
            .collect();
        add_spread(
            model,
            "weekends",
            touches,
            pairs.len() as f64,
            policy.weights.weekend_spread,
        );
    }

    let hour_cap = f64::from(
        horizon.len()
            * (policy.shift_hours.morning + policy.shift_hours.day + policy.shift_hours.night),
    );
    let hours: Vec<Expression> = roster
        .staff
        .iter()
        .map(|m| hours_counter(model, m.id, policy, horizon))
        .collect();
    add_spread(model, "hours", hours, hour_cap, policy.weights.hours_spread);
}

fn night_counter(model: &ShiftModel, staff: usize, horizon: &Horizon) -> Expression {
    horizon
        .days()
        .iter()
        .fold(Expression::from(0.0), |acc, day| {
            acc + model.kind_sum(staff, day.index, ShiftKind::Night)
        })
}

/// One exact touched-this-weekend indicator per pair, summed.
fn weekend_counter(model: &mut ShiftModel, staff: usize, pairs: &[Vec<u32>]) -> Expression {
    let mut counter = Expression::from(0.0);
    for (i, pair) in pairs.iter().enumerate() {
        let touch = model.add_bool(format!("wk_{staff}_{i}"));
        let mut total = Expression::from(0.0);
        for &day in pair {
            for var in model.shift_vars(staff, day) {
                model.add_constraint((Expression::from(var) - touch).leq(0.0));
                total += var;
            }
        }
        model.add_constraint((Expression::from(touch) - total).leq(0.0));
        counter += touch;
    }
    counter
}

fn hours_counter(
    model: &ShiftModel,
    staff: usize,
    policy: &SchedulePolicy,
    horizon: &Horizon,
) -> Expression {
    let mut counter = Expression::from(0.0);
    for day in horizon.days() {
        for shift in ShiftKind::ALL {
            let hours = f64::from(policy.shift_hours.for_shift(shift));
            for &post in model.posts() {
                counter.add_mul(hours, model.assignment(staff, day.index, shift, post));
            }
        }
    }
    counter
}

/// Bounds a min/max pair against every counter and penalizes the gap.
fn add_spread(
    model: &mut ShiftModel,
    label: &str,
    counters: Vec<Expression>,
    upper: f64,
    weight: f64,
) {
    let max_v = model.add_real(format!("max_{label}"), upper);
    let min_v = model.add_real(format!("min_{label}"), upper);

    for counter in counters {
        model.add_constraint((counter.clone() - max_v).leq(0.0));
        model.add_constraint((Expression::from(min_v) - counter).leq(0.0));
    }

    model.add_objective_term(-weight, max_v);
    model.add_objective_term(weight, min_v);
}
