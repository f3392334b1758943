//! Weekend single-shot rule.

use chrono::Weekday;

use crate::config::SchedulePolicy;
use crate::models::{Horizon, ShiftKind};
use crate::roster::Roster;
use crate::solver::model::ShiftModel;

/// Limits each staff member to one touch of each weekend block.
///
/// A block is the Friday night plus every Saturday and Sunday shift of
/// one weekend, and the rule applies only when all three days sit inside
/// the horizon. A truncated weekend at a horizon edge carries no row;
/// constraining a partial block would rule out schedules the full rule
/// permits. Emits nothing when the policy leaves the rule disabled.
pub fn apply(
    model: &mut ShiftModel,
    roster: &Roster,
    policy: &SchedulePolicy,
    horizon: &Horizon,
) {
    if !policy.weekend_single_shot {
        return;
    }

    let fridays: Vec<u32> = horizon
        .days()
        .iter()
        .filter(|d| {
            d.weekday() == Weekday::Fri
                && horizon.contains(d.index + 1)
                && horizon.contains(d.index + 2)
        })
        .map(|d| d.index)
        .collect();

    for member in &roster.staff {
        for &friday in &fridays {
            let mut block = model.kind_sum(member.id, friday, ShiftKind::Night);
            for weekend_day in [friday + 1, friday + 2] {
                for var in model.shift_vars(member.id, weekend_day) {
                    block += var;
                }
            }
            model.add_constraint(block.leq(1.0));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CompetencyTier, HorizonSpec, StaffRow};
    use chrono::NaiveDate;

    fn inputs(start_str: &str, days: u32, single_shot: bool) -> (Roster, SchedulePolicy, Horizon) {
        let rows = vec![StaffRow {
            name: "Dr. Silva".to_string(),
            tier: CompetencyTier::Specialist,
            team: None,
            weekly_hours: 40,
            prefers_24h: false,
            active: true,
        }];
        let start = NaiveDate::parse_from_str(start_str, "%Y-%m-%d").unwrap();
        let horizon = Horizon::from_spec(HorizonSpec::Range { start, days }).unwrap();
        let roster = Roster::normalize(&rows, &[], &horizon);
        let mut policy = SchedulePolicy::default();
        policy.weekend_single_shot = single_shot;
        (roster, policy, horizon)
    }

    #[test]
    fn test_disabled_rule_emits_nothing() {
        let (roster, policy, horizon) = inputs("2026-01-05", 7, false);
        let mut model = ShiftModel::new(&roster, &policy, &horizon);
        let before = model.constraint_count();

        apply(&mut model, &roster, &policy, &horizon);
        assert_eq!(model.constraint_count(), before);
    }

    #[test]
    fn test_one_row_per_staff_weekend() {
        // Monday..Sunday: one full Friday/Saturday/Sunday block.
        let (roster, policy, horizon) = inputs("2026-01-05", 7, true);
        let mut model = ShiftModel::new(&roster, &policy, &horizon);
        let before = model.constraint_count();

        apply(&mut model, &roster, &policy, &horizon);
        assert_eq!(model.constraint_count() - before, 1);
    }

    #[test]
    fn test_truncated_weekend_at_end_emits_nothing() {
        // Monday..Saturday: the Sunday is outside the horizon, so the
        // block is incomplete and carries no row.
        let (roster, policy, horizon) = inputs("2026-01-05", 6, true);
        let mut model = ShiftModel::new(&roster, &policy, &horizon);
        let before = model.constraint_count();

        apply(&mut model, &roster, &policy, &horizon);
        assert_eq!(model.constraint_count(), before);
    }

    #[test]
    fn test_weekend_without_its_friday_emits_nothing() {
        // Saturday..Sunday: no Friday in the horizon, no block.
        let (roster, policy, horizon) = inputs("2026-01-10", 2, true);
        let mut model = ShiftModel::new(&roster, &policy, &horizon);
        let before = model.constraint_count();

        apply(&mut model, &roster, &policy, &horizon);
        assert_eq!(model.constraint_count(), before);
    }

    #[test]
    fn test_lone_saturday_at_start_needs_no_row() {
        // Saturday 2026-01-10 alone: nothing to pair with.
        let (roster, policy, horizon) = inputs("2026-01-10", 1, true);
        let mut model = ShiftModel::new(&roster, &policy, &horizon);
        let before = model.constraint_count();

        apply(&mut model, &roster, &policy, &horizon);
        assert_eq!(model.constraint_count(), before);
    }
}
