//! Reinforcement availability: who could take an extra shift each day.

use crate::models::{Horizon, ReinforcementDay, ShiftKind};
use crate::roster::Roster;
use crate::solver::SolvedValues;

/// Lists, per day, the staff free for reinforcement duty.
///
/// A staff member is available when they work nothing that day, are not
/// on hard leave, and worked no night the previous day. Honored soft
/// requests do not exclude anyone; the pool is advisory.
pub fn build_availability(
    solved: &SolvedValues,
    roster: &Roster,
    horizon: &Horizon,
) -> Vec<ReinforcementDay> {
    horizon
        .days()
        .iter()
        .map(|day| {
            let available = roster
                .staff
                .iter()
                .filter(|member| {
                    !solved.worked_any(member.id, day.index)
                        && !roster.is_blocked(member.id, day.index)
                        && (day.index == 1 || !worked_night(solved, member.id, day.index - 1))
                })
                .map(|member| member.name.clone())
                .collect();
            ReinforcementDay { day: day.index, available }
        })
        .collect()
}

fn worked_night(solved: &SolvedValues, staff: usize, day: u32) -> bool {
    solved
        .posts()
        .iter()
        .any(|&post| solved.assigned(staff, day, ShiftKind::Night, post))
}
