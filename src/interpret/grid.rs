//! Grid rendering: solved booleans to one label per (staff, day) cell.
//!
//! Label resolution runs in a fixed order. The raw booleans are read
//! first, the Day/Night union collapses into the 24-hour label before any
//! single-shift label is considered, and leave labels apply only to cells
//! with no work at all. A soft request on a worked day is a denial, never
//! a leave label.

use crate::models::{
    AssignmentRecord, DeniedRequest, Horizon, ShiftKind, ShiftLabel,
};
use crate::roster::Roster;
use crate::solver::SolvedValues;

/// Renders the full output grid, one row per staff member in roster order.
pub fn build_grid(solved: &SolvedValues, roster: &Roster, horizon: &Horizon) -> Vec<Vec<ShiftLabel>> {
    roster
        .staff
        .iter()
        .map(|member| {
            horizon
                .days()
                .iter()
                .map(|day| cell_label(solved, roster, member.id, day.index))
                .collect()
        })
        .collect()
}

/// Resolves one cell.
fn cell_label(solved: &SolvedValues, roster: &Roster, staff: usize, day: u32) -> ShiftLabel {
    let worked = |shift: ShiftKind| {
        solved
            .posts()
            .iter()
            .any(|&post| solved.assigned(staff, day, shift, post))
    };

    let day_shift = worked(ShiftKind::Day);
    let night = worked(ShiftKind::Night);

    if day_shift && night {
        ShiftLabel::TwentyFourHour
    } else if day_shift {
        ShiftLabel::Day
    } else if night {
        ShiftLabel::Night
    } else if worked(ShiftKind::Morning) {
        ShiftLabel::Morning
    } else if let Some(&kind) = roster.hard_leave.get(&(staff, day)) {
        ShiftLabel::from(kind)
    } else if roster.has_soft_request(staff, day) {
        ShiftLabel::RequestHonored
    } else {
        ShiftLabel::Empty
    }
}

/// Flattens the solved booleans into concrete assignment records.
///
/// Ordered by staff, then day, then canonical shift order, then post, so
/// the list is stable across runs with identical solutions.
pub fn collect_assignments(
    solved: &SolvedValues,
    roster: &Roster,
    horizon: &Horizon,
) -> Vec<AssignmentRecord> {
    let mut records = Vec::new();
    for member in &roster.staff {
        for day in horizon.days() {
            for shift in ShiftKind::ALL {
                for &post in solved.posts() {
                    if solved.assigned(member.id, day.index, shift, post) {
                        records.push(AssignmentRecord {
                            staff: member.name.clone(),
                            day: day.index,
                            shift,
                            post,
                        });
                    }
                }
            }
        }
    }
    records
}

/// Soft requests the solution overrides: requested off, scheduled anyway.
pub fn collect_denied(
    solved: &SolvedValues,
    roster: &Roster,
    horizon: &Horizon,
) -> Vec<DeniedRequest> {
    let mut denied = Vec::new();
    for member in &roster.staff {
        for day in horizon.days() {
            if roster.has_soft_request(member.id, day.index)
                && solved.worked_any(member.id, day.index)
            {
                denied.push(DeniedRequest { staff: member.name.clone(), day: day.index });
            }
        }
    }
    denied
}
