//! Roster and leave normalization.
//!
//! Converts raw staff and leave rows into the engine's internal entities:
//! active [`StaffMember`]s with dense ids, a hard-leave lookup, and a
//! soft-request set. Malformed leave rows are dropped with a logged
//! warning; normalization itself never fails.

use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::models::{HardLeaveKind, Horizon, LeaveRow, StaffMember, StaffRow};

/// The normalized input of one scheduling run.
#[derive(Debug, Clone)]
pub struct Roster {
    /// Active staff, ids dense in `0..staff.len()`.
    pub staff: Vec<StaffMember>,
    /// Blocking absences keyed by (staff id, 1-based day index).
    pub hard_leave: HashMap<(usize, u32), HardLeaveKind>,
    /// Preferred days off keyed the same way.
    pub soft_requests: HashSet<(usize, u32)>,
}

impl Roster {
    /// Normalizes raw rows against the horizon.
    ///
    /// Inactive staff rows are dropped. Leave rows referencing an unknown
    /// name (matched on the trimmed, case-folded form) or a day outside
    /// the horizon are dropped with a warning, never an error.
    pub fn normalize(staff_rows: &[StaffRow], leave_rows: &[LeaveRow], horizon: &Horizon) -> Self {
        let staff: Vec<StaffMember> = staff_rows
            .iter()
            .filter(|row| row.active)
            .enumerate()
            .map(|(id, row)| StaffMember::from_row(id, row))
            .collect();

        let by_name: HashMap<String, usize> = staff
            .iter()
            .map(|member| (fold_name(&member.name), member.id))
            .collect();

        let mut hard_leave = HashMap::new();
        let mut soft_requests = HashSet::new();

        for row in leave_rows {
            let Some(&staff_id) = by_name.get(&fold_name(&row.name)) else {
                warn!(name = %row.name, day = row.day, "dropping leave row: unknown staff name");
                continue;
            };
            if !horizon.contains(row.day) {
                warn!(
                    name = %row.name,
                    day = row.day,
                    horizon_days = horizon.len(),
                    "dropping leave row: day outside horizon"
                );
                continue;
            }

            match row.reason.hard_kind() {
                Some(kind) => {
                    hard_leave.insert((staff_id, row.day), kind);
                }
                None => {
                    soft_requests.insert((staff_id, row.day));
                }
            }
        }

        Self { staff, hard_leave, soft_requests }
    }

    /// Number of active staff.
    pub fn len(&self) -> usize {
        self.staff.len()
    }

    /// True if no active staff remain.
    pub fn is_empty(&self) -> bool {
        self.staff.is_empty()
    }

    /// True if the staff member is blocked on the given day.
    pub fn is_blocked(&self, staff_id: usize, day: u32) -> bool {
        self.hard_leave.contains_key(&(staff_id, day))
    }

    /// True if the staff member asked for the given day off.
    pub fn has_soft_request(&self, staff_id: usize, day: u32) -> bool {
        self.soft_requests.contains(&(staff_id, day))
    }
}

/// Loose name correlation: trimmed and case-folded.
fn fold_name(name: &str) -> String {
    name.trim().to_lowercase()
}
