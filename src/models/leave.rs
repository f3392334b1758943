//! Leave and day-off request types.
//!
//! Leave rows are partitioned into *hard* kinds, which unconditionally
//! remove a staff member from all shifts on a day, and the *soft* kind
//! (a personal request) which the engine tries, but is not required,
//! to honor.

use serde::{Deserialize, Serialize};

/// The reason attached to a leave row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveReason {
    /// Planned vacation (hard).
    Vacation,
    /// Certified sick leave (hard).
    SickLeave,
    /// Other certified absence, e.g. training or secondment (hard).
    CertifiedAbsence,
    /// Personal day-off request (soft).
    PersonalRequest,
}

impl LeaveReason {
    /// True for reasons that block all shift assignments on the day.
    pub fn is_hard(&self) -> bool {
        !matches!(self, LeaveReason::PersonalRequest)
    }

    /// The hard kind for this reason, or `None` for the soft request.
    pub fn hard_kind(&self) -> Option<HardLeaveKind> {
        match self {
            LeaveReason::Vacation => Some(HardLeaveKind::Vacation),
            LeaveReason::SickLeave => Some(HardLeaveKind::SickLeave),
            LeaveReason::CertifiedAbsence => Some(HardLeaveKind::CertifiedAbsence),
            LeaveReason::PersonalRequest => None,
        }
    }
}

/// The hard subset of [`LeaveReason`], used once leave has been partitioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HardLeaveKind {
    /// Planned vacation.
    Vacation,
    /// Certified sick leave.
    SickLeave,
    /// Other certified absence.
    CertifiedAbsence,
}

/// A raw leave row as supplied by the data-entry surface.
///
/// References staff by name; the normalizer correlates loosely on the
/// trimmed, case-folded name and drops rows it cannot match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRow {
    /// Staff name as entered.
    pub name: String,
    /// 1-based day index within the horizon.
    pub day: u32,
    /// Why the staff member is (or would like to be) away.
    pub reason: LeaveReason,
}
