//! Shift vocabulary and schedule result types.
//!
//! This module defines the closed shift enumeration, the output labels of
//! the solution interpreter, and the result envelope returned from a
//! scheduling run.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::calendar::CalendarDay;
use super::leave::HardLeaveKind;

/// The closed set of shift kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftKind {
    /// Reduced-hour reinforcement shift; weekdays only.
    Morning,
    /// 12-hour day shift.
    Day,
    /// 12-hour night shift.
    Night,
}

impl ShiftKind {
    /// All shift kinds, in canonical order.
    pub const ALL: [ShiftKind; 3] = [ShiftKind::Morning, ShiftKind::Day, ShiftKind::Night];
}

/// A duty post, orthogonal to the shift kind.
///
/// Policies without a post dimension use [`Post::General`] alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Post {
    /// Single undifferentiated post.
    General,
    /// Intensive care unit.
    Icu,
    /// Emergency department.
    Emergency,
}

/// The label placed in one cell of the output grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftLabel {
    /// A continuous 24-hour duty (Day and Night on the same day).
    #[serde(rename = "24h")]
    TwentyFourHour,
    /// Day shift.
    Day,
    /// Night shift.
    Night,
    /// Morning reinforcement shift.
    Morning,
    /// Blocked by vacation.
    Vacation,
    /// Blocked by certified sick leave.
    SickLeave,
    /// Blocked by another certified absence.
    CertifiedAbsence,
    /// A personal day-off request that was honored.
    RequestHonored,
    /// No assignment and no leave record.
    Empty,
}

impl From<HardLeaveKind> for ShiftLabel {
    fn from(kind: HardLeaveKind) -> Self {
        match kind {
            HardLeaveKind::Vacation => ShiftLabel::Vacation,
            HardLeaveKind::SickLeave => ShiftLabel::SickLeave,
            HardLeaveKind::CertifiedAbsence => ShiftLabel::CertifiedAbsence,
        }
    }
}

/// Outcome of a successful solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// The solver proved the returned schedule optimal.
    Optimal,
    /// The budget elapsed before optimality was proven; the schedule
    /// satisfies every hard constraint but may be suboptimal.
    Feasible,
}

/// Fairness classification of one metric's deviation from the team average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviationBand {
    /// Within the configured balanced threshold.
    Balanced,
    /// Beyond balanced but within the moderate threshold.
    Moderate,
    /// Beyond the moderate threshold.
    Unbalanced,
}

/// One concrete assignment in the solved schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    /// Staff name.
    pub staff: String,
    /// 1-based day index.
    pub day: u32,
    /// Shift kind worked.
    pub shift: ShiftKind,
    /// Post covered.
    pub post: Post,
}

/// A soft day-off request that the solver had to override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeniedRequest {
    /// Staff name.
    pub staff: String,
    /// 1-based day index of the requested day off.
    pub day: u32,
}

/// Per-day list of staff available for reinforcement duty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReinforcementDay {
    /// 1-based day index.
    pub day: u32,
    /// Names of staff who are off that day, not on hard leave, and
    /// rested (no night shift the previous day).
    pub available: Vec<String>,
}

/// Per-staff workload and fairness statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffStats {
    /// Staff name.
    pub staff: String,
    /// Total weighted hours worked across the horizon.
    pub total_hours: u32,
    /// Contracted weekly hours scaled to the horizon length.
    pub contracted_hours: Decimal,
    /// `total_hours - contracted_hours`.
    pub hours_delta: Decimal,
    /// Number of night shifts worked.
    pub nights: u32,
    /// Number of weekend pairs touched.
    pub weekend_touches: u32,
    /// Deviation of total hours from the team average.
    pub hours_deviation: Decimal,
    /// Deviation of night count from the team average.
    pub nights_deviation: Decimal,
    /// Deviation of weekend touches from the team average.
    pub weekends_deviation: Decimal,
    /// Band for the hours deviation.
    pub hours_band: DeviationBand,
    /// Band for the nights deviation.
    pub nights_band: DeviationBand,
    /// Band for the weekends deviation.
    pub weekends_band: DeviationBand,
}

/// The complete output of one scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Unique identifier for this run.
    pub run_id: Uuid,
    /// When the run completed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the result.
    pub engine_version: String,
    /// Solve outcome.
    pub status: RunStatus,
    /// The calendar days of the horizon, in order.
    pub days: Vec<CalendarDay>,
    /// Staff names in grid row order.
    pub staff: Vec<String>,
    /// One row per staff member, one label per day.
    pub grid: Vec<Vec<ShiftLabel>>,
    /// Every concrete assignment, including the post dimension.
    pub assignments: Vec<AssignmentRecord>,
    /// Per-staff workload statistics.
    pub stats: Vec<StaffStats>,
    /// Soft requests the solver could not honor. Never silently dropped.
    pub denied_requests: Vec<DeniedRequest>,
    /// Reinforcement availability, one entry per day.
    pub reinforcement: Vec<ReinforcementDay>,
    /// Wall-clock duration of the solve, in milliseconds.
    pub solve_duration_ms: u64,
}
