//! Core data models for the rostering engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calendar;
mod leave;
mod schedule;
mod staff;

pub use calendar::{CalendarDay, Horizon, HorizonSpec};
pub use leave::{HardLeaveKind, LeaveReason, LeaveRow};
pub use schedule::{
    AssignmentRecord, DeniedRequest, DeviationBand, Post, ReinforcementDay, RunStatus,
    ScheduleResult, ShiftKind, ShiftLabel, StaffStats,
};
pub use staff::{CompetencyTier, StaffMember, StaffRow};
