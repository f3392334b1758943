//! Request types for the rostering API.

use serde::{Deserialize, Serialize};

use crate::config::SchedulePolicy;
use crate::models::{HorizonSpec, LeaveRow, StaffRow};

/// The body of a POST /schedule request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Raw staff roster rows.
    pub staff: Vec<StaffRow>,
    /// Raw leave and day-off request rows.
    #[serde(default)]
    pub leave: Vec<LeaveRow>,
    /// The planning horizon: a month, or a start date and length.
    pub horizon: HorizonSpec,
    /// Optional full policy override. When absent the server's policy
    /// applies.
    #[serde(default)]
    pub policy: Option<SchedulePolicy>,
}
