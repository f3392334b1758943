//! Staff model and related types.
//!
//! This module defines the StaffMember struct and CompetencyTier enum
//! for representing the medical team being rostered.

use serde::{Deserialize, Serialize};

/// The ordered competency tiers a staff member can hold.
///
/// Tiers are ordered from most to least senior; `Ord` follows declaration
/// order, so `Specialist < SeniorTrainee` in the derived ordering means
/// "more senior sorts first".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetencyTier {
    /// Fully qualified specialist.
    Specialist,
    /// Senior trainee able to cover most posts.
    SeniorTrainee,
    /// Junior trainee; typically barred from the restricted post.
    JuniorTrainee,
    /// External cover staff hired per-shift.
    ExternalCover,
}

/// A raw staff roster row as supplied by the data-entry surface.
///
/// Rows are normalized into [`StaffMember`]s at the start of each run;
/// inactive rows are dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffRow {
    /// Display name, unique within a run.
    pub name: String,
    /// Competency tier.
    pub tier: CompetencyTier,
    /// Optional team label, informational only.
    #[serde(default)]
    pub team: Option<String>,
    /// Contracted weekly hours (>= 0).
    pub weekly_hours: u32,
    /// Whether the staff member prefers working 24-hour shifts.
    #[serde(default)]
    pub prefers_24h: bool,
    /// Whether the row participates in scheduling at all.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// A normalized, active staff member.
///
/// Created from the roster input before each run and immutable during it.
/// The `id` is a dense index assigned by the normalizer and is stable for
/// the duration of the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    /// Dense per-run identifier (index into the normalized roster).
    pub id: usize,
    /// Display name, unique within a run.
    pub name: String,
    /// Competency tier.
    pub tier: CompetencyTier,
    /// Optional team label.
    pub team: Option<String>,
    /// Contracted weekly hours.
    pub weekly_hours: u32,
    /// Whether the staff member prefers working 24-hour shifts.
    pub prefers_24h: bool,
}

impl StaffMember {
    /// Builds a normalized member from a raw row with the given dense id.
    pub fn from_row(id: usize, row: &StaffRow) -> Self {
        Self {
            id,
            name: row.name.trim().to_string(),
            tier: row.tier,
            team: row.team.clone(),
            weekly_hours: row.weekly_hours,
            prefers_24h: row.prefers_24h,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_row(name: &str, active: bool) -> StaffRow {
        StaffRow {
            name: name.to_string(),
            tier: CompetencyTier::Specialist,
            team: None,
            weekly_hours: 40,
            prefers_24h: false,
            active,
        }
    }

    #[test]
    fn test_deserialize_staff_row() {
        let json = r#"{
            "name": "Dr. Silva",
            "tier": "specialist",
            "team": "ICU",
            "weekly_hours": 40,
            "prefers_24h": true,
            "active": true
        }"#;

        let row: StaffRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.name, "Dr. Silva");
        assert_eq!(row.tier, CompetencyTier::Specialist);
        assert_eq!(row.team.as_deref(), Some("ICU"));
        assert_eq!(row.weekly_hours, 40);
        assert!(row.prefers_24h);
        assert!(row.active);
    }

    #[test]
    fn test_deserialize_defaults() {
        // team, prefers_24h and active are optional
        let json = r#"{
            "name": "Dr. Costa",
            "tier": "senior_trainee",
            "weekly_hours": 36
        }"#;

        let row: StaffRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.team, None);
        assert!(!row.prefers_24h);
        assert!(row.active, "rows default to active");
    }

    #[test]
    fn test_tier_serialization() {
        assert_eq!(
            serde_json::to_string(&CompetencyTier::JuniorTrainee).unwrap(),
            "\"junior_trainee\""
        );
        assert_eq!(
            serde_json::to_string(&CompetencyTier::ExternalCover).unwrap(),
            "\"external_cover\""
        );
    }

    #[test]
    fn test_tier_ordering_is_seniority() {
        assert!(CompetencyTier::Specialist < CompetencyTier::SeniorTrainee);
        assert!(CompetencyTier::SeniorTrainee < CompetencyTier::JuniorTrainee);
        assert!(CompetencyTier::JuniorTrainee < CompetencyTier::ExternalCover);
    }

    #[test]
    fn test_from_row_trims_name() {
        let row = make_row("  Dr. Ana  ", true);
        let member = StaffMember::from_row(3, &row);
        assert_eq!(member.id, 3);
        assert_eq!(member.name, "Dr. Ana");
    }

    #[test]
    fn test_staff_member_serialization_round_trip() {
        let member = StaffMember::from_row(0, &make_row("Dr. Rui", true));
        let json = serde_json::to_string(&member).unwrap();
        let deserialized: StaffMember = serde_json::from_str(&json).unwrap();
        assert_eq!(member, deserialized);
    }
}
