//! Configuration types for the scheduling policy.
//!
//! Every observed staffing-policy variant is a value of [`SchedulePolicy`]:
//! one named, documented object instead of per-variant code forks. All
//! constraint-group builders receive the resolved policy explicitly.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{CalendarDay, CompetencyTier, Post, ShiftKind};

/// Required headcount for one (shift, post) combination on every day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageTarget {
    /// The shift kind to staff.
    pub shift: ShiftKind,
    /// The post to staff.
    pub post: Post,
    /// Required number of staff.
    pub count: u32,
    /// When true the headcount is fixed (`==`); otherwise it is a floor (`>=`).
    #[serde(default)]
    pub exact: bool,
}

/// Bars one competency tier from one post entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRestriction {
    /// The tier that may never be assigned.
    pub tier: CompetencyTier,
    /// The post it is barred from.
    pub post: Post,
}

/// Hour weights per shift kind, used for the weighted-hours equity metric.
///
/// A 24-hour shift contributes `day + night` since both assignments fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShiftHours {
    /// Hours credited for a Morning shift.
    pub morning: u32,
    /// Hours credited for a Day shift.
    pub day: u32,
    /// Hours credited for a Night shift.
    pub night: u32,
}

impl Default for ShiftHours {
    fn default() -> Self {
        Self { morning: 6, day: 12, night: 12 }
    }
}

impl ShiftHours {
    /// Hours credited for the given shift kind.
    pub fn for_shift(&self, shift: ShiftKind) -> u32 {
        match shift {
            ShiftKind::Morning => self.morning,
            ShiftKind::Day => self.day,
            ShiftKind::Night => self.night,
        }
    }
}

/// Weights of the objective terms.
///
/// Magnitudes establish the priority ordering; the defaults rank honoring
/// soft requests above the 24-hour-shift preference, which in turn ranks
/// above the equity spreads (nights, then weekends, then hours).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectiveWeights {
    /// Penalty for scheduling a staff member on a requested day off.
    pub denied_request: f64,
    /// Bonus (preferring staff) or penalty (others) per 24-hour shift.
    pub preference_24h: f64,
    /// Penalty per unit of night-count spread.
    pub night_spread: f64,
    /// Penalty per unit of weekend-touch spread.
    pub weekend_spread: f64,
    /// Penalty per unit of weighted-hours spread.
    pub hours_spread: f64,
}

impl Default for ObjectiveWeights {
    fn default() -> Self {
        Self {
            denied_request: 100.0,
            preference_24h: 20.0,
            night_spread: 8.0,
            weekend_spread: 6.0,
            hours_spread: 4.0,
        }
    }
}

/// Absolute-deviation thresholds for one fairness metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandThresholds {
    /// Deviations up to this magnitude are balanced.
    pub balanced_within: Decimal,
    /// Deviations up to this magnitude (beyond balanced) are moderate.
    pub moderate_within: Decimal,
}

impl BandThresholds {
    fn new(balanced: i64, moderate: i64) -> Self {
        Self {
            balanced_within: Decimal::from(balanced),
            moderate_within: Decimal::from(moderate),
        }
    }
}

/// Per-metric deviation band thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviationBands {
    /// Thresholds for the weighted-hours metric.
    pub hours: BandThresholds,
    /// Thresholds for the night-count metric.
    pub nights: BandThresholds,
    /// Thresholds for the weekend-touch metric.
    pub weekends: BandThresholds,
}

impl Default for DeviationBands {
    fn default() -> Self {
        Self {
            hours: BandThresholds::new(6, 12),
            nights: BandThresholds::new(1, 2),
            weekends: BandThresholds::new(1, 2),
        }
    }
}

/// Settings for the solving engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Wall-clock solve budget in seconds.
    pub time_limit_secs: u64,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self { time_limit_secs: 10 }
    }
}

/// The complete scheduling policy for one run.
///
/// The default value reproduces the ICU/Emergency staffing scenario:
/// two ICU and one Emergency staff on every Day and Night shift, junior
/// trainees barred from Emergency, and a 10-second solve budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulePolicy {
    /// Active posts. Policies without a post dimension use `[Post::General]`.
    pub posts: Vec<Post>,
    /// Per-day headcount targets. Morning targets apply to weekdays only;
    /// the weekend Morning headcount is always forced to zero.
    pub coverage: Vec<CoverageTarget>,
    /// Optional competency restriction.
    pub restricted: Option<PostRestriction>,
    /// Maximum nights in any rolling 7-day window, per staff.
    pub max_nights_per_week: u32,
    /// Maximum shifts of any kind in any rolling 7-day window, per staff.
    pub max_shifts_per_week: u32,
    /// Maximum Morning shifts in any ISO calendar week, per staff.
    pub max_mornings_per_week: u32,
    /// Limit each staff member to one touch of the Friday-night/Saturday/
    /// Sunday block.
    pub weekend_single_shot: bool,
    /// Whether a Day and Night assignment may combine into a 24-hour shift.
    pub allow_24h_shifts: bool,
    /// Whether a truncated boundary weekend (lone Saturday or Sunday at a
    /// horizon edge) counts as a weekend touch.
    pub count_truncated_weekends: bool,
    /// Hour weights per shift kind.
    pub shift_hours: ShiftHours,
    /// Objective term weights.
    pub weights: ObjectiveWeights,
    /// Deviation band thresholds for reporting.
    pub bands: DeviationBands,
    /// Solving engine settings.
    pub solver: SolverSettings,
}

impl Default for SchedulePolicy {
    fn default() -> Self {
        Self {
            posts: vec![Post::Icu, Post::Emergency],
            coverage: vec![
                CoverageTarget { shift: ShiftKind::Day, post: Post::Icu, count: 2, exact: false },
                CoverageTarget {
                    shift: ShiftKind::Day,
                    post: Post::Emergency,
                    count: 1,
                    exact: false,
                },
                CoverageTarget { shift: ShiftKind::Night, post: Post::Icu, count: 2, exact: false },
                CoverageTarget {
                    shift: ShiftKind::Night,
                    post: Post::Emergency,
                    count: 1,
                    exact: false,
                },
            ],
            restricted: Some(PostRestriction {
                tier: CompetencyTier::JuniorTrainee,
                post: Post::Emergency,
            }),
            max_nights_per_week: 3,
            max_shifts_per_week: 6,
            max_mornings_per_week: 2,
            weekend_single_shot: false,
            allow_24h_shifts: false,
            count_truncated_weekends: false,
            shift_hours: ShiftHours::default(),
            weights: ObjectiveWeights::default(),
            bands: DeviationBands::default(),
            solver: SolverSettings::default(),
        }
    }
}

impl SchedulePolicy {
    /// Coverage targets that apply on the given day.
    ///
    /// Morning targets are dropped on weekends; no reinforcement shift
    /// runs then.
    pub fn coverage_for_day(&self, day: &CalendarDay) -> impl Iterator<Item = &CoverageTarget> {
        self.coverage
            .iter()
            .filter(move |t| !(t.shift == ShiftKind::Morning && day.weekend))
    }

    /// Minimum number of people needed to staff the given day.
    ///
    /// Without 24-hour shifts every slot needs its own person. With them,
    /// one person may cover a Day and a Night slot, so those two kinds
    /// share headcount; Morning never pairs with anything and always
    /// counts in full.
    pub fn required_headcount(&self, day: &CalendarDay) -> u32 {
        let mut morning = 0;
        let mut day_count = 0;
        let mut night = 0;
        for target in self.coverage_for_day(day) {
            match target.shift {
                ShiftKind::Morning => morning += target.count,
                ShiftKind::Day => day_count += target.count,
                ShiftKind::Night => night += target.count,
            }
        }
        if self.allow_24h_shifts {
            morning + day_count.max(night)
        } else {
            morning + day_count + night
        }
    }

    /// Advisory hint naming the policy levers most likely responsible for
    /// an over-constrained model. Not derived from constraint provenance.
    pub fn infeasibility_hint(&self) -> String {
        let mut levers = vec!["coverage counts", "weekly night/shift caps"];
        if self.weekend_single_shot {
            levers.push("the weekend single-shot rule");
        }
        if !self.allow_24h_shifts {
            levers.push("the 24h-shift prohibition");
        }
        format!(
            "consider relaxing {} or adding active staff",
            levers.join(", ")
        )
    }
}
