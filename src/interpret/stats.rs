//! Per-staff workload statistics and fairness banding.

use rust_decimal::Decimal;

use crate::config::{BandThresholds, SchedulePolicy};
use crate::models::{DeviationBand, Horizon, ShiftKind, StaffStats};
use crate::roster::Roster;
use crate::solver::SolvedValues;

/// Computes the per-staff statistics block.
///
/// Hours are weighted by the policy's per-shift hours; contracted hours
/// scale the weekly contract to the horizon length. Deviations compare
/// each staff member against the team average and are banded with the
/// policy thresholds.
pub fn build_stats(
    solved: &SolvedValues,
    roster: &Roster,
    policy: &SchedulePolicy,
    horizon: &Horizon,
) -> Vec<StaffStats> {
    if roster.is_empty() {
        return Vec::new();
    }

    let pairs = horizon.weekend_pairs(policy.count_truncated_weekends);
    let raw: Vec<(u32, u32, u32)> = roster
        .staff
        .iter()
        .map(|member| {
            let mut hours = 0;
            let mut nights = 0;
            for day in horizon.days() {
                for shift in ShiftKind::ALL {
                    let worked = solved
                        .posts()
                        .iter()
                        .any(|&post| solved.assigned(member.id, day.index, shift, post));
                    if worked {
                        hours += policy.shift_hours.for_shift(shift);
                        if shift == ShiftKind::Night {
                            nights += 1;
                        }
                    }
                }
            }
            let touches = pairs
                .iter()
                .filter(|pair| pair.iter().any(|&d| solved.worked_any(member.id, d)))
                .count() as u32;
            (hours, nights, touches)
        })
        .collect();

    let team = Decimal::from(roster.len());
    let avg_hours = Decimal::from(raw.iter().map(|r| r.0).sum::<u32>()) / team;
    let avg_nights = Decimal::from(raw.iter().map(|r| r.1).sum::<u32>()) / team;
    let avg_touches = Decimal::from(raw.iter().map(|r| r.2).sum::<u32>()) / team;

    let horizon_scale = Decimal::from(horizon.len()) / Decimal::from(7);

    roster
        .staff
        .iter()
        .zip(raw)
        .map(|(member, (hours, nights, touches))| {
            let contracted = Decimal::from(member.weekly_hours) * horizon_scale;
            let hours_deviation = Decimal::from(hours) - avg_hours;
            let nights_deviation = Decimal::from(nights) - avg_nights;
            let weekends_deviation = Decimal::from(touches) - avg_touches;

            StaffStats {
                staff: member.name.clone(),
                total_hours: hours,
                contracted_hours: contracted,
                hours_delta: Decimal::from(hours) - contracted,
                nights,
                weekend_touches: touches,
                hours_deviation,
                nights_deviation,
                weekends_deviation,
                hours_band: classify(hours_deviation, &policy.bands.hours),
                nights_band: classify(nights_deviation, &policy.bands.nights),
                weekends_band: classify(weekends_deviation, &policy.bands.weekends),
            }
        })
        .collect()
}

/// Bands one deviation by its magnitude.
fn classify(deviation: Decimal, thresholds: &BandThresholds) -> DeviationBand {
    let magnitude = deviation.abs();
    if magnitude <= thresholds.balanced_within {
        DeviationBand::Balanced
    } else if magnitude <= thresholds.moderate_within {
        DeviationBand::Moderate
    } else {
        DeviationBand::Unbalanced
    }
}
