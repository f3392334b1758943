//! Planning horizon and calendar day types.
//!
//! A [`Horizon`] is generated once per run from a [`HorizonSpec`] (a whole
//! month, or an explicit start date plus length) and is immutable afterwards.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// How the planning horizon is specified by the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HorizonSpec {
    /// A whole calendar month.
    Month {
        /// Calendar year.
        year: i32,
        /// Calendar month (1..=12).
        month: u32,
    },
    /// An explicit start date and number of days.
    Range {
        /// First day of the horizon.
        start: NaiveDate,
        /// Number of days (>= 1).
        days: u32,
    },
}

/// One day inside the planning horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// Sequential 1-based index within the horizon.
    pub index: u32,
    /// Calendar date.
    pub date: NaiveDate,
    /// Whether the date falls on a Saturday or Sunday.
    pub weekend: bool,
}

impl CalendarDay {
    /// Returns the weekday of this calendar day.
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }
}

/// The full planning horizon: a contiguous run of [`CalendarDay`]s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Horizon {
    days: Vec<CalendarDay>,
}

impl Horizon {
    /// Builds a horizon from the operator-supplied specification.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidHorizon`] for an out-of-range month,
    /// a zero-length range, or a range running past the supported calendar.
    pub fn from_spec(spec: HorizonSpec) -> EngineResult<Self> {
        let (start, len) = match spec {
            HorizonSpec::Month { year, month } => {
                let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
                    EngineError::InvalidHorizon {
                        message: format!("{year}-{month:02} is not a valid month"),
                    }
                })?;
                (start, days_in_month(year, month))
            }
            HorizonSpec::Range { start, days } => {
                if days == 0 {
                    return Err(EngineError::InvalidHorizon {
                        message: "horizon must span at least one day".to_string(),
                    });
                }
                (start, days)
            }
        };

        let mut days = Vec::with_capacity(len as usize);
        for offset in 0..len {
            let date = start.checked_add_days(Days::new(offset as u64)).ok_or_else(|| {
                EngineError::InvalidHorizon {
                    message: format!("day {} overflows the calendar", offset + 1),
                }
            })?;
            days.push(CalendarDay {
                index: offset + 1,
                date,
                weekend: matches!(date.weekday(), Weekday::Sat | Weekday::Sun),
            });
        }

        Ok(Self { days })
    }

    /// Number of days in the horizon.
    pub fn len(&self) -> u32 {
        self.days.len() as u32
    }

    /// True if the horizon contains no days (never produced by `from_spec`).
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// All days, in order.
    pub fn days(&self) -> &[CalendarDay] {
        &self.days
    }

    /// Looks up a day by its 1-based index.
    pub fn day(&self, index: u32) -> Option<&CalendarDay> {
        self.days.get(index.checked_sub(1)? as usize)
    }

    /// True if the 1-based index lies inside the horizon.
    pub fn contains(&self, index: u32) -> bool {
        index >= 1 && index <= self.len()
    }

    /// Weekend pairs inside the horizon, as lists of 1-based day indices.
    ///
    /// A full pair is a Saturday with its following Sunday. When
    /// `include_truncated` is set, a lone Sunday at the start or a lone
    /// Saturday at the end of the horizon also yields a single-day pair.
    pub fn weekend_pairs(&self, include_truncated: bool) -> Vec<Vec<u32>> {
        let mut pairs = Vec::new();
        for day in &self.days {
            match day.weekday() {
                Weekday::Sat => {
                    if self.contains(day.index + 1) {
                        pairs.push(vec![day.index, day.index + 1]);
                    } else if include_truncated {
                        pairs.push(vec![day.index]);
                    }
                }
                Weekday::Sun => {
                    // Counted with its Saturday unless that lies outside.
                    if day.index == 1 && include_truncated {
                        pairs.push(vec![day.index]);
                    }
                }
                _ => {}
            }
        }
        pairs
    }

    /// Fridays whose Saturday and Sunday both lie inside the horizon.
    pub fn long_weekend_fridays(&self) -> Vec<u32> {
        self.days
            .iter()
            .filter(|d| d.weekday() == Weekday::Fri && self.contains(d.index + 2))
            .map(|d| d.index)
            .collect()
    }

    /// Groups day indices by ISO calendar week.
    pub fn iso_weeks(&self) -> Vec<Vec<u32>> {
        let mut weeks: Vec<((i32, u32), Vec<u32>)> = Vec::new();
        for day in &self.days {
            let iso = day.date.iso_week();
            let key = (iso.year(), iso.week());
            match weeks.last_mut() {
                Some((k, indices)) if *k == key => indices.push(day.index),
                _ => weeks.push((key, vec![day.index])),
            }
        }
        weeks.into_iter().map(|(_, indices)| indices).collect()
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    // First of next month minus one day.
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    let first_of_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .expect("month arithmetic stays in range");
    first_of_next
        .pred_opt()
        .expect("previous day of a month start exists")
        .day()
}
