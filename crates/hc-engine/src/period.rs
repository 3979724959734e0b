//! Long-weekend detection.
//!
//! A date is *off* when it is a Saturday, a Sunday or a listed holiday. The
//! run around a holiday is the maximal stretch of consecutive off days that
//! contains it. Runs of at least [`PeriodRules::min_length`] days are
//! reported, and only on the run's anchor: the first listed holiday in the
//! run that is not itself a weekend day. Every other holiday of the run gets
//! no period, so each run is described exactly once.
//!
//! The walk in each direction is bounded by [`PeriodRules::max_steps`].
//! When the bound is reached while the next day is still off, the period is
//! marked `truncated` and a warning is logged.

use serde::{Deserialize, Serialize};
use tracing::warn;

use hc_time::{Calendar, Date};

use crate::messages::{Language, Message};

/// Tuning of the run detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodRules {
    /// Maximum number of days walked backward and forward from a holiday.
    pub max_steps: u32,
    /// Minimum run length reported as a holiday period.
    pub min_length: u32,
}

impl Default for PeriodRules {
    fn default() -> Self {
        Self {
            max_steps: 7,
            min_length: 3,
        }
    }
}

/// A run of consecutive days off, attached to the run's anchor holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayPeriod {
    /// First day of the run.
    #[serde(with = "date_number")]
    pub start: Date,
    /// Last day of the run.
    #[serde(with = "date_number")]
    pub end: Date,
    /// Number of days in the run, both ends included.
    pub length_days: u32,
    /// Whether the run contains a Saturday or Sunday.
    pub includes_weekend: bool,
    /// Whether the walk bound cut the run short.
    pub truncated: bool,
}

impl HolidayPeriod {
    /// Short description such as `"5-day break (incl. weekend)"`.
    pub fn describe(&self, language: Language) -> String {
        let days = self.length_days;
        if self.includes_weekend {
            Message::HolidayPeriod { days }.render(language)
        } else {
            Message::HolidayPeriodShort { days }.render(language)
        }
    }
}

/// Walk from `from` in direction `step` while days are off.
///
/// Returns the last off day reached and whether the bound stopped the walk.
fn walk<C: Calendar + ?Sized>(from: Date, step: i32, calendar: &C, max_steps: u32) -> (Date, bool) {
    let mut edge = from;
    for _ in 0..max_steps {
        match edge.add_days(step) {
            Ok(next) if calendar.is_day_off(next) => edge = next,
            _ => return (edge, false),
        }
    }
    let truncated = edge
        .add_days(step)
        .is_ok_and(|next| calendar.is_day_off(next));
    (edge, truncated)
}

/// Find the holiday period owned by `target`.
///
/// Returns `None` when the run around `target` is shorter than
/// `rules.min_length`, or when `target` is not the run's anchor.
pub fn find_period<C: Calendar + ?Sized>(
    target: Date,
    calendar: &C,
    rules: &PeriodRules,
) -> Option<HolidayPeriod> {
    let (start, back_truncated) = walk(target, -1, calendar, rules.max_steps);
    let (end, forward_truncated) = walk(target, 1, calendar, rules.max_steps);

    let length_days = u32::try_from(end - start + 1).ok()?;
    if length_days < rules.min_length {
        return None;
    }

    let anchor = start
        .range_inclusive(end)
        .find(|&d| calendar.is_holiday(d) && !calendar.is_weekend(d))
        .unwrap_or(start);
    if anchor != target {
        return None;
    }

    let includes_weekend =
        calendar.is_weekend(target) || start.range_inclusive(end).any(|d| calendar.is_weekend(d));
    let truncated = back_truncated || forward_truncated;
    if truncated {
        warn!(
            anchor = %target,
            max_steps = rules.max_steps,
            "holiday run reaches the walk bound; reported length may be short"
        );
    }

    Some(HolidayPeriod {
        start,
        end,
        length_days,
        includes_weekend,
        truncated,
    })
}

mod date_number {
    use hc_time::Date;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(date.number())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let n = u32::deserialize(deserializer)?;
        Date::from_number(n).map_err(D::Error::custom)
    }
}
