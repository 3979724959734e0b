//! `Calendar` trait and the holiday calendars built on it.
//!
//! A calendar answers which dates are *off*: weekends (Saturday and Sunday)
//! plus an explicit set of holidays. The long-weekend detection walks a
//! calendar one day at a time, so lookups here must stay cheap.

use std::collections::BTreeSet;

use crate::date::Date;
use hc_core::errors::Result;
use hc_core::{DateNumber, Year};

/// A calendar of days off.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"South Korea 2025"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is an explicit holiday of this calendar.
    ///
    /// Weekends are not holidays unless they were listed explicitly.
    fn is_holiday(&self, date: Date) -> bool;

    /// Return `true` if `date` is a weekend day.
    fn is_weekend(&self, date: Date) -> bool {
        date.is_weekend()
    }

    /// Return `true` if `date` is a weekend day or a holiday.
    fn is_day_off(&self, date: Date) -> bool {
        self.is_weekend(date) || self.is_holiday(date)
    }

    /// Return `true` if `date` is a working day.
    fn is_business_day(&self, date: Date) -> bool {
        !self.is_day_off(date)
    }

    /// Count the weekend days of `year`.
    fn weekend_count(&self, year: Year) -> Result<usize> {
        let first = Date::from_ymd(year, 1, 1)?;
        let last = Date::from_ymd(year, 12, 31)?;
        Ok(first
            .range_inclusive(last)
            .filter(|&d| self.is_weekend(d))
            .count())
    }
}

/// A calendar that treats only Saturdays and Sundays as days off.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_holiday(&self, _date: Date) -> bool {
        false
    }
}

/// A weekend calendar with an explicit set of holiday dates.
///
/// Holidays are kept as `YYYYMMDD` numbers in an ordered set, so iteration
/// order is chronological and independent of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    name: String,
    holidays: BTreeSet<DateNumber>,
}

impl HolidayCalendar {
    /// Create a new calendar with the given name and no holidays.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            holidays: BTreeSet::new(),
        }
    }

    /// Create a calendar from `YYYYMMDD` holiday numbers.
    pub fn from_numbers(
        name: impl Into<String>,
        numbers: impl IntoIterator<Item = DateNumber>,
    ) -> Self {
        Self {
            name: name.into(),
            holidays: numbers.into_iter().collect(),
        }
    }

    /// Add a holiday. Adding a date twice has no effect.
    pub fn add_holiday(&mut self, date: Date) {
        self.holidays.insert(date.number());
    }

    /// Remove a previously added holiday.
    pub fn remove_holiday(&mut self, date: Date) {
        self.holidays.remove(&date.number());
    }

    /// Return `true` if the `YYYYMMDD` number is a listed holiday.
    pub fn contains(&self, number: DateNumber) -> bool {
        self.holidays.contains(&number)
    }

    /// Number of distinct holiday dates.
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }

    /// The holiday set in chronological order.
    pub fn holidays(&self) -> &BTreeSet<DateNumber> {
        &self.holidays
    }
}

impl Calendar for HolidayCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_holiday(&self, date: Date) -> bool {
        self.holidays.contains(&date.number())
    }
}
