//! Year aggregation.
//!
//! [`aggregate`] turns the twelve per-month fetch results of a year into a
//! [`YearDataset`]: records are classified and filtered to national and
//! substitute holidays, names are resolved for the display language, each
//! entry gets its holiday period, and the year totals are computed.
//!
//! Aggregation is all-or-nothing. If any month failed, the first failure in
//! month order is returned and nothing else is built.

use std::collections::BTreeSet;
use std::fmt::Display;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use hc_core::errors::Result as CoreResult;
use hc_core::{DateNumber, MonthNumber, Year};
use hc_time::{Calendar, Date, HolidayCalendar};

use crate::category::{classify, HolidayCategory};
use crate::messages::Language;
use crate::names::{resolve_date_kind_name, resolve_name, NameTable};
use crate::period::{find_period, HolidayPeriod, PeriodRules};
use crate::record::HolidayRecord;

/// Errors produced by [`aggregate`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AggregateError {
    /// A month could not be fetched; the message is the source's own.
    #[error("{message}")]
    MonthFailed {
        /// The failing month (1–12).
        month: MonthNumber,
        /// The failure message reported by the data source.
        message: String,
    },

    /// The input did not contain exactly one result per month.
    #[error("expected 12 monthly results, got {0}")]
    MonthCount(usize),

    /// The year or a record date is not a valid date.
    #[error(transparent)]
    Date(#[from] hc_core::Error),
}

/// A holiday ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayEntry {
    /// The record with `name` and `date_kind_name` in the display language.
    #[serde(flatten)]
    pub record: HolidayRecord,
    /// The name as delivered by the data source.
    pub source_name: String,
    /// Category computed from the source record.
    pub category: HolidayCategory,
    /// The holiday period this entry anchors, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<HolidayPeriod>,
}

impl HolidayEntry {
    /// The entry's date.
    pub fn day(&self) -> CoreResult<Date> {
        self.record.day()
    }

    /// Return `true` if the entry falls on `today`.
    pub fn is_on(&self, today: Date) -> bool {
        self.record.date == today.number()
    }
}

/// The displayed holidays of one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGroup {
    /// Month number (1–12).
    pub month: MonthNumber,
    /// Entries in data-source order.
    pub holidays: Vec<HolidayEntry>,
}

/// Everything the calendar view needs for one year in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearDataset {
    /// The year.
    pub year: Year,
    /// Display language of names and labels.
    pub language: Language,
    /// Twelve month groups, January first.
    pub months: Vec<MonthGroup>,
    /// Distinct dates of all displayed holidays.
    pub holiday_dates: BTreeSet<DateNumber>,
    /// Saturdays and Sundays in the year.
    pub weekend_days: usize,
    /// Number of displayed holiday entries.
    pub total_holidays: usize,
    /// Weekend days plus displayed entries falling on a weekday.
    ///
    /// Two observances sharing a weekday date count twice.
    pub total_days_off: usize,
}

impl YearDataset {
    /// The holiday calendar of the displayed holidays.
    pub fn calendar(&self) -> HolidayCalendar {
        HolidayCalendar::from_numbers(self.year.to_string(), self.holiday_dates.iter().copied())
    }

    /// All entries, month by month.
    pub fn entries(&self) -> impl Iterator<Item = &HolidayEntry> {
        self.months.iter().flat_map(|m| m.holidays.iter())
    }

    /// The group of `month` (1–12).
    pub fn month(&self, month: MonthNumber) -> Option<&MonthGroup> {
        self.months.iter().find(|g| g.month == month)
    }
}

fn display_entry(record: &HolidayRecord, category: HolidayCategory, language: Language, names: &NameTable) -> HolidayEntry {
    let mut shown = record.clone();
    shown.name = resolve_name(&record.name, language, names);
    shown.date_kind_name = record
        .date_kind_name
        .as_deref()
        .map(|label| resolve_date_kind_name(label, language));
    HolidayEntry {
        record: shown,
        source_name: record.name.clone(),
        category,
        period: None,
    }
}

/// Aggregate the twelve monthly fetch results of `year`.
///
/// `results[0]` is January. Each failure value is reported through its
/// `Display` text.
pub fn aggregate<E: Display>(
    year: Year,
    results: Vec<Result<Vec<HolidayRecord>, E>>,
    language: Language,
    names: &NameTable,
    rules: &PeriodRules,
) -> Result<YearDataset, AggregateError> {
    if results.len() != 12 {
        return Err(AggregateError::MonthCount(results.len()));
    }

    let mut months = Vec::with_capacity(12);
    for (month, result) in (1..=12u8).zip(results) {
        let records = result.map_err(|e| AggregateError::MonthFailed {
            month,
            message: e.to_string(),
        })?;
        let holidays = records
            .iter()
            .filter_map(|r| {
                let category = classify(r);
                category
                    .is_displayed()
                    .then(|| display_entry(r, category, language, names))
            })
            .collect();
        months.push(MonthGroup { month, holidays });
    }

    let calendar = HolidayCalendar::from_numbers(
        year.to_string(),
        months
            .iter()
            .flat_map(|m| m.holidays.iter().map(|e| e.record.date)),
    );

    // Two observances can share a date; only the first one owns the period.
    let mut anchored = BTreeSet::new();
    let mut weekday_entries = 0;
    for entry in months.iter_mut().flat_map(|m| m.holidays.iter_mut()) {
        let day = entry.day()?;
        if !day.is_weekend() {
            weekday_entries += 1;
        }
        if let Some(period) = find_period(day, &calendar, rules) {
            if anchored.insert(entry.record.date) {
                entry.period = Some(period);
            }
        }
    }

    let weekend_days = calendar.weekend_count(year)?;
    let total_holidays = months.iter().map(|m| m.holidays.len()).sum();
    let total_days_off = weekend_days + weekday_entries;
    debug!(
        year,
        %language,
        total_holidays,
        total_days_off,
        periods = anchored.len(),
        "aggregated holiday year"
    );

    Ok(YearDataset {
        year,
        language,
        months,
        holiday_dates: calendar.holidays().clone(),
        weekend_days,
        total_holidays,
        total_days_off,
    })
}
