//! Raw holiday records.
//!
//! A [`HolidayRecord`] is what a data source yields for one observance on
//! one calendar date. Records are immutable once produced; the aggregator
//! builds display copies rather than editing them in place.

use serde::{Deserialize, Serialize};

use hc_core::errors::Result;
use hc_core::DateNumber;
use hc_time::Date;

/// Source classification code of a commemorated date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DateKind {
    /// `01`: national day (국경일).
    National,
    /// `02`: memorial day (기념일).
    Memorial,
    /// `03`: one of the 24 solar terms (24절기).
    SolarTerm,
    /// `04`: traditional observance (잡절).
    Traditional,
    /// Any other code, kept verbatim.
    Other(String),
}

impl DateKind {
    /// Parse a source code such as `"01"`.
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "01" => DateKind::National,
            "02" => DateKind::Memorial,
            "03" => DateKind::SolarTerm,
            "04" => DateKind::Traditional,
            other => DateKind::Other(other.to_string()),
        }
    }

    /// The source code of this kind.
    pub fn code(&self) -> &str {
        match self {
            DateKind::National => "01",
            DateKind::Memorial => "02",
            DateKind::SolarTerm => "03",
            DateKind::Traditional => "04",
            DateKind::Other(code) => code,
        }
    }

    /// The source-language label the public API attaches to this kind.
    pub fn source_label(&self) -> &'static str {
        match self {
            DateKind::National => "국경일",
            DateKind::Memorial => "기념일",
            DateKind::SolarTerm => "24절기",
            DateKind::Traditional => "잡절",
            DateKind::Other(_) => "기타",
        }
    }
}

impl From<String> for DateKind {
    fn from(code: String) -> Self {
        DateKind::from_code(&code)
    }
}

impl From<DateKind> for String {
    fn from(kind: DateKind) -> Self {
        kind.code().to_string()
    }
}

/// One holiday or observance on one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayRecord {
    /// Date as `YYYYMMDD`.
    pub date: DateNumber,
    /// Name in the source language (Korean).
    pub name: String,
    /// Whether the date is a public day off.
    #[serde(default = "default_is_holiday")]
    pub is_holiday: bool,
    /// Source classification code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_kind: Option<DateKind>,
    /// Source label of the classification (e.g. `국경일`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_kind_name: Option<String>,
    /// Sequence number within the source response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seq: Option<u32>,
}

fn default_is_holiday() -> bool {
    true
}

impl HolidayRecord {
    /// A public holiday with the given date, name and kind.
    ///
    /// The kind's source label is filled in as `date_kind_name`.
    pub fn new(date: DateNumber, name: impl Into<String>, kind: DateKind) -> Self {
        Self {
            date,
            name: name.into(),
            is_holiday: true,
            date_kind_name: Some(kind.source_label().to_string()),
            date_kind: Some(kind),
            seq: None,
        }
    }

    /// The record's date.
    pub fn day(&self) -> Result<Date> {
        Date::from_number(self.date)
    }

    /// The month (1–12) encoded in the record's date number.
    pub fn month(&self) -> u8 {
        ((self.date / 100) % 100) as u8
    }
}
