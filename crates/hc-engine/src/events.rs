//! World events shown next to the calendar.
//!
//! Event dates are partial: `YYYY-MM-DD`, `YYYY-MM` or `YYYY`. They sort
//! as the first day of the period they name; anything else sorts last.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use hc_core::{DateNumber, Year};

use crate::error::EngineError;
use crate::messages::{event_type_label, Language};

/// Sort key of an event whose date is empty or malformed.
pub const UNKNOWN_DATE_KEY: DateNumber = 99_999_999;

/// One world event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MajorEvent {
    /// Event name.
    pub name: String,
    /// Start date, possibly partial.
    #[serde(default)]
    pub date: String,
    /// Optional end date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Event type such as `"sports"`.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Where the event takes place.
    #[serde(default)]
    pub location: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
}

impl MajorEvent {
    /// Dates for display: `2025.06.11 ~ 2025.07.19`.
    pub fn display_dates(&self) -> String {
        let start = self.date.replace('-', ".");
        match &self.end_date {
            Some(end) => format!("{start} ~ {}", end.replace('-', ".")),
            None => start,
        }
    }

    /// Localized type label, or the raw type when it is unknown.
    pub fn type_label(&self, language: Language) -> &str {
        event_type_label(language, &self.kind).unwrap_or(self.kind.as_str())
    }

    /// Sort key of the event's start date.
    pub fn sort_key(&self) -> DateNumber {
        event_sort_key(&self.date)
    }
}

fn all_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

/// Normalize a partial date to a `YYYYMMDD` sort key.
///
/// ```
/// use hc_engine::events::{event_sort_key, UNKNOWN_DATE_KEY};
///
/// assert_eq!(event_sort_key("2025-03-15"), 20250315);
/// assert_eq!(event_sort_key("2025-07"), 20250701);
/// assert_eq!(event_sort_key("2025"), 20250101);
/// assert_eq!(event_sort_key("soon"), UNKNOWN_DATE_KEY);
/// ```
pub fn event_sort_key(date: &str) -> DateNumber {
    let parts: Vec<&str> = date.split('-').collect();
    let digits = match parts.as_slice() {
        [y, m, d] if all_digits(y, 4) && all_digits(m, 2) && all_digits(d, 2) => {
            format!("{y}{m}{d}")
        }
        [y, m] if all_digits(y, 4) && all_digits(m, 2) => format!("{y}{m}01"),
        [y] if all_digits(y, 4) => format!("{y}0101"),
        _ => return UNKNOWN_DATE_KEY,
    };
    digits.parse().unwrap_or(UNKNOWN_DATE_KEY)
}

/// Sort events by start date. Events with equal keys keep their order.
pub fn sort_events(events: &mut [MajorEvent]) {
    events.sort_by_key(MajorEvent::sort_key);
}

/// Events of several years, keyed by the year as a string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct EventBook {
    years: BTreeMap<String, Vec<MajorEvent>>,
}

impl EventBook {
    /// Parse a book shaped as `{"2025": [event, ..], ..}`.
    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The sorted events of `year`; empty when the year is absent.
    pub fn events_for(&self, year: Year) -> Vec<MajorEvent> {
        let mut events = self
            .years
            .get(&year.to_string())
            .cloned()
            .unwrap_or_default();
        sort_events(&mut events);
        events
    }

    /// Number of years in the book.
    pub fn year_count(&self) -> usize {
        self.years.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(name: &str, date: &str) -> MajorEvent {
        MajorEvent {
            name: name.into(),
            date: date.into(),
            end_date: None,
            kind: "sports".into(),
            location: String::new(),
            description: String::new(),
        }
    }

    fn dates(events: &[MajorEvent]) -> Vec<&str> {
        events.iter().map(|e| e.date.as_str()).collect()
    }

    #[test]
    fn partial_dates_sort_as_period_start() {
        let mut events = vec![event("a", "2025-07"), event("b", "2025"), event("c", "2025-03-15")];
        sort_events(&mut events);
        assert_eq!(dates(&events), ["2025", "2025-03-15", "2025-07"]);
    }

    #[test]
    fn malformed_dates_sort_last_and_stay_stable() {
        let mut events = vec![
            event("x", ""),
            event("y", "2025-7-1"),
            event("z", "2025-01-02"),
            event("w", "2025-01-02"),
        ];
        sort_events(&mut events);
        let names: Vec<_> = events.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["z", "w", "x", "y"]);
    }

    #[test]
    fn display_dates_and_labels() {
        let mut e = event("World Cup", "2026-06-11");
        assert_eq!(e.display_dates(), "2026.06.11");
        e.end_date = Some("2026-07-19".into());
        assert_eq!(e.display_dates(), "2026.06.11 ~ 2026.07.19");
        assert_eq!(e.type_label(Language::Ko), "스포츠");
        e.kind = "space".into();
        assert_eq!(e.type_label(Language::En), "space");
    }

    #[test]
    fn book_lookup() {
        let json = r#"{"2025": [
            {"name": "B", "date": "2025-09", "type": "culture", "location": "Seoul", "description": ""},
            {"name": "A", "date": "2025-01-20", "endDate": "2025-01-24", "type": "economy", "location": "Davos", "description": ""}
        ]}"#;
        let book = EventBook::from_json_str(json).unwrap();
        assert_eq!(book.year_count(), 1);
        let events = book.events_for(2025);
        assert_eq!(events[0].name, "A");
        assert_eq!(events[0].end_date.as_deref(), Some("2025-01-24"));
        assert!(book.events_for(2030).is_empty());
    }
}
