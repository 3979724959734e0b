//! Holiday categories and the classifier.
//!
//! The category is never stored on a record; it is recomputed from the
//! source name and the `dateKind` code. A substitute-holiday marker in the
//! name wins over the code, because the source legitimately tags some
//! substitute holidays with the national-day code.

use serde::{Deserialize, Serialize};

use crate::record::{DateKind, HolidayRecord};

/// Short marker that every substitute-holiday name contains (`대체`).
pub const SUBSTITUTE_MARKER: &str = "대체";

/// Full compound token for a substitute holiday (`대체공휴일`).
pub const SUBSTITUTE_HOLIDAY: &str = "대체공휴일";

/// Semantic category of a holiday record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayCategory {
    /// National day (`dateKind` 01).
    National,
    /// Substitute holiday, detected from the name.
    Substitute,
    /// Memorial day (`dateKind` 02).
    Memorial,
    /// Solar term (`dateKind` 03).
    Solar,
    /// Traditional observance (`dateKind` 04).
    Traditional,
    /// Anything else, including a missing `dateKind`.
    Other,
}

impl HolidayCategory {
    /// Return `true` for the categories shown in the calendar
    /// (national and substitute holidays).
    pub fn is_displayed(&self) -> bool {
        matches!(self, HolidayCategory::National | HolidayCategory::Substitute)
    }

    /// Lower-case identifier (`"national"`, `"substitute"`, …).
    pub fn as_str(&self) -> &'static str {
        match self {
            HolidayCategory::National => "national",
            HolidayCategory::Substitute => "substitute",
            HolidayCategory::Memorial => "memorial",
            HolidayCategory::Solar => "solar",
            HolidayCategory::Traditional => "traditional",
            HolidayCategory::Other => "other",
        }
    }
}

impl std::fmt::Display for HolidayCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Return `true` if a source-language name denotes a substitute holiday,
/// in either the suffix form (`어린이날 대체공휴일`) or the bracketed form
/// (`대체공휴일(삼일절)`).
pub fn is_substitute_name(name: &str) -> bool {
    name.contains(SUBSTITUTE_MARKER)
}

/// Classify a record.
pub fn classify(record: &HolidayRecord) -> HolidayCategory {
    if is_substitute_name(&record.name) {
        return HolidayCategory::Substitute;
    }
    match record.date_kind {
        Some(DateKind::National) => HolidayCategory::National,
        Some(DateKind::Memorial) => HolidayCategory::Memorial,
        Some(DateKind::SolarTerm) => HolidayCategory::Solar,
        Some(DateKind::Traditional) => HolidayCategory::Traditional,
        Some(DateKind::Other(_)) | None => HolidayCategory::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, kind: Option<&str>) -> HolidayRecord {
        HolidayRecord {
            date: 20250303,
            name: name.into(),
            is_holiday: true,
            date_kind: kind.map(DateKind::from_code),
            date_kind_name: None,
            seq: None,
        }
    }

    #[test]
    fn date_kind_mapping() {
        assert_eq!(classify(&record("삼일절", Some("01"))), HolidayCategory::National);
        assert_eq!(classify(&record("식목일", Some("02"))), HolidayCategory::Memorial);
        assert_eq!(classify(&record("춘분", Some("03"))), HolidayCategory::Solar);
        assert_eq!(classify(&record("단오", Some("04"))), HolidayCategory::Traditional);
        assert_eq!(classify(&record("무엇", Some("07"))), HolidayCategory::Other);
        assert_eq!(classify(&record("무엇", None)), HolidayCategory::Other);
    }

    #[test]
    fn substitute_marker_wins_over_kind() {
        assert_eq!(
            classify(&record("대체공휴일(삼일절)", Some("01"))),
            HolidayCategory::Substitute
        );
        assert_eq!(
            classify(&record("어린이날 대체공휴일", Some("02"))),
            HolidayCategory::Substitute
        );
        assert_eq!(classify(&record("대체공휴일", None)), HolidayCategory::Substitute);
    }

    #[test]
    fn displayed_categories() {
        assert!(HolidayCategory::National.is_displayed());
        assert!(HolidayCategory::Substitute.is_displayed());
        assert!(!HolidayCategory::Memorial.is_displayed());
        assert!(!HolidayCategory::Other.is_displayed());
    }
}
