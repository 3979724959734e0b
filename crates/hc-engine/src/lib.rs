//! # hc-engine
//!
//! The holiday-period aggregation engine.
//!
//! Given the raw holiday records of a year, the engine classifies each
//! record, resolves bilingual display names (including the compound
//! substitute-holiday forms), detects runs of consecutive days off and
//! assembles a [`YearDataset`] with per-month groups and year totals. It
//! also orders the world-event list shown next to the calendar.
//!
//! Everything here is a pure function of its inputs; fetching the records is
//! the job of `hc-source`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Year aggregation: month groups, holiday periods and totals.
pub mod aggregate;

/// Holiday categories and the classifier.
pub mod category;

/// Engine error type.
pub mod error;

/// World events and their date ordering.
pub mod events;

/// Typed UI messages, month and weekday names.
pub mod messages;

/// Holiday display-name resolution.
pub mod names;

/// Long-weekend (holiday run) detection.
pub mod period;

/// Raw holiday records as produced by the data sources.
pub mod record;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use aggregate::{aggregate, AggregateError, HolidayEntry, MonthGroup, YearDataset};
pub use category::{classify, HolidayCategory};
pub use error::EngineError;
pub use events::{sort_events, EventBook, MajorEvent};
pub use messages::{Language, Message};
pub use names::{resolve_date_kind_name, resolve_name, NameTable};
pub use period::{find_period, HolidayPeriod, PeriodRules};
pub use record::{DateKind, HolidayRecord};
