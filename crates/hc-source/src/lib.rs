//! # hc-source
//!
//! Where holiday records come from.
//!
//! A [`MonthSource`] yields the raw records of one month. Two sources are
//! provided: [`PublicHolidayApi`], the special-day service of the Korea
//! Astronomy and Space Science Institute on data.go.kr, and
//! [`BackupDataset`], a bundled JSON snapshot. [`FallbackSource`] combines
//! them so that an unreachable API never breaks the calendar.
//!
//! [`fetch_year`] issues the twelve month requests of a year concurrently,
//! and [`CalendarController`] keeps the selection, loading and error state
//! of a calendar view, discarding completions of superseded requests.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Client of the public special-day API, with JSON and XML response parsing.
pub mod api;

/// Bundled backup dataset.
pub mod backup;

/// Selection and loading state of a calendar view.
pub mod controller;

/// Source errors.
pub mod error;

/// Live source with backup fallback.
pub mod fallback;

/// Concurrent fetching of a whole year.
pub mod fetch;

/// The `MonthSource` trait.
pub mod source;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use api::{parse_response, PublicHolidayApi, DEFAULT_ENDPOINT};
pub use backup::BackupDataset;
pub use controller::{year_options, CalendarController, CalendarState, Ticket};
pub use error::SourceError;
pub use fallback::FallbackSource;
pub use fetch::{fetch_dataset, fetch_year};
pub use source::MonthSource;
