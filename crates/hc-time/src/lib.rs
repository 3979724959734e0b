//! # hc-time
//!
//! Date, weekday, month, and holiday-calendar types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Calendar` trait, `WeekendsOnly` and `HolidayCalendar`.
pub mod calendar;

/// `Date` type.
pub mod date;

/// `Month`: month of the year.
pub mod month;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Calendar, HolidayCalendar, WeekendsOnly};
pub use date::Date;
pub use month::Month;
pub use weekday::Weekday;
