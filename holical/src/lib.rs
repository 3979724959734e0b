//! # holical
//!
//! South Korean public holidays by year, with long-weekend detection and
//! Korean or English display names.
//!
//! This crate is a **façade** over the workspace crates plus the pieces the
//! `holical` binary is made of: configuration loading, source assembly and
//! text rendering.
//!
//! ```rust
//! use holical::engine::{find_period, PeriodRules};
//! use holical::time::{Date, HolidayCalendar};
//!
//! // Friday 2025-06-06 makes a three-day weekend
//! let cal = HolidayCalendar::from_numbers("2025", [20250606]);
//! let day = Date::from_number(20250606).unwrap();
//! let period = find_period(day, &cal, &PeriodRules::default()).unwrap();
//! assert_eq!(period.length_days, 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core type aliases and error definitions.
pub use hc_core as core;

/// Dates, weekdays, months and holiday calendars.
pub use hc_time as time;

/// Classification, naming, period detection and aggregation.
pub use hc_engine as engine;

/// Data sources and the calendar controller.
pub use hc_source as source;

// ── Modules ───────────────────────────────────────────────────────────────────

/// Wiring of configuration, sources and bundled data.
pub mod app;

/// Configuration file and environment.
pub mod config;

/// Plain-text rendering of a year.
pub mod render;

pub use app::AppError;
pub use config::{AppConfig, ConfigError};
