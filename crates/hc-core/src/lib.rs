//! # hc-core
//!
//! Core types and error definitions shared by every holical crate.
//!
//! Holds the error hierarchy, the `ensure!` / `fail!` macros and the
//! primitive aliases used for the compact numeric date encodings that the
//! holiday data sources speak.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Calendar year as carried by the data sources (e.g. `2025`).
pub type Year = u16;

/// Month of the year, 1–12.
pub type MonthNumber = u8;

/// A date packed as the eight-digit integer `YYYYMMDD` (e.g. `20250301`).
pub type DateNumber = u32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
