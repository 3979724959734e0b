//! Error types for holical.
//!
//! Date construction and date arithmetic report failures through the single
//! [`Error`] enum defined here, raised with [`ensure!`](crate::ensure) and
//! [`fail!`](crate::fail). Crates with their own failure domains (data
//! sources, aggregation, configuration) define dedicated enums and convert
//! from this one where needed.

use thiserror::Error;

/// The top-level error type used throughout holical.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Runtime failure, such as date arithmetic overflow (raised by `fail!`).
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated, such as a month outside 1–12 (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// A textual value could not be parsed.
    #[error("cannot parse {what} from {input:?}")]
    Parse {
        /// What was being parsed (e.g. `"date number"`).
        what: &'static str,
        /// The offending input.
        input: String,
    },
}

/// Shorthand `Result` type used throughout holical.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` when `$cond` is false.
///
/// # Example
/// ```
/// use hc_core::{ensure, errors::Error};
/// fn month(m: u8) -> hc_core::errors::Result<u8> {
///     ensure!((1..=12).contains(&m), "month {m} out of range [1, 12]");
///     Ok(m)
/// }
/// assert!(month(3).is_ok());
/// assert!(month(13).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use hc_core::{fail, errors::Error};
/// fn always_err() -> hc_core::errors::Result<()> {
///     fail!("no holidays for {}", 1899);
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
