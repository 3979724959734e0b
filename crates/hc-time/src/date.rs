//! `Date` type.
//!
//! Dates are stored as a serial number of days since the Unix epoch
//! (1970-01-01 = serial 0) so that day arithmetic and differences are plain
//! integer operations. The holiday data sources exchange dates as the
//! eight-digit integer `YYYYMMDD`; [`Date::from_number`] and [`Date::number`]
//! convert between the two.
//!
//! The valid date range is 1900-01-01 to 2199-12-31.

use std::str::FromStr;

use crate::month::Month;
use crate::weekday::Weekday;
use hc_core::errors::{Error, Result};
use hc_core::{ensure, fail, DateNumber, MonthNumber, Year};

/// A calendar date represented as a day serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

const MIN_YEAR: Year = 1900;
const MAX_YEAR: Year = 2199;

impl Date {
    /// Minimum valid date: January 1, 1900.
    pub const MIN: Date = Date(-25_567);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(84_005);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: Year, month: MonthNumber, day: u8) -> Result<Self> {
        ensure!(
            (MIN_YEAR..=MAX_YEAR).contains(&year),
            "year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
        );
        ensure!((1..=12).contains(&month), "month {month} out of range [1, 12]");
        let days_in = days_in_month(year, month);
        ensure!(
            (1..=days_in).contains(&day),
            "day {day} out of range [1, {days_in}] for {year}-{month:02}"
        );
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Create a date from its `YYYYMMDD` number (e.g. `20250301`).
    pub fn from_number(number: DateNumber) -> Result<Self> {
        let year = number / 10_000;
        ensure!(
            (u32::from(MIN_YEAR)..=u32::from(MAX_YEAR)).contains(&year),
            "{number} is not a YYYYMMDD date in [{MIN_YEAR}, {MAX_YEAR}]"
        );
        let month = (number / 100) % 100;
        let day = number % 100;
        Self::from_ymd(year as Year, month as MonthNumber, day as u8)
    }

    /// Today's date in the local time zone.
    pub fn today() -> Result<Self> {
        use chrono::Datelike;
        let now = chrono::Local::now().date_naive();
        let Ok(year) = Year::try_from(now.year()) else {
            fail!("local year {} is out of range", now.year());
        };
        Self::from_ymd(year, now.month() as MonthNumber, now.day() as u8)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number (days since 1970-01-01).
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the `YYYYMMDD` number of this date.
    pub fn number(&self) -> DateNumber {
        let (y, m, d) = ymd_from_serial(self.0);
        DateNumber::from(y) * 10_000 + DateNumber::from(m) * 100 + DateNumber::from(d)
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> Year {
        ymd_from_serial(self.0).0
    }

    /// Return the month number (1–12).
    pub fn month(&self) -> MonthNumber {
        ymd_from_serial(self.0).1
    }

    /// Return the month as an enum.
    pub fn month_of_year(&self) -> Month {
        match Month::from_number(self.month()) {
            Some(m) => m,
            None => unreachable!("ymd_from_serial yields months in 1..=12"),
        }
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // 1970-01-01 was a Thursday (ordinal 4).
        let w = ((self.0 + 3).rem_euclid(7) + 1) as u8;
        match Weekday::from_ordinal(w) {
            Some(w) => w,
            None => unreachable!("rem_euclid always in 1..=7"),
        }
    }

    /// Return `true` if this date falls on Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        self.weekday().is_weekend()
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days. Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let Some(serial) = self.0.checked_add(n) else {
            fail!("date arithmetic overflow: {self} {n:+} days");
        };
        ensure!(
            (Self::MIN.0..=Self::MAX.0).contains(&serial),
            "date arithmetic: {self} {n:+} days is out of range"
        );
        Ok(Date(serial))
    }

    /// Return the number of calendar days from `self` to `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Iterate over every date from `self` to `end`, both inclusive.
    pub fn range_inclusive(self, end: Date) -> impl Iterator<Item = Date> {
        (self.0..=end.0).map(Date)
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Parsing & display ─────────────────────────────────────────────────────────

impl FromStr for Date {
    type Err = Error;

    /// Parse `YYYY-MM-DD` or `YYYYMMDD`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let parse_err = || Error::Parse {
            what: "date",
            input: s.to_string(),
        };
        if s.len() == 8 && s.bytes().all(|b| b.is_ascii_digit()) {
            let n: DateNumber = s.parse().map_err(|_| parse_err())?;
            return Self::from_number(n);
        }
        let mut parts = s.splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(parse_err());
        };
        let y: Year = y.parse().map_err(|_| parse_err())?;
        let m: MonthNumber = m.parse().map_err(|_| parse_err())?;
        let d: u8 = d.parse().map_err(|_| parse_err())?;
        Self::from_ymd(y, m, d)
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

// ── Calendar helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: Year) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: Year, month: MonthNumber) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ if is_leap_year(year) => 29,
        _ => 28,
    }
}

/// Days since 1970-01-01 for a proleptic Gregorian date.
fn serial_from_ymd(year: Year, month: MonthNumber, day: u8) -> i32 {
    let (m, d) = (i32::from(month), i32::from(day));
    let y = i32::from(year) - i32::from(m <= 2);
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (m + 9) % 12;
    let doy = (153 * mp + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (Year, MonthNumber, u8) {
    let z = serial + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = yoe + era * 400 + i32::from(m <= 2);
    (y as Year, m as MonthNumber, d as u8)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        let d = Date::from_ymd(1970, 1, 1).unwrap();
        assert_eq!(d.serial(), 0);
        assert_eq!(d.weekday(), Weekday::Thursday);
    }

    #[test]
    fn test_bounds() {
        assert_eq!(Date::from_ymd(1900, 1, 1).unwrap(), Date::MIN);
        assert_eq!(Date::from_ymd(2199, 12, 31).unwrap(), Date::MAX);
        assert!(Date::MIN.add_days(-1).is_err());
        assert!(Date::MAX.add_days(1).is_err());
    }

    #[test]
    fn test_number_roundtrip() {
        for n in [19000101, 20000229, 20250301, 20251231, 21991231] {
            assert_eq!(Date::from_number(n).unwrap().number(), n);
        }
        assert!(Date::from_number(20250230).is_err());
        assert!(Date::from_number(20251301).is_err());
        assert!(Date::from_number(2025).is_err());
    }

    #[test]
    fn test_range_errors_are_preconditions() {
        assert_eq!(
            Date::from_number(20250230),
            Err(Error::Precondition("day 30 out of range [1, 28] for 2025-02".into()))
        );
        assert!(matches!(Date::from_number(1_234_567_890), Err(Error::Precondition(_))));
        assert!(matches!(Date::MAX.add_days(1), Err(Error::Precondition(_))));
        assert!(matches!(Date::MIN.add_days(i32::MIN), Err(Error::Runtime(_))));
    }

    #[test]
    fn test_weekday() {
        // 2025-05-01 is a Thursday, 2025-05-03 a Saturday
        assert_eq!(Date::from_number(20250501).unwrap().weekday(), Weekday::Thursday);
        let sat = Date::from_number(20250503).unwrap();
        assert_eq!(sat.weekday(), Weekday::Saturday);
        assert!(sat.is_weekend());
        // 1900-01-01 was a Monday
        assert_eq!(Date::MIN.weekday(), Weekday::Monday);
    }

    #[test]
    fn test_arithmetic_crosses_year() {
        let d = Date::from_number(20241231).unwrap();
        assert_eq!(d.add_days(1).unwrap().number(), 20250101);
        assert_eq!(d.add_days(-366).unwrap().number(), 20231231);
        assert_eq!(Date::from_number(20250301).unwrap() - d, 60);
    }

    #[test]
    fn test_parse_and_display() {
        let d: Date = "2025-10-03".parse().unwrap();
        assert_eq!(d.to_string(), "2025-10-03");
        assert_eq!("20251003".parse::<Date>().unwrap(), d);
        assert!("2025-10".parse::<Date>().is_err());
        assert!("soon".parse::<Date>().is_err());
    }

    #[test]
    fn test_range_inclusive() {
        let a = Date::from_number(20250228).unwrap();
        let b = Date::from_number(20250302).unwrap();
        let days: Vec<_> = a.range_inclusive(b).map(|d| d.number()).collect();
        assert_eq!(days, vec![20250228, 20250301, 20250302]);
    }
}
