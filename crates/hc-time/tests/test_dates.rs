//! Date arithmetic and calendar tests.
//!
//! Serial arithmetic is cross-checked against `chrono` over the whole valid
//! range; the calendar tests use the 2025 South Korean holidays.

use chrono::{Datelike, NaiveDate};
use hc_time::{Calendar, Date, HolidayCalendar, Month, Weekday, WeekendsOnly};
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn korea_2025() -> HolidayCalendar {
    HolidayCalendar::from_numbers(
        "South Korea 2025",
        [
            20250101, 20250127, 20250128, 20250129, 20250130, 20250301, 20250303, 20250505,
            20250506, 20250603, 20250606, 20250815, 20251003, 20251005, 20251006, 20251007,
            20251008, 20251009, 20251225,
        ],
    )
}

#[test]
fn range_limits() {
    assert_eq!(date(1900, 1, 1), Date::MIN);
    assert_eq!(date(2199, 12, 31), Date::MAX);
    assert!(Date::MAX.add_days(1).is_err());
    assert!(Date::MIN.add_days(-1).is_err());
    assert!(Date::from_ymd(2025, 2, 29).is_err());
    assert!(Date::from_ymd(2024, 2, 29).is_ok());
}

#[test]
fn parse_both_shapes() {
    let a: Date = "2025-10-09".parse().unwrap();
    let b: Date = "20251009".parse().unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_string(), "2025-10-09");
    assert_eq!(a.weekday(), Weekday::Thursday);
    assert_eq!(a.month_of_year(), Month::October);
    assert!("2025/10/09".parse::<Date>().is_err());
}

#[test]
fn korean_calendar_2025() {
    let cal = korea_2025();
    // Seollal week: Sat Jan 25 .. Thu Jan 30 off, Fri 31 working, then a weekend
    let off: Vec<u32> = date(2025, 1, 25)
        .range_inclusive(date(2025, 2, 2))
        .filter(|&d| cal.is_day_off(d))
        .map(|d| d.number())
        .collect();
    assert_eq!(off.len(), 8);
    assert!(!off.contains(&20250131));
    assert!(cal.is_business_day(date(2025, 1, 31)));
    assert_eq!(cal.holiday_count(), 19);
    assert_eq!(cal.weekend_count(2025).unwrap(), 104);
    assert!(!cal.is_holiday(date(2025, 1, 25)));
    assert!(WeekendsOnly.is_day_off(date(2025, 1, 25)));
}

proptest! {
    #[test]
    fn serial_matches_chrono(offset in 0i32..109_573) {
        let d = Date::MIN.add_days(offset).unwrap();
        let expected = NaiveDate::from_ymd_opt(1900, 1, 1)
            .unwrap()
            .checked_add_signed(chrono::Duration::days(i64::from(offset)))
            .unwrap();
        prop_assert_eq!(i32::from(d.year()), expected.year());
        prop_assert_eq!(u32::from(d.month()), expected.month());
        prop_assert_eq!(u32::from(d.day_of_month()), expected.day());
        prop_assert_eq!(
            u32::from(d.weekday().ordinal()),
            expected.weekday().number_from_monday()
        );
    }

    #[test]
    fn number_round_trips_through_from_number(offset in 0i32..109_573) {
        let d = Date::MIN.add_days(offset).unwrap();
        prop_assert_eq!(Date::from_number(d.number()).unwrap(), d);
    }

    #[test]
    fn add_days_is_consistent_with_difference(offset in 0i32..100_000, n in -3_000i32..3_000) {
        let d = Date::MIN.add_days(offset + 3_000).unwrap();
        let moved = d.add_days(n).unwrap();
        prop_assert_eq!(moved - d, n);
        prop_assert_eq!(d.days_between(moved), n);
    }
}
