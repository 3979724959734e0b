//! Long-weekend detection over hand-built holiday sets.

use hc_core::DateNumber;
use hc_engine::{find_period, HolidayPeriod, Language, PeriodRules};
use hc_time::{Date, HolidayCalendar};

fn date(n: DateNumber) -> Date {
    Date::from_number(n).unwrap()
}

fn period(n: DateNumber, cal: &HolidayCalendar) -> Option<HolidayPeriod> {
    find_period(date(n), cal, &PeriodRules::default())
}

#[test]
fn thursday_holiday_before_a_working_friday_is_alone() {
    // Thu 05-01, Sat 03, Sun 04, Mon 05; Fri 05-02 is a working day
    let cal = HolidayCalendar::from_numbers("may", [20250501, 20250503, 20250504, 20250505]);
    assert_eq!(period(20250501, &cal), None);
    assert_eq!(period(20250503, &cal), None);
    assert_eq!(period(20250504, &cal), None);

    let p = period(20250505, &cal).unwrap();
    assert_eq!(p.start, date(20250503));
    assert_eq!(p.end, date(20250505));
    assert_eq!(p.length_days, 3);
    assert!(p.includes_weekend);
}

#[test]
fn bridged_run_is_owned_by_its_first_weekday_holiday() {
    let cal = HolidayCalendar::from_numbers(
        "may",
        [20250501, 20250502, 20250503, 20250504, 20250505],
    );
    let p = period(20250501, &cal).unwrap();
    assert_eq!(p.length_days, 5);
    assert!(p.includes_weekend);
    assert!(!p.truncated);
    assert_eq!(p.describe(Language::Ko), "5일 연휴 (주말 포함)");
    for other in [20250502, 20250503, 20250504, 20250505] {
        assert_eq!(period(other, &cal), None, "{other} must not own the run");
    }
}

#[test]
fn chuseok_2025_is_one_seven_day_run() {
    // Fri 10-03 .. Thu 10-09, Fri 10-10 is a working day
    let cal = HolidayCalendar::from_numbers(
        "chuseok",
        [20251003, 20251005, 20251006, 20251007, 20251008, 20251009],
    );
    let p = period(20251003, &cal).unwrap();
    assert_eq!(p.length_days, 7);
    assert_eq!(p.end, date(20251009));
    assert!(!p.truncated);
    assert_eq!(p.describe(Language::En), "7-day break (incl. weekend)");
    assert!((20251004..=20251009).all(|n| period(n, &cal).is_none()));
}

#[test]
fn weekend_only_run_falls_back_to_start() {
    // A listed Sunday with no weekday holiday around it: the run is Sat-Sun
    let cal = HolidayCalendar::from_numbers("sunday", [20251005]);
    assert_eq!(period(20251005, &cal), None);

    // Widen the minimum down to two days: the Saturday owns it
    let rules = PeriodRules {
        min_length: 2,
        ..PeriodRules::default()
    };
    assert_eq!(find_period(date(20251005), &cal, &rules), None);
    let p = find_period(date(20251004), &cal, &rules).unwrap();
    assert_eq!(p.length_days, 2);
}

#[test]
fn holiday_with_no_adjacent_days_off() {
    // Thu 2025-12-25 between working Wed 24 and Fri 26
    let cal = HolidayCalendar::from_numbers("xmas", [20251225]);
    assert_eq!(period(20251225, &cal), None);
}
