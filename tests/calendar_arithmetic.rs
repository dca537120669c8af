//! Behavior-driven tests for instant arithmetic, boundaries and fields
//!
//! These tests pin the calendar rules callers depend on: how month ends
//! overflow, where weeks begin, and how configured calendars render.

use kalends_core::{UtcOffset, Weekday, WeekStartStrategy};
use kalends_tests::{
    at, calendar_for, day, frozen, Boundary, Calendar, CalendarConfig, CalendarError, FixedClock,
    Instant, Interval, Property, PropertyValue, Unit,
};

// =============================================================================
// Overflow policy
// =============================================================================

#[test]
fn when_month_end_is_shifted_into_a_short_month_excess_days_roll_over() {
    // Given: the last day of January in a leap year
    let instant = day(2024, 1, 31);

    // When: one month is added
    let shifted = instant.add_months(1).expect("in range");

    // Then: the two days February lacks carry into March
    assert_eq!(shifted, day(2024, 3, 2));
}

#[test]
fn when_leap_day_is_shifted_by_a_year_it_rolls_into_march() {
    let shifted = day(2024, 2, 29).add_years(1).expect("in range");
    assert_eq!(shifted, day(2025, 3, 1));

    let back = day(2024, 2, 29).sub_years(4).expect("in range");
    assert_eq!(back, day(2020, 2, 29));
}

#[test]
fn when_subtracting_months_the_same_policy_applies() {
    assert_eq!(day(2024, 3, 31).sub_months(1).expect("in range"), day(2024, 3, 2));
    assert_eq!(day(2024, 5, 15).sub_months(5).expect("in range"), day(2023, 12, 15));
}

#[test]
fn when_interval_crosses_the_year_limit_arithmetic_fails() {
    let err = day(9999, 12, 31).add_days(1).expect_err("past the last year");
    assert!(matches!(err, CalendarError::OutOfRange { .. }));
}

#[test]
fn when_shifting_by_every_unit_wall_clock_moves_as_expected() {
    let base = at(2024, 1, 1, 10, 0, 0);
    let cases = [
        (Interval::seconds(90), "2024-01-01 10:01:30"),
        (Interval::minutes(-30), "2024-01-01 09:30:00"),
        (Interval::hours(15), "2024-01-02 01:00:00"),
        (Interval::days(-1), "2023-12-31 10:00:00"),
        (Interval::weeks(2), "2024-01-15 10:00:00"),
        (Interval::months(13), "2025-02-01 10:00:00"),
        (Interval::years(-1), "2023-01-01 10:00:00"),
    ];

    for (interval, expected) in cases {
        let shifted = base.add(interval).expect("in range");
        assert_eq!(shifted.format("Y-m-d H:i:s"), expected, "{interval}");
        assert_eq!(shifted.sub(interval).expect("in range"), base, "{interval}");
    }
}

#[test]
fn interval_text_round_trips_through_iso_form() {
    let interval: Interval = "P3M".parse().expect("valid interval");
    assert_eq!(interval, Interval::new(3, Unit::Month));
    assert_eq!(Interval::hours(-4).to_string(), "-PT4H");

    assert!("3 months".parse::<Interval>().is_err());
}

// =============================================================================
// Diff
// =============================================================================

#[test]
fn when_diffing_across_months_days_borrow_from_the_previous_months() {
    let diff = at(2024, 1, 31, 12, 0, 0).diff(at(2024, 3, 1, 11, 0, 0), false);

    assert_eq!((diff.years, diff.months, diff.days, diff.hours), (0, 0, 29, 23));
    assert!(!diff.invert);
    assert_eq!(diff.total_days, 29);
}

#[test]
fn when_other_is_earlier_diff_is_inverted_unless_absolute() {
    let later = day(2024, 6, 1);
    let earlier = day(2023, 6, 1);

    assert!(later.diff(earlier, false).invert);
    assert!(!later.diff(earlier, true).invert);
    assert_eq!(later.diff(earlier, true).years, 1);
}

#[test]
fn instants_form_a_total_order_regardless_of_offset() {
    let utc = at(2024, 1, 1, 12, 0, 0);
    let shifted = utc.with_offset(UtcOffset::from_hms(5, 30, 0).expect("valid offset"));

    assert!(utc.equals(shifted));
    assert!(!utc.is_before(shifted) && !utc.is_after(shifted));
    assert_eq!(shifted.format("H:i P"), "17:30 +05:30");
}

// =============================================================================
// Boundaries
// =============================================================================

#[test]
fn when_boundaries_are_taken_they_snap_to_the_period_edges() {
    // Wednesday.
    let instant = at(2024, 2, 14, 15, 45, 10);
    let cases = [
        (instant.start_of_day(), "2024-02-14 00:00:00"),
        (instant.end_of_day(), "2024-02-14 23:59:59"),
        (instant.start_of_week(), "2024-02-12 00:00:00"),
        (instant.end_of_week(), "2024-02-18 23:59:59"),
        (instant.start_of_month(), "2024-02-01 00:00:00"),
        (instant.end_of_month(), "2024-02-29 23:59:59"),
        (instant.start_of_year(), "2024-01-01 00:00:00"),
        (instant.end_of_year(), "2024-12-31 23:59:59"),
    ];

    for (result, expected) in cases {
        assert_eq!(result.expect("in range").format("Y-m-d H:i:s"), expected);
    }
}

#[test]
fn when_week_starts_on_sunday_boundaries_follow_the_strategy() {
    let calendar = Calendar::new().with_strategy(WeekStartStrategy::new(Weekday::Sunday));
    // Sunday.
    let instant = at(2024, 2, 18, 9, 0, 0);

    let start = calendar.boundary(instant, Boundary::StartOfWeek).expect("in range");
    let end = calendar.boundary(instant, Boundary::EndOfWeek).expect("in range");

    assert_eq!(start.format("D Y-m-d H:i:s"), "Sun 2024-02-18 00:00:00");
    assert_eq!(end.format("D Y-m-d H:i:s"), "Sat 2024-02-24 23:59:59");
}

// =============================================================================
// Calendars and fields
// =============================================================================

#[test]
fn when_calendar_is_configured_it_renders_in_locale_and_offset() {
    // Given: a Serbian calendar one hour east of UTC whose clock is stopped
    let config = CalendarConfig::from_json(r#"{"locale": "sr", "utc_offset": "+01:00"}"#)
        .expect("valid config");
    let calendar = calendar_for(&config)
        .expect("known locale")
        .with_clock(FixedClock::new(at(2024, 12, 31, 23, 30, 0)));

    // When: the current moment is rendered
    let now = calendar.now();

    // Then: the date has rolled into the new year in local time
    assert_eq!(calendar.format(now, "l, j. F Y H:i"), "Sreda, 1. Januar 2025 00:30");
    assert_eq!(calendar.today().format("Y-m-d H:i P"), "2025-01-01 00:00 +01:00");
}

#[test]
fn when_empty_range_is_requested_it_uses_the_calendar_clock() {
    let calendar = frozen(day(2024, 6, 10));

    let empty = calendar.empty_range().expect("in range");

    assert!(empty.is_empty());
    assert_eq!(empty.start(), day(2024, 6, 11));
    assert_eq!(empty.end(), day(2024, 6, 9));
}

#[test]
fn when_text_is_parsed_keywords_follow_the_calendar_clock() {
    let calendar = frozen(at(2024, 6, 10, 14, 0, 0));

    assert_eq!(calendar.parse("tomorrow").expect("keyword"), day(2024, 6, 11));
    assert_eq!(calendar.parse("2024-06-01 08:15").expect("datetime"), at(2024, 6, 1, 8, 15, 0));
    assert_eq!(
        calendar.from_format("d.m.Y", "03.02.2021").expect("formatted"),
        at(2021, 2, 3, 14, 0, 0)
    );

    let err = calendar.parse("someday").expect_err("unknown text");
    assert!(matches!(err, CalendarError::Parse { .. }));
}

#[test]
fn when_fields_are_invalid_creation_fails_with_parse_error() {
    for (month, dom) in [(2, 30), (13, 1), (4, 31)] {
        let err = Instant::create(2023, month, dom, 0, 0, 0).expect_err("invalid date");
        assert!(matches!(err, CalendarError::Parse { .. }), "{month}-{dom}");
    }
}

#[test]
fn when_properties_are_read_by_name_they_match_the_calendar() {
    let instant = day(2023, 12, 31);
    let read = |name: &str| instant.get(name.parse::<Property>().expect("known property"));

    assert_eq!(read("isleapyear"), PropertyValue::Flag(false));
    assert_eq!(read("daysinmonth").to_string(), "31");
    assert_eq!(read("dayofyear").to_string(), "364");
    assert_eq!(read("dayofweek").to_string(), "7");
    assert_eq!(read("ordinal").to_string(), "st");
    assert_eq!(read("week").to_string(), "52");

    assert!("weekday".parse::<Property>().is_err());
}
