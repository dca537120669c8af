// Shared fixtures for the behavior tests
pub use kalends_core::{
    Boundary, Calendar, CalendarConfig, CalendarError, DateTimeRange, FixedClock, Instant,
    Interval, Property, PropertyValue, Unit,
};
pub use kalends_locale::{
    calendar_for, formatter_for, DictionaryTranslator, Locale, PhraseKey, RelativeTimeFormatter,
};

/// Wall-clock instant in UTC; panics on invalid fields.
pub fn at(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Instant {
    Instant::create(year, month, day, hour, minute, second).expect("valid instant")
}

pub fn day(year: i32, month: u8, day: u8) -> Instant {
    at(year, month, day, 0, 0, 0)
}

/// A calendar whose clock is stopped at `now`.
pub fn frozen(now: Instant) -> Calendar {
    Calendar::new().with_clock(FixedClock::new(now))
}

/// Daily range over `[start, end]`.
pub fn days(start: Instant, end: Instant) -> DateTimeRange {
    DateTimeRange::new(start, end, Interval::days(1)).expect("valid range")
}
