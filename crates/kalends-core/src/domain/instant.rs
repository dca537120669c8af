use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::ser::Error as SerError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::well_known::Rfc3339;
use time::{Date, Duration, Month, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset, Weekday};

use crate::boundary::{Boundary, BoundaryStrategy, WeekStartStrategy};
use crate::calendar::{Clock, SystemClock};
use crate::format::{self, NoTranslation, Translator};
use crate::property::{Property, PropertyValue};
use crate::{parse, CalendarError, DateDiff, Interval, Unit};

/// Immutable point in calendar time with a fixed UTC offset.
///
/// Equality and ordering compare the absolute point, so the same moment
/// expressed in two offsets is equal. Every operation returns a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant(OffsetDateTime);

impl Instant {
    /// The current moment in UTC, truncated to whole seconds.
    pub fn now() -> Self {
        Self::current(&SystemClock, UtcOffset::UTC)
    }

    /// Midnight of the current UTC day.
    pub fn today() -> Self {
        Self::current(&SystemClock, UtcOffset::UTC).midnight()
    }

    pub fn tomorrow() -> Result<Self, CalendarError> {
        Self::today().add_days(1)
    }

    pub fn yesterday() -> Result<Self, CalendarError> {
        Self::today().sub_days(1)
    }

    pub(crate) fn current(clock: &dyn Clock, offset: UtcOffset) -> Self {
        let now = clock.now().to_offset(offset);
        Self(now.replace_nanosecond(0).unwrap_or(now))
    }

    /// Builds a UTC instant from calendar fields.
    pub fn create(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, CalendarError> {
        Self::create_in(year, month, day, hour, minute, second, UtcOffset::UTC)
    }

    pub fn create_in(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        offset: UtcOffset,
    ) -> Result<Self, CalendarError> {
        let input = || format!("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}");

        let month = Month::try_from(month).map_err(|err| CalendarError::parse(&input(), err.to_string()))?;
        let date = Date::from_calendar_date(year, month, day)
            .map_err(|err| CalendarError::parse(&input(), err.to_string()))?;
        let time = Time::from_hms(hour, minute, second)
            .map_err(|err| CalendarError::parse(&input(), err.to_string()))?;

        Ok(Self(PrimitiveDateTime::new(date, time).assume_offset(offset)))
    }

    /// Midnight UTC of the given date.
    pub fn from_date(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        Self::create(year, month, day, 0, 0, 0)
    }

    /// The given wall-clock time on the current UTC day.
    pub fn from_time(hour: u8, minute: u8, second: u8) -> Result<Self, CalendarError> {
        let today = Self::today();
        Self::create(today.year(), today.month(), today.day(), hour, minute, second)
    }

    pub const fn from_offset_datetime(value: OffsetDateTime) -> Self {
        Self(value)
    }

    /// Parses ISO 8601 / RFC 3339 text, `Y-m-d H:i:s`, `Y-m-d` or one of the
    /// keywords `now`, `today`, `midnight`, `tomorrow`, `yesterday`.
    ///
    /// Text without an offset is read as UTC; text with one keeps it.
    pub fn parse(input: &str) -> Result<Self, CalendarError> {
        parse::parse_text(input, Self::current(&SystemClock, UtcOffset::UTC).0).map(Self)
    }

    /// Like [`Instant::parse`], reading offset-less text in `offset` and
    /// converting offset-carrying text to it.
    pub fn parse_in(input: &str, offset: UtcOffset) -> Result<Self, CalendarError> {
        parse::parse_text(input, Self::current(&SystemClock, offset).0)
            .map(|value| Self(value.to_offset(offset)))
    }

    /// Parses `input` according to date()-style `format` letters, see
    /// [`Instant::format`]. Fields missing from `format` are taken from the
    /// current time unless `format` contains `!` or `|`.
    pub fn from_format(format: &str, input: &str) -> Result<Self, CalendarError> {
        parse::parse_with_format(format, input, Self::current(&SystemClock, UtcOffset::UTC).0)
            .map(Self)
    }

    pub const fn into_inner(self) -> OffsetDateTime {
        self.0
    }

    /// The same absolute point displayed in another offset.
    pub fn with_offset(self, offset: UtcOffset) -> Self {
        Self(self.0.to_offset(offset))
    }

    /// Replaces the calendar date, keeping the wall-clock time and offset.
    pub const fn with_date(self, date: Date) -> Self {
        Self(self.0.replace_date(date))
    }

    /// Replaces the wall-clock time, keeping the date and offset.
    pub const fn with_time(self, time: Time) -> Self {
        Self(self.0.replace_time(time))
    }

    pub const fn date(self) -> Date {
        self.0.date()
    }

    pub const fn time(self) -> Time {
        self.0.time()
    }

    pub const fn offset(self) -> UtcOffset {
        self.0.offset()
    }

    pub const fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u8 {
        u8::from(self.0.month())
    }

    pub const fn day(self) -> u8 {
        self.0.day()
    }

    pub const fn hour(self) -> u8 {
        self.0.hour()
    }

    pub const fn minute(self) -> u8 {
        self.0.minute()
    }

    pub const fn second(self) -> u8 {
        self.0.second()
    }

    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    pub const fn unix_timestamp(self) -> i64 {
        self.0.unix_timestamp()
    }

    pub fn days_in_month(self) -> u8 {
        days_in_month(self.0.year(), self.0.month())
    }

    pub fn is_after(self, other: Self) -> bool {
        self > other
    }

    pub fn is_before(self, other: Self) -> bool {
        self < other
    }

    pub fn equals(self, other: Self) -> bool {
        self == other
    }

    /// Calendar difference from `self` to `other`, both read in `self`'s
    /// offset. `invert` is set when `other` is earlier, unless `absolute`.
    pub fn diff(self, other: Self, absolute: bool) -> DateDiff {
        let other = other.0.to_offset(self.0.offset());
        let invert = other < self.0;
        let (lower, higher) = if invert { (other, self.0) } else { (self.0, other) };

        DateDiff::between(
            PrimitiveDateTime::new(lower.date(), lower.time()),
            PrimitiveDateTime::new(higher.date(), higher.time()),
            invert && !absolute,
        )
    }

    /// Shifts by `interval`.
    ///
    /// Month and year shifts keep the day of month; when the target month is
    /// shorter the excess days roll over into the next month, so
    /// `2024-01-31 + 1 month` is `2024-03-02`. Day and week shifts move the
    /// local date and keep the wall-clock time; hour, minute and second shifts
    /// are exact elapsed time.
    pub fn add(self, interval: Interval) -> Result<Self, CalendarError> {
        self.shift(i64::from(interval.amount()), interval.unit())
            .ok_or_else(|| CalendarError::out_of_range(format!("{self} + {interval}")))
    }

    pub fn sub(self, interval: Interval) -> Result<Self, CalendarError> {
        self.shift(-i64::from(interval.amount()), interval.unit())
            .ok_or_else(|| CalendarError::out_of_range(format!("{self} - {interval}")))
    }

    fn shift(self, amount: i64, unit: Unit) -> Option<Self> {
        let shifted = match unit {
            Unit::Second => self.0.checked_add(Duration::seconds(amount)),
            Unit::Minute => self.0.checked_add(Duration::minutes(amount)),
            Unit::Hour => self.0.checked_add(Duration::hours(amount)),
            Unit::Day => shift_days(self.0, amount),
            Unit::Week => shift_days(self.0, amount * 7),
            Unit::Month => shift_months(self.0, amount),
            Unit::Year => shift_months(self.0, amount * 12),
        };
        shifted.map(Self)
    }

    pub fn add_seconds(self, value: i32) -> Result<Self, CalendarError> {
        self.add(Interval::seconds(value))
    }

    pub fn sub_seconds(self, value: i32) -> Result<Self, CalendarError> {
        self.sub(Interval::seconds(value))
    }

    pub fn add_minutes(self, value: i32) -> Result<Self, CalendarError> {
        self.add(Interval::minutes(value))
    }

    pub fn sub_minutes(self, value: i32) -> Result<Self, CalendarError> {
        self.sub(Interval::minutes(value))
    }

    pub fn add_hours(self, value: i32) -> Result<Self, CalendarError> {
        self.add(Interval::hours(value))
    }

    pub fn sub_hours(self, value: i32) -> Result<Self, CalendarError> {
        self.sub(Interval::hours(value))
    }

    pub fn add_days(self, value: i32) -> Result<Self, CalendarError> {
        self.add(Interval::days(value))
    }

    pub fn sub_days(self, value: i32) -> Result<Self, CalendarError> {
        self.sub(Interval::days(value))
    }

    pub fn add_weeks(self, value: i32) -> Result<Self, CalendarError> {
        self.add(Interval::weeks(value))
    }

    pub fn sub_weeks(self, value: i32) -> Result<Self, CalendarError> {
        self.sub(Interval::weeks(value))
    }

    pub fn add_months(self, value: i32) -> Result<Self, CalendarError> {
        self.add(Interval::months(value))
    }

    pub fn sub_months(self, value: i32) -> Result<Self, CalendarError> {
        self.sub(Interval::months(value))
    }

    pub fn add_years(self, value: i32) -> Result<Self, CalendarError> {
        self.add(Interval::years(value))
    }

    pub fn sub_years(self, value: i32) -> Result<Self, CalendarError> {
        self.sub(Interval::years(value))
    }

    /// Applies `boundary` using the given strategy.
    pub fn boundary_with(
        self,
        strategy: &dyn BoundaryStrategy,
        boundary: Boundary,
    ) -> Result<Self, CalendarError> {
        boundary.apply(strategy, self)
    }

    fn boundary(self, boundary: Boundary) -> Result<Self, CalendarError> {
        boundary.apply(&WeekStartStrategy::iso(), self)
    }

    pub fn start_of_day(self) -> Result<Self, CalendarError> {
        self.boundary(Boundary::StartOfDay)
    }

    pub fn end_of_day(self) -> Result<Self, CalendarError> {
        self.boundary(Boundary::EndOfDay)
    }

    pub fn start_of_week(self) -> Result<Self, CalendarError> {
        self.boundary(Boundary::StartOfWeek)
    }

    pub fn end_of_week(self) -> Result<Self, CalendarError> {
        self.boundary(Boundary::EndOfWeek)
    }

    pub fn start_of_month(self) -> Result<Self, CalendarError> {
        self.boundary(Boundary::StartOfMonth)
    }

    pub fn end_of_month(self) -> Result<Self, CalendarError> {
        self.boundary(Boundary::EndOfMonth)
    }

    pub fn start_of_year(self) -> Result<Self, CalendarError> {
        self.boundary(Boundary::StartOfYear)
    }

    pub fn end_of_year(self) -> Result<Self, CalendarError> {
        self.boundary(Boundary::EndOfYear)
    }

    /// RFC 3339 text with sub-second digits when present. Fails for years
    /// before 0, which RFC 3339 cannot express.
    pub fn format_rfc3339(self) -> Result<String, CalendarError> {
        self.0
            .format(&Rfc3339)
            .map_err(|err| CalendarError::out_of_range(format!("RFC 3339 formatting of {self}: {err}")))
    }

    /// Renders `pattern` with date()-style letters and English names.
    pub fn format(self, pattern: &str) -> String {
        format::render(self.0, pattern, &NoTranslation)
    }

    /// Renders `pattern`, substituting weekday and month names from
    /// `translator` where they differ from the English rendering.
    pub fn format_with(self, pattern: &str, translator: &dyn Translator) -> String {
        format::render(self.0, pattern, translator)
    }

    pub fn get(self, property: Property) -> PropertyValue {
        property.read(self)
    }

    pub(crate) fn midnight(self) -> Self {
        self.with_time(Time::MIDNIGHT)
    }
}

pub(crate) fn days_in_month(year: i32, month: Month) -> u8 {
    match month {
        Month::February if time::util::is_leap_year(year) => 29,
        Month::February => 28,
        Month::April | Month::June | Month::September | Month::November => 30,
        _ => 31,
    }
}

fn shift_days(value: OffsetDateTime, days: i64) -> Option<OffsetDateTime> {
    let date = value.date().checked_add(Duration::days(days))?;
    Some(value.replace_date(date))
}

fn shift_months(value: OffsetDateTime, months: i64) -> Option<OffsetDateTime> {
    let date = value.date();
    let index = i64::from(date.year()) * 12 + i64::from(u8::from(date.month())) - 1;
    let index = index.checked_add(months)?;

    let year = i32::try_from(index.div_euclid(12)).ok()?;
    let month = u8::try_from(index.rem_euclid(12) + 1).ok()?;
    let first = Date::from_calendar_date(year, Month::try_from(month).ok()?, 1).ok()?;

    // Days past the end of a short month overflow into the next one.
    let shifted = first.checked_add(Duration::days(i64::from(date.day()) - 1))?;
    Some(value.replace_date(shifted))
}

impl Display for Instant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format("c"))
    }
}

impl Serialize for Instant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let text = self.format_rfc3339().map_err(S::Error::custom)?;
        serializer.serialize_str(&text)
    }
}

impl<'de> Deserialize<'de> for Instant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}
