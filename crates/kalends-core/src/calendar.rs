//! Explicit context for clock, offset, week convention and translations.

use std::fmt::Debug;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, UtcOffset, Weekday};

use crate::boundary::{Boundary, BoundaryStrategy, WeekStartStrategy};
use crate::format::{NoTranslation, Translator};
use crate::{parse, CalendarError, CoreError, DateTimeRange, Instant, Interval};

/// Source of the current time.
pub trait Clock: Debug + Send + Sync {
    fn now(&self) -> OffsetDateTime;
}

/// Reads the system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// Always reports the same moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(OffsetDateTime);

impl FixedClock {
    pub const fn new(instant: Instant) -> Self {
        Self(instant.into_inner())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}

/// Serializable calendar settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    pub locale: String,
    /// Offset as `+HH:MM` or `-HH:MM`.
    pub utc_offset: String,
    pub week_start: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            locale: String::from("en"),
            utc_offset: String::from("+00:00"),
            week_start: String::from("monday"),
        }
    }
}

impl CalendarConfig {
    pub fn from_json(content: &str) -> Result<Self, CoreError> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        log::debug!(
            "loaded calendar config: locale={} offset={} week_start={}",
            config.locale,
            config.utc_offset,
            config.week_start
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CalendarError> {
        self.offset()?;
        self.first_weekday()?;
        Ok(())
    }

    pub fn offset(&self) -> Result<UtcOffset, CalendarError> {
        parse_utc_offset(&self.utc_offset)
    }

    pub fn first_weekday(&self) -> Result<Weekday, CalendarError> {
        parse_weekday(&self.week_start)
    }
}

/// Parses `Z`, `+HH`, `+HH:MM` or `+HHMM` (and the `-` forms).
pub fn parse_utc_offset(value: &str) -> Result<UtcOffset, CalendarError> {
    let invalid = || CalendarError::InvalidOffset {
        value: value.to_owned(),
    };

    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("z") || trimmed.eq_ignore_ascii_case("utc") {
        return Ok(UtcOffset::UTC);
    }

    let (sign, rest) = match trimmed.split_at_checked(1) {
        Some(("+", rest)) => (1_i8, rest),
        Some(("-", rest)) => (-1_i8, rest),
        _ => return Err(invalid()),
    };
    let digits: String = rest.chars().filter(|ch| *ch != ':').collect();
    if !matches!(digits.len(), 2 | 4) || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let hours: i8 = digits[..2].parse().map_err(|_| invalid())?;
    let minutes: i8 = match digits.get(2..) {
        Some("") | None => 0,
        Some(minutes) => minutes.parse().map_err(|_| invalid())?,
    };

    UtcOffset::from_hms(sign * hours, sign * minutes, 0).map_err(|_| invalid())
}

pub fn parse_weekday(value: &str) -> Result<Weekday, CalendarError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "monday" | "mon" => Ok(Weekday::Monday),
        "tuesday" | "tue" => Ok(Weekday::Tuesday),
        "wednesday" | "wed" => Ok(Weekday::Wednesday),
        "thursday" | "thu" => Ok(Weekday::Thursday),
        "friday" | "fri" => Ok(Weekday::Friday),
        "saturday" | "sat" => Ok(Weekday::Saturday),
        "sunday" | "sun" => Ok(Weekday::Sunday),
        _ => Err(CalendarError::InvalidWeekday {
            value: value.to_owned(),
        }),
    }
}

/// Bundles the capabilities that instants and ranges consume implicitly:
/// display offset, clock, boundary strategy and translator.
///
/// `Calendar::default()` is UTC, the system clock, ISO weeks and English.
#[derive(Debug, Clone)]
pub struct Calendar {
    offset: UtcOffset,
    clock: Arc<dyn Clock>,
    strategy: Arc<dyn BoundaryStrategy>,
    translator: Arc<dyn Translator>,
}

impl Default for Calendar {
    fn default() -> Self {
        Self {
            offset: UtcOffset::UTC,
            clock: Arc::new(SystemClock),
            strategy: Arc::new(WeekStartStrategy::iso()),
            translator: Arc::new(NoTranslation),
        }
    }
}

impl Calendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offset and week start from `config`; the locale is wired by the
    /// locale crate.
    pub fn from_config(config: &CalendarConfig) -> Result<Self, CalendarError> {
        Ok(Self::default()
            .with_offset(config.offset()?)
            .with_strategy(WeekStartStrategy::new(config.first_weekday()?)))
    }

    pub fn with_offset(mut self, offset: UtcOffset) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn with_strategy(mut self, strategy: impl BoundaryStrategy + 'static) -> Self {
        self.strategy = Arc::new(strategy);
        self
    }

    pub fn with_translator(mut self, translator: impl Translator + 'static) -> Self {
        self.translator = Arc::new(translator);
        self
    }

    pub const fn offset(&self) -> UtcOffset {
        self.offset
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn strategy(&self) -> &dyn BoundaryStrategy {
        self.strategy.as_ref()
    }

    pub fn translator(&self) -> &dyn Translator {
        self.translator.as_ref()
    }

    pub fn now(&self) -> Instant {
        Instant::current(self.clock(), self.offset)
    }

    pub fn today(&self) -> Instant {
        self.now().midnight()
    }

    pub fn tomorrow(&self) -> Result<Instant, CalendarError> {
        self.today().add_days(1)
    }

    pub fn yesterday(&self) -> Result<Instant, CalendarError> {
        self.today().sub_days(1)
    }

    pub fn create(
        &self,
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Instant, CalendarError> {
        Instant::create_in(year, month, day, hour, minute, second, self.offset)
    }

    /// The given wall-clock time on the current day.
    pub fn from_time(&self, hour: u8, minute: u8, second: u8) -> Result<Instant, CalendarError> {
        let today = self.today();
        self.create(today.year(), today.month(), today.day(), hour, minute, second)
    }

    pub fn parse(&self, input: &str) -> Result<Instant, CalendarError> {
        parse::parse_text(input, self.now().into_inner())
            .map(|value| Instant::from_offset_datetime(value).with_offset(self.offset))
    }

    pub fn from_format(&self, format: &str, input: &str) -> Result<Instant, CalendarError> {
        parse::parse_with_format(format, input, self.now().into_inner()).map(Instant::from_offset_datetime)
    }

    pub fn boundary(&self, instant: Instant, boundary: Boundary) -> Result<Instant, CalendarError> {
        boundary.apply(self.strategy(), instant)
    }

    pub fn format(&self, instant: Instant, pattern: &str) -> String {
        instant.format_with(pattern, self.translator())
    }

    /// The empty sentinel range, `tomorrow..yesterday` by this calendar's clock.
    pub fn empty_range(&self) -> Result<DateTimeRange, CalendarError> {
        DateTimeRange::new(self.tomorrow()?, self.yesterday()?, Interval::days(1))
    }
}
