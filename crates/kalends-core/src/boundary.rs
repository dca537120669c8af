//! Start/end of day, week, month and year.
//!
//! Week boundaries depend on which weekday a locale considers first, so the
//! computation sits behind [`BoundaryStrategy`] and [`Instant`] only composes
//! the strategy's steps.

use std::fmt::{Debug, Display, Formatter};

use time::{Date, Month, Time, Weekday};

use crate::domain::instant::days_in_month;
use crate::{CalendarError, Instant};

/// Calendar boundary an instant can be moved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    StartOfDay,
    EndOfDay,
    StartOfWeek,
    EndOfWeek,
    StartOfMonth,
    EndOfMonth,
    StartOfYear,
    EndOfYear,
}

impl Boundary {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StartOfDay => "start_of_day",
            Self::EndOfDay => "end_of_day",
            Self::StartOfWeek => "start_of_week",
            Self::EndOfWeek => "end_of_week",
            Self::StartOfMonth => "start_of_month",
            Self::EndOfMonth => "end_of_month",
            Self::StartOfYear => "start_of_year",
            Self::EndOfYear => "end_of_year",
        }
    }

    /// Moves `instant` to this boundary. Week, month and year starts are
    /// taken from the start of the day, their ends from the end of the day.
    pub fn apply(
        self,
        strategy: &dyn BoundaryStrategy,
        instant: Instant,
    ) -> Result<Instant, CalendarError> {
        log::trace!("applying {self} to {instant}");
        match self {
            Self::StartOfDay => strategy.start_of_day(instant),
            Self::EndOfDay => strategy.end_of_day(instant),
            Self::StartOfWeek => strategy.start_of_week(strategy.start_of_day(instant)?),
            Self::EndOfWeek => strategy.end_of_week(strategy.end_of_day(instant)?),
            Self::StartOfMonth => strategy.start_of_month(strategy.start_of_day(instant)?),
            Self::EndOfMonth => strategy.end_of_month(strategy.end_of_day(instant)?),
            Self::StartOfYear => strategy.start_of_year(strategy.start_of_day(instant)?),
            Self::EndOfYear => strategy.end_of_year(strategy.end_of_day(instant)?),
        }
    }
}

impl Display for Boundary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Computes calendar boundaries for an instant.
///
/// Implementations move a single axis: `start_of_week` only changes the
/// date, the time of day is normalized separately by `start_of_day`.
pub trait BoundaryStrategy: Debug + Send + Sync {
    fn start_of_day(&self, instant: Instant) -> Result<Instant, CalendarError>;
    fn end_of_day(&self, instant: Instant) -> Result<Instant, CalendarError>;
    fn start_of_week(&self, instant: Instant) -> Result<Instant, CalendarError>;
    fn end_of_week(&self, instant: Instant) -> Result<Instant, CalendarError>;
    fn start_of_month(&self, instant: Instant) -> Result<Instant, CalendarError>;
    fn end_of_month(&self, instant: Instant) -> Result<Instant, CalendarError>;
    fn start_of_year(&self, instant: Instant) -> Result<Instant, CalendarError>;
    fn end_of_year(&self, instant: Instant) -> Result<Instant, CalendarError>;
}

/// Gregorian boundaries with a configurable first day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekStartStrategy {
    first_day: Weekday,
}

impl WeekStartStrategy {
    pub const fn new(first_day: Weekday) -> Self {
        Self { first_day }
    }

    /// ISO 8601 weeks, starting on Monday.
    pub const fn iso() -> Self {
        Self::new(Weekday::Monday)
    }

    pub const fn first_day(&self) -> Weekday {
        self.first_day
    }

    fn days_into_week(&self, instant: Instant) -> i32 {
        let current = i32::from(instant.weekday().number_days_from_monday());
        let first = i32::from(self.first_day.number_days_from_monday());
        (current - first).rem_euclid(7)
    }
}

impl Default for WeekStartStrategy {
    fn default() -> Self {
        Self::iso()
    }
}

impl BoundaryStrategy for WeekStartStrategy {
    fn start_of_day(&self, instant: Instant) -> Result<Instant, CalendarError> {
        Ok(instant.with_time(Time::MIDNIGHT))
    }

    fn end_of_day(&self, instant: Instant) -> Result<Instant, CalendarError> {
        let end = Time::from_hms(23, 59, 59)
            .map_err(|_| CalendarError::out_of_range("end of day"))?;
        Ok(instant.with_time(end))
    }

    fn start_of_week(&self, instant: Instant) -> Result<Instant, CalendarError> {
        instant.sub_days(self.days_into_week(instant))
    }

    fn end_of_week(&self, instant: Instant) -> Result<Instant, CalendarError> {
        instant.add_days(6 - self.days_into_week(instant))
    }

    fn start_of_month(&self, instant: Instant) -> Result<Instant, CalendarError> {
        with_day(instant, instant.date().month(), 1)
    }

    fn end_of_month(&self, instant: Instant) -> Result<Instant, CalendarError> {
        with_day(instant, instant.date().month(), instant.days_in_month())
    }

    fn start_of_year(&self, instant: Instant) -> Result<Instant, CalendarError> {
        with_day(instant, Month::January, 1)
    }

    fn end_of_year(&self, instant: Instant) -> Result<Instant, CalendarError> {
        with_day(instant, Month::December, days_in_month(instant.year(), Month::December))
    }
}

fn with_day(instant: Instant, month: Month, day: u8) -> Result<Instant, CalendarError> {
    let date = Date::from_calendar_date(instant.year(), month, day)
        .map_err(|err| CalendarError::out_of_range(err.to_string()))?;
    Ok(instant.with_date(date))
}
