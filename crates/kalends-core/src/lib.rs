//! # Kalends Core
//!
//! Calendar values and the algebra over closed date ranges.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`domain`] | [`Instant`], [`Interval`] and [`DateDiff`] |
//! | [`boundary`] | Start/end of day, week, month and year |
//! | [`range`] | [`DateTimeRange`] algebra and [`DateSeries`] |
//! | [`format`] | date()-style formatting and the [`Translator`] seam |
//! | [`property`] | Named calendar fields |
//! | [`calendar`] | [`Calendar`] context and [`CalendarConfig`] |
//! | [`error`] | Error types |
//!
//! ## Quick Start
//!
//! ```rust
//! use kalends_core::{DateTimeRange, Instant, Interval};
//!
//! let start = Instant::from_date(2024, 1, 1)?;
//! let first = DateTimeRange::from(start, 3, Interval::days(1))?;
//! let second = DateTimeRange::from(first.end().add_days(1)?, 3, Interval::days(1))?;
//!
//! assert!(first.abuts(&second));
//! let both = DateTimeRange::combination(&[second, first])?;
//! assert_eq!(both.to_vec().len(), 6);
//! # Ok::<(), kalends_core::CalendarError>(())
//! ```

pub mod boundary;
pub mod calendar;
pub mod domain;
pub mod error;
pub mod format;
mod parse;
pub mod property;
pub mod range;

pub use boundary::{Boundary, BoundaryStrategy, WeekStartStrategy};
pub use calendar::{
    parse_utc_offset, parse_weekday, Calendar, CalendarConfig, Clock, FixedClock, SystemClock,
};
pub use domain::{DateDiff, Instant, Interval, Unit};
pub use error::{CalendarError, CoreError};
pub use format::{NoTranslation, Translator};
pub use property::{Property, PropertyValue};
pub use range::{DateSeries, DateTimeRange};
pub use time::{UtcOffset, Weekday};
