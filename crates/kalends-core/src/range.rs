//! Closed date ranges and their algebra.
//!
//! A [`DateTimeRange`] includes both of its ends and carries the step used
//! to enumerate it. A range whose start lies after its end is empty; such
//! ranges are produced by [`DateTimeRange::gap`] and never rejected.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::{CalendarError, Instant, Interval};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRange", into = "RawRange")]
pub struct DateTimeRange {
    start: Instant,
    end: Instant,
    interval: Interval,
}

#[derive(Serialize, Deserialize)]
struct RawRange {
    start: Instant,
    end: Instant,
    interval: Interval,
}

impl TryFrom<RawRange> for DateTimeRange {
    type Error = CalendarError;

    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end, raw.interval)
    }
}

impl From<DateTimeRange> for RawRange {
    fn from(range: DateTimeRange) -> Self {
        Self {
            start: range.start,
            end: range.end,
            interval: range.interval,
        }
    }
}

impl DateTimeRange {
    /// Fails when the interval is not positive, or when the range is not
    /// empty and a single step from `start` already passes `end`.
    pub fn new(start: Instant, end: Instant, interval: Interval) -> Result<Self, CalendarError> {
        if !interval.is_positive() {
            log::debug!("rejecting range {start} - {end}: non-positive interval {interval}");
            return Err(CalendarError::InvalidInterval {
                value: interval.to_string(),
            });
        }

        if start.is_before(end) && start.add(interval)?.is_after(end) {
            log::debug!("rejecting range {start} - {end}: interval {interval} is too big");
            return Err(CalendarError::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
                interval: interval.to_string(),
            });
        }

        Ok(Self {
            start,
            end,
            interval,
        })
    }

    /// The range of `amount` instants beginning at `start`.
    pub fn from(start: Instant, amount: i64, interval: Interval) -> Result<Self, CalendarError> {
        let end = step(start, amount, |current| current.add(interval))?;
        Self::new(start, end, interval)
    }

    /// The range of `amount` instants ending at `end`.
    pub fn to(end: Instant, amount: i64, interval: Interval) -> Result<Self, CalendarError> {
        let start = step(end, amount, |current| current.sub(interval))?;
        Self::new(start, end, interval)
    }

    /// The canonical empty range, `tomorrow..yesterday` in UTC stepped by
    /// one day.
    pub fn empty() -> Result<Self, CalendarError> {
        Self::new(Instant::tomorrow()?, Instant::yesterday()?, Interval::days(1))
    }

    pub const fn start(&self) -> Instant {
        self.start
    }

    pub const fn end(&self) -> Instant {
        self.end
    }

    pub const fn interval(&self) -> Interval {
        self.interval
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_after(self.end)
    }

    pub fn includes(&self, instant: Instant) -> bool {
        !instant.is_before(self.start) && !instant.is_after(self.end)
    }

    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }

    pub fn includes_range(&self, other: &Self) -> bool {
        self.includes(other.start) && self.includes(other.end)
    }

    pub fn overlaps(&self, other: &Self) -> bool {
        other.includes(self.start) || other.includes(self.end) || self.includes_range(other)
    }

    /// The range strictly between `self` and `other`, stepped by this
    /// range's interval. Overlapping ranges have the canonical empty gap.
    pub fn gap(&self, other: &Self) -> Result<Self, CalendarError> {
        if self.overlaps(other) {
            return Self::empty();
        }

        let (start, end) = self.gap_bounds(other)?;
        Self::new(start, end, self.interval)
    }

    /// True when the ranges do not overlap and nothing lies between them.
    pub fn abuts(&self, other: &Self) -> bool {
        if self.overlaps(other) {
            return false;
        }

        match self.gap_bounds(other) {
            Ok((start, end)) => start.is_after(end),
            Err(_) => false,
        }
    }

    fn gap_bounds(&self, other: &Self) -> Result<(Instant, Instant), CalendarError> {
        let (lower, higher) = if self.start.is_before(other.start) {
            (self, other)
        } else {
            (other, self)
        };

        Ok((
            lower.end.add(self.interval)?,
            higher.start.sub(self.interval)?,
        ))
    }

    /// A fresh cursor over every instant from `start` to `end`.
    pub fn iter(&self) -> DateSeries {
        DateSeries {
            next: (!self.is_empty()).then_some(self.start),
            end: self.end,
            interval: self.interval,
        }
    }

    pub fn to_vec(&self) -> Vec<Instant> {
        self.iter().collect()
    }

    /// Orders ranges by start, then by end.
    ///
    /// Only ranges with equal intervals are comparable.
    pub fn compare(a: &Self, b: &Self) -> Result<Ordering, CalendarError> {
        if !a.interval.equals(b.interval) {
            log::debug!("cannot compare ranges stepped by {} and {}", a.interval, b.interval);
            return Err(CalendarError::IncomparableRanges {
                left: a.interval.to_string(),
                right: b.interval.to_string(),
            });
        }

        Ok(a.start.cmp(&b.start).then_with(|| a.end.cmp(&b.end)))
    }

    /// Sorts a copy of `ranges` with [`DateTimeRange::compare`].
    pub fn sorted(ranges: &[Self]) -> Result<Vec<Self>, CalendarError> {
        if let Some(first) = ranges.first() {
            for range in &ranges[1..] {
                Self::compare(first, range)?;
            }
        }

        let mut sorted = ranges.to_vec();
        sorted.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.end.cmp(&b.end)));
        Ok(sorted)
    }

    /// True when, once sorted, every range abuts the next one.
    pub fn is_contiguous(ranges: &[Self]) -> Result<bool, CalendarError> {
        let sorted = Self::sorted(ranges)?;
        Ok(sorted.windows(2).all(|pair| pair[0].abuts(&pair[1])))
    }

    /// Merges contiguous ranges into one spanning all of them.
    pub fn combination(ranges: &[Self]) -> Result<Self, CalendarError> {
        let sorted = Self::sorted(ranges)?;
        let (Some(first), Some(last)) = (sorted.first(), sorted.last()) else {
            return Err(CalendarError::NothingToCombine);
        };

        if !sorted.windows(2).all(|pair| pair[0].abuts(&pair[1])) {
            log::debug!("unable to combine {} ranges: not contiguous", ranges.len());
            return Err(CalendarError::NotContiguous {
                count: ranges.len(),
            });
        }

        Self::new(first.start, last.end, first.interval)
    }
}

fn step(
    base: Instant,
    amount: i64,
    next: impl Fn(Instant) -> Result<Instant, CalendarError>,
) -> Result<Instant, CalendarError> {
    if amount < 2 {
        return Err(CalendarError::InvalidAmount { amount });
    }

    // Both ends count towards the amount.
    (2..=amount).try_fold(base, |current, _| next(current))
}

impl Display for DateTimeRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {}",
            self.start.format("Y-m-d H:i:s"),
            self.end.format("Y-m-d H:i:s")
        )
    }
}

impl IntoIterator for &DateTimeRange {
    type Item = Instant;
    type IntoIter = DateSeries;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Cursor over the instants of a range, owned by a single traversal.
///
/// Stops after `end`, or early if stepping leaves the supported calendar.
#[derive(Debug, Clone)]
pub struct DateSeries {
    next: Option<Instant>,
    end: Instant,
    interval: Interval,
}

impl DateSeries {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

impl Iterator for DateSeries {
    type Item = Instant;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current
            .add(self.interval)
            .ok()
            .filter(|next| !next.is_after(self.end));
        Some(current)
    }
}

impl FusedIterator for DateSeries {}
