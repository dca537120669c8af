use serde::{Deserialize, Serialize};
use time::{Month, PrimitiveDateTime};

use crate::domain::instant::days_in_month;
use crate::Unit;

/// Calendar difference between two instants, decomposed into units.
///
/// Every component is non-negative; the direction is carried by `invert`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateDiff {
    pub years: i64,
    pub months: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    /// Set when the compared instant lies before the base instant.
    pub invert: bool,
    pub total_days: i64,
}

impl DateDiff {
    /// Decomposes the wall-clock distance from `lower` up to `higher`.
    ///
    /// Negative day counts borrow the length of the months preceding
    /// `higher`, walking backwards until the count is non-negative.
    pub(crate) fn between(lower: PrimitiveDateTime, higher: PrimitiveDateTime, invert: bool) -> Self {
        let mut seconds = i64::from(higher.second()) - i64::from(lower.second());
        if higher.nanosecond() < lower.nanosecond() {
            seconds -= 1;
        }
        let mut minutes = i64::from(higher.minute()) - i64::from(lower.minute());
        let mut hours = i64::from(higher.hour()) - i64::from(lower.hour());
        let mut days = i64::from(higher.day()) - i64::from(lower.day());
        let mut months = i64::from(u8::from(higher.month())) - i64::from(u8::from(lower.month()));
        let mut years = i64::from(higher.year()) - i64::from(lower.year());

        if seconds < 0 {
            seconds += 60;
            minutes -= 1;
        }
        if minutes < 0 {
            minutes += 60;
            hours -= 1;
        }
        if hours < 0 {
            hours += 24;
            days -= 1;
        }

        let mut year = higher.year();
        let mut month = higher.month();
        while days < 0 {
            month = month.previous();
            if month == Month::December {
                year -= 1;
            }
            days += i64::from(days_in_month(year, month));
            months -= 1;
        }
        while months < 0 {
            months += 12;
            years -= 1;
        }

        Self {
            years,
            months,
            days,
            hours,
            minutes,
            seconds,
            invert,
            total_days: (higher - lower).whole_days(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.components().iter().all(|(_, amount)| *amount == 0)
    }

    /// Components from the largest unit to the smallest, weeks excluded.
    pub fn components(&self) -> [(Unit, i64); 6] {
        [
            (Unit::Year, self.years),
            (Unit::Month, self.months),
            (Unit::Day, self.days),
            (Unit::Hour, self.hours),
            (Unit::Minute, self.minutes),
            (Unit::Second, self.seconds),
        ]
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn decomposes_with_borrowing() {
        let diff = DateDiff::between(
            datetime!(2023-11-30 22:30:15),
            datetime!(2024-01-02 01:10:05),
            false,
        );

        assert_eq!(
            (diff.years, diff.months, diff.days, diff.hours, diff.minutes, diff.seconds),
            (0, 1, 2, 2, 39, 50)
        );
        assert_eq!(diff.total_days, 32);
    }

    #[test]
    fn borrows_across_short_months() {
        let diff = DateDiff::between(datetime!(2024-01-31 00:00), datetime!(2024-03-01 00:00), false);

        assert_eq!((diff.months, diff.days), (0, 30));
        assert_eq!(diff.total_days, 30);
    }

    #[test]
    fn zero_diff_is_zero() {
        let at = datetime!(2024-05-05 05:05:05);
        assert!(DateDiff::between(at, at, false).is_zero());
    }
}
