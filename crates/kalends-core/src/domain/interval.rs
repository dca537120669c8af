use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::CalendarError;

/// Calendar unit an [`Interval`] is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl Unit {
    pub const ALL: [Self; 7] = [
        Self::Year,
        Self::Month,
        Self::Week,
        Self::Day,
        Self::Hour,
        Self::Minute,
        Self::Second,
    ];

    /// Lowercase name, also used as the locale dictionary key.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    const fn designator(self) -> char {
        match self {
            Self::Second => 'S',
            Self::Minute | Self::Month => 'M',
            Self::Hour => 'H',
            Self::Day => 'D',
            Self::Week => 'W',
            Self::Year => 'Y',
        }
    }

    const fn is_time(self) -> bool {
        matches!(self, Self::Second | Self::Minute | Self::Hour)
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signed calendar duration expressed in exactly one unit.
///
/// Equality is unit-exact: `Interval::weeks(1) != Interval::days(7)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    amount: i32,
    unit: Unit,
}

impl Interval {
    pub const fn new(amount: i32, unit: Unit) -> Self {
        Self { amount, unit }
    }

    pub const fn seconds(amount: i32) -> Self {
        Self::new(amount, Unit::Second)
    }

    pub const fn minutes(amount: i32) -> Self {
        Self::new(amount, Unit::Minute)
    }

    pub const fn hours(amount: i32) -> Self {
        Self::new(amount, Unit::Hour)
    }

    pub const fn days(amount: i32) -> Self {
        Self::new(amount, Unit::Day)
    }

    pub const fn weeks(amount: i32) -> Self {
        Self::new(amount, Unit::Week)
    }

    pub const fn months(amount: i32) -> Self {
        Self::new(amount, Unit::Month)
    }

    pub const fn years(amount: i32) -> Self {
        Self::new(amount, Unit::Year)
    }

    pub const fn amount(self) -> i32 {
        self.amount
    }

    pub const fn unit(self) -> Unit {
        self.unit
    }

    pub const fn is_positive(self) -> bool {
        self.amount > 0
    }

    /// The same step in the other direction; `None` for an amount of
    /// `i32::MIN`, which has no positive counterpart.
    pub const fn negate(self) -> Option<Self> {
        match self.amount.checked_neg() {
            Some(amount) => Some(Self::new(amount, self.unit)),
            None => None,
        }
    }

    pub fn equals(self, other: Self) -> bool {
        self == other
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.amount < 0 { "-" } else { "" };
        let time = if self.unit.is_time() { "T" } else { "" };
        write!(
            f,
            "{sign}P{time}{}{}",
            self.amount.unsigned_abs(),
            self.unit.designator()
        )
    }
}

impl FromStr for Interval {
    type Err = CalendarError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || CalendarError::InvalidInterval {
            value: value.to_owned(),
        };

        let trimmed = value.trim().to_ascii_uppercase();
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.as_str()),
        };
        let rest = rest.strip_prefix('P').ok_or_else(invalid)?;
        let (is_time, rest) = match rest.strip_prefix('T') {
            Some(rest) => (true, rest),
            None => (false, rest),
        };

        let designator = rest.chars().last().ok_or_else(invalid)?;
        let digits = &rest[..rest.len() - designator.len_utf8()];
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let magnitude: i32 = digits.parse().map_err(|_| invalid())?;

        let unit = match (is_time, designator) {
            (false, 'Y') => Unit::Year,
            (false, 'M') => Unit::Month,
            (false, 'W') => Unit::Week,
            (false, 'D') => Unit::Day,
            (true, 'H') => Unit::Hour,
            (true, 'M') => Unit::Minute,
            (true, 'S') => Unit::Second,
            _ => return Err(invalid()),
        };

        let amount = if negative { -magnitude } else { magnitude };
        Ok(Self::new(amount, unit))
    }
}

impl Serialize for Interval {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Interval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::from_str(&value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_durations() {
        assert_eq!(Interval::from_str("P1D").expect("must parse"), Interval::days(1));
        assert_eq!(Interval::from_str("p2w").expect("must parse"), Interval::weeks(2));
        assert_eq!(Interval::from_str("PT5M").expect("must parse"), Interval::minutes(5));
        assert_eq!(Interval::from_str("P5M").expect("must parse"), Interval::months(5));
        assert_eq!(Interval::from_str("-P1Y").expect("must parse"), Interval::years(-1));
    }

    #[test]
    fn rejects_invalid_interval() {
        for value in ["", "P", "1D", "PD", "P1H", "PT1D", "P1.5D", "P1D2"] {
            let err = Interval::from_str(value).expect_err("must fail");
            assert!(matches!(err, CalendarError::InvalidInterval { .. }), "{value}");
        }
    }

    #[test]
    fn negate_flips_sign_unless_unrepresentable() {
        assert_eq!(Interval::days(3).negate(), Some(Interval::days(-3)));
        assert_eq!(Interval::hours(-4).negate(), Some(Interval::hours(4)));
        assert_eq!(Interval::seconds(i32::MIN).negate(), None);
    }

    #[test]
    fn displays_in_iso_form() {
        assert_eq!(Interval::hours(4).to_string(), "PT4H");
        assert_eq!(Interval::months(-3).to_string(), "-P3M");
    }

    #[test]
    fn equality_is_unit_exact() {
        assert!(Interval::days(7).equals(Interval::days(7)));
        assert!(!Interval::weeks(1).equals(Interval::days(7)));
        assert!(!Interval::days(1).equals(Interval::days(-1)));
    }

    #[test]
    fn serializes_as_string() {
        let json = serde_json::to_string(&Interval::weeks(2)).expect("must serialize");
        assert_eq!(json, "\"P2W\"");
        let back: Interval = serde_json::from_str(&json).expect("must deserialize");
        assert_eq!(back, Interval::weeks(2));
    }
}
