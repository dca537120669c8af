use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CalendarError, Instant};

/// Derived calendar fields readable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Property {
    DaysInMonth,
    DayOfWeek,
    DayOfYear,
    IsLeapYear,
    Day,
    Hour,
    Minute,
    Second,
    Month,
    Ordinal,
    Week,
    Year,
}

impl Property {
    pub const ALL: [Self; 12] = [
        Self::DaysInMonth,
        Self::DayOfWeek,
        Self::DayOfYear,
        Self::IsLeapYear,
        Self::Day,
        Self::Hour,
        Self::Minute,
        Self::Second,
        Self::Month,
        Self::Ordinal,
        Self::Week,
        Self::Year,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DaysInMonth => "daysinmonth",
            Self::DayOfWeek => "dayofweek",
            Self::DayOfYear => "dayofyear",
            Self::IsLeapYear => "isleapyear",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
            Self::Month => "month",
            Self::Ordinal => "ordinal",
            Self::Week => "week",
            Self::Year => "year",
        }
    }

    /// The format token this property is rendered with.
    pub const fn token(self) -> &'static str {
        match self {
            Self::DaysInMonth => "t",
            Self::DayOfWeek => "N",
            Self::DayOfYear => "z",
            Self::IsLeapYear => "L",
            Self::Day => "d",
            Self::Hour => "H",
            Self::Minute => "i",
            Self::Second => "s",
            Self::Month => "m",
            Self::Ordinal => "S",
            Self::Week => "W",
            Self::Year => "Y",
        }
    }

    pub fn read(self, instant: Instant) -> PropertyValue {
        match self {
            Self::IsLeapYear => PropertyValue::Flag(time::util::is_leap_year(instant.year())),
            other => PropertyValue::Text(instant.format(other.token())),
        }
    }
}

impl Display for Property {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Property {
    type Err = CalendarError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let name = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|property| property.as_str() == name)
            .ok_or(CalendarError::InvalidProperty { name })
    }
}

/// Value of a [`Property`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Text(String),
    Flag(bool),
}

impl PropertyValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Flag(_) => None,
        }
    }

    pub const fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(value) => Some(*value),
            Self::Text(_) => None,
        }
    }
}

impl Display for PropertyValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Flag(value) => write!(f, "{value}"),
        }
    }
}
