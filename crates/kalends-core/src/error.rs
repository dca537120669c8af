use thiserror::Error;

/// Validation and algebra errors exposed by `kalends-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("unable to parse '{input}': {reason}")]
    Parse { input: String, reason: String },

    #[error("interval {interval} is too big for range {start} - {end}")]
    InvalidRange {
        start: String,
        end: String,
        interval: String,
    },
    #[error("amount must be at least 2, got {amount}")]
    InvalidAmount { amount: i64 },
    #[error("unable to combine {count} ranges that are not contiguous")]
    NotContiguous { count: usize },
    #[error("no ranges to combine")]
    NothingToCombine,
    #[error("ranges stepped by {left} and {right} cannot be compared")]
    IncomparableRanges { left: String, right: String },

    #[error("invalid interval '{value}', expected an ISO 8601 duration such as P1D or PT2H")]
    InvalidInterval { value: String },
    #[error("invalid property '{name}'")]
    InvalidProperty { name: String },
    #[error("invalid utc offset '{value}', expected +HH:MM")]
    InvalidOffset { value: String },
    #[error("invalid weekday '{value}'")]
    InvalidWeekday { value: String },

    #[error("{operation} is outside the supported calendar range")]
    OutOfRange { operation: String },
}

impl CalendarError {
    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.to_owned(),
            reason: reason.into(),
        }
    }

    pub(crate) fn out_of_range(operation: impl Into<String>) -> Self {
        Self::OutOfRange {
            operation: operation.into(),
        }
    }
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),
}
