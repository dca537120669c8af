use time::format_description::well_known::Rfc3339;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Duration, Month, OffsetDateTime, PrimitiveDateTime, Time};

use crate::CalendarError;

const DATETIME_FORMATS: [&[BorrowedFormatItem<'static>]; 4] = [
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]"),
];

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parses the supported subset of free-form text. `now` supplies the clock
/// reading for keywords and the offset for text that has none.
pub(crate) fn parse_text(input: &str, now: OffsetDateTime) -> Result<OffsetDateTime, CalendarError> {
    let trimmed = input.trim();
    let midnight = now.replace_time(Time::MIDNIGHT);

    match trimmed.to_ascii_lowercase().as_str() {
        "now" => return Ok(now),
        "today" | "midnight" => return Ok(midnight),
        "tomorrow" => return shift(midnight, 1, input),
        "yesterday" => return shift(midnight, -1, input),
        _ => {}
    }

    if let Ok(parsed) = OffsetDateTime::parse(trimmed, &Rfc3339) {
        return Ok(parsed);
    }

    for format in DATETIME_FORMATS {
        if let Ok(parsed) = PrimitiveDateTime::parse(trimmed, format) {
            return Ok(parsed.assume_offset(now.offset()));
        }
    }

    if let Ok(date) = Date::parse(trimmed, DATE_FORMAT) {
        return Ok(midnight.replace_date(date));
    }

    Err(CalendarError::parse(input, "unrecognized date format"))
}

fn shift(value: OffsetDateTime, days: i64, input: &str) -> Result<OffsetDateTime, CalendarError> {
    value
        .checked_add(Duration::days(days))
        .ok_or_else(|| CalendarError::out_of_range(input))
}

#[derive(Debug, Default)]
struct Fields {
    year: Option<i32>,
    month: Option<u8>,
    day: Option<u8>,
    hour: Option<u8>,
    minute: Option<u8>,
    second: Option<u8>,
    timestamp: Option<i64>,
    reset: bool,
}

/// Parses `input` with the date() letters `d j m n Y y H G i s U`.
///
/// Unparsed date fields come from `now`; a day of `now` past the end of the
/// parsed month rolls over into the next one. Unparsed time fields come from
/// `now` too, unless some time field was parsed, in which case they are
/// zero. `!` or `|` in the format resets every unparsed field to the Unix
/// epoch instead.
pub(crate) fn parse_with_format(
    format: &str,
    input: &str,
    now: OffsetDateTime,
) -> Result<OffsetDateTime, CalendarError> {
    let fail = |reason: &str| CalendarError::parse(input, format!("{reason} (format '{format}')"));

    let mut fields = Fields::default();
    let mut rest = input;
    let mut letters = format.chars();

    while let Some(letter) = letters.next() {
        match letter {
            'd' | 'j' => fields.day = Some(take_number(&mut rest, 1, 2).ok_or_else(|| fail("expected day"))?),
            'm' | 'n' => fields.month = Some(take_number(&mut rest, 1, 2).ok_or_else(|| fail("expected month"))?),
            'Y' => fields.year = Some(take_number(&mut rest, 1, 4).ok_or_else(|| fail("expected year"))?),
            'y' => {
                let short: i32 = take_number(&mut rest, 2, 2).ok_or_else(|| fail("expected two-digit year"))?;
                fields.year = Some(if short < 70 { 2000 + short } else { 1900 + short });
            }
            'H' | 'G' => fields.hour = Some(take_number(&mut rest, 1, 2).ok_or_else(|| fail("expected hour"))?),
            'i' => fields.minute = Some(take_number(&mut rest, 2, 2).ok_or_else(|| fail("expected minutes"))?),
            's' => fields.second = Some(take_number(&mut rest, 2, 2).ok_or_else(|| fail("expected seconds"))?),
            'U' => {
                let negative = rest.starts_with('-');
                if negative {
                    rest = &rest[1..];
                }
                let value: i64 = take_number(&mut rest, 1, 19).ok_or_else(|| fail("expected timestamp"))?;
                fields.timestamp = Some(if negative { -value } else { value });
            }
            '!' | '|' => fields.reset = true,
            '\\' => {
                let literal = letters.next().ok_or_else(|| fail("dangling escape"))?;
                rest = expect_literal(rest, literal).ok_or_else(|| fail("literal mismatch"))?;
            }
            literal => {
                rest = expect_literal(rest, literal).ok_or_else(|| fail("literal mismatch"))?;
            }
        }
    }

    if !rest.is_empty() {
        return Err(fail("trailing data"));
    }

    if let Some(timestamp) = fields.timestamp {
        return OffsetDateTime::from_unix_timestamp(timestamp)
            .map(|value| value.to_offset(now.offset()))
            .map_err(|err| fail(&err.to_string()));
    }

    let base = if fields.reset {
        OffsetDateTime::UNIX_EPOCH.replace_offset(now.offset())
    } else {
        now
    };
    let time_parsed = fields.hour.is_some() || fields.minute.is_some() || fields.second.is_some();
    let time_default = |current: u8| if time_parsed || fields.reset { 0 } else { current };

    let year = fields.year.unwrap_or(base.year());
    let month = Month::try_from(fields.month.unwrap_or(u8::from(base.month())))
        .map_err(|err| fail(&err.to_string()))?;
    let date = match fields.day {
        Some(day) => Date::from_calendar_date(year, month, day).map_err(|err| fail(&err.to_string()))?,
        // A day taken from the clock overflows into the next month, as
        // month arithmetic does.
        None => Date::from_calendar_date(year, month, 1)
            .ok()
            .and_then(|first| first.checked_add(Duration::days(i64::from(base.day()) - 1)))
            .ok_or_else(|| fail("date out of range"))?,
    };
    let time = Time::from_hms(
        fields.hour.unwrap_or(time_default(base.hour())),
        fields.minute.unwrap_or(time_default(base.minute())),
        fields.second.unwrap_or(time_default(base.second())),
    )
    .map_err(|err| fail(&err.to_string()))?;

    Ok(PrimitiveDateTime::new(date, time).assume_offset(now.offset()))
}

fn take_number<T: std::str::FromStr>(rest: &mut &str, min: usize, max: usize) -> Option<T> {
    let len = rest.bytes().take(max).take_while(u8::is_ascii_digit).count();
    if len < min {
        return None;
    }
    let (digits, tail) = rest.split_at(len);
    *rest = tail;
    digits.parse().ok()
}

fn expect_literal(rest: &str, literal: char) -> Option<&str> {
    rest.strip_prefix(literal)
}
