//! date()-style formatting.
//!
//! Each ASCII letter below is a token, `\` escapes the next character and
//! everything else is copied verbatim.
//!
//! | token | output                                         |
//! |-------|------------------------------------------------|
//! | `d`   | day of month, two digits                       |
//! | `j`   | day of month                                   |
//! | `D`   | weekday, three letters (localized)             |
//! | `l`   | weekday (localized)                            |
//! | `N`   | ISO weekday, 1 (Monday) to 7 (Sunday)          |
//! | `S`   | English ordinal suffix of the day of month     |
//! | `w`   | weekday, 0 (Sunday) to 6 (Saturday)            |
//! | `z`   | day of year, from 0                            |
//! | `W`   | ISO week number, two digits                    |
//! | `F`   | month (localized)                              |
//! | `m`   | month, two digits                              |
//! | `M`   | month, three letters (localized)               |
//! | `n`   | month                                          |
//! | `t`   | days in month                                  |
//! | `L`   | `1` in leap years, `0` otherwise               |
//! | `o`   | ISO week-numbering year                        |
//! | `Y`   | year, at least four digits                     |
//! | `y`   | year, two digits                               |
//! | `a`/`A` | `am`/`pm`, `AM`/`PM`                         |
//! | `g`/`G` | 12-hour / 24-hour hour                       |
//! | `h`/`H` | 12-hour / 24-hour hour, two digits           |
//! | `i`   | minutes, two digits                            |
//! | `s`   | seconds, two digits                            |
//! | `u`/`v` | microseconds / milliseconds                  |
//! | `O`/`P` | offset as `+0200` / `+02:00`                 |
//! | `p`   | like `P`, but `Z` for UTC                      |
//! | `Z`   | offset in seconds                              |
//! | `U`   | Unix timestamp                                 |
//! | `c`   | ISO 8601, `Y-m-d\TH:i:sP`                      |
//! | `r`   | RFC 2822, `D, d M Y H:i:s O`                   |

use std::fmt::Debug;

use time::{OffsetDateTime, UtcOffset};

use crate::domain::instant::days_in_month;

/// Looks up localized weekday and month names.
///
/// Keys are lowercase English names such as `monday` or `january`.
pub trait Translator: Debug + Send + Sync {
    fn translate(&self, key: &str) -> Option<String>;
}

/// Translator that leaves the English rendering untouched.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoTranslation;

impl Translator for NoTranslation {
    fn translate(&self, _key: &str) -> Option<String> {
        None
    }
}

pub(crate) fn render(value: OffsetDateTime, pattern: &str, translator: &dyn Translator) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut chars = pattern.chars();

    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
            continue;
        }

        match token(value, ch, translator) {
            Some(rendered) => out.push_str(&rendered),
            None => out.push(ch),
        }
    }

    out
}

fn token(value: OffsetDateTime, ch: char, translator: &dyn Translator) -> Option<String> {
    let rendered = match ch {
        'd' => format!("{:02}", value.day()),
        'j' => value.day().to_string(),
        'D' => localized(&value.weekday().to_string(), true, translator),
        'l' => localized(&value.weekday().to_string(), false, translator),
        'N' => value.weekday().number_from_monday().to_string(),
        'S' => ordinal_suffix(value.day()).to_owned(),
        'w' => value.weekday().number_days_from_sunday().to_string(),
        'z' => (value.ordinal() - 1).to_string(),
        'W' => format!("{:02}", value.iso_week()),
        'F' => localized(&value.month().to_string(), false, translator),
        'm' => format!("{:02}", u8::from(value.month())),
        'M' => localized(&value.month().to_string(), true, translator),
        'n' => u8::from(value.month()).to_string(),
        't' => days_in_month(value.year(), value.month()).to_string(),
        'L' => u8::from(time::util::is_leap_year(value.year())).to_string(),
        'o' => value.to_iso_week_date().0.to_string(),
        'Y' => full_year(value.year()),
        'y' => format!("{:02}", value.year().rem_euclid(100)),
        'a' => meridiem(value.hour()).to_owned(),
        'A' => meridiem(value.hour()).to_ascii_uppercase(),
        'g' => twelve_hour(value.hour()).to_string(),
        'G' => value.hour().to_string(),
        'h' => format!("{:02}", twelve_hour(value.hour())),
        'H' => format!("{:02}", value.hour()),
        'i' => format!("{:02}", value.minute()),
        's' => format!("{:02}", value.second()),
        'u' => format!("{:06}", value.microsecond()),
        'v' => format!("{:03}", value.millisecond()),
        'O' => offset(value.offset(), ""),
        'P' => offset(value.offset(), ":"),
        'p' if value.offset().is_utc() => "Z".to_owned(),
        'p' => offset(value.offset(), ":"),
        'Z' => value.offset().whole_seconds().to_string(),
        'U' => value.unix_timestamp().to_string(),
        'c' => render(value, "Y-m-d\\TH:i:sP", &NoTranslation),
        'r' => render(value, "D, d M Y H:i:s O", &NoTranslation),
        _ => return None,
    };

    Some(rendered)
}

/// Substitutes a translated name only when it differs from the English one.
fn localized(english: &str, abbreviate: bool, translator: &dyn Translator) -> String {
    let shorten = |name: &str| -> String {
        if abbreviate {
            name.chars().take(3).collect()
        } else {
            name.to_owned()
        }
    };

    let default = shorten(english);
    match translator.translate(&english.to_lowercase()) {
        Some(translated) => {
            let translated = shorten(&translated);
            if !translated.is_empty() && translated != default {
                translated
            } else {
                default
            }
        }
        None => default,
    }
}

fn ordinal_suffix(day: u8) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

fn full_year(year: i32) -> String {
    if year < 0 {
        format!("-{:04}", year.unsigned_abs())
    } else {
        format!("{year:04}")
    }
}

fn meridiem(hour: u8) -> &'static str {
    if hour < 12 {
        "am"
    } else {
        "pm"
    }
}

fn twelve_hour(hour: u8) -> u8 {
    match hour % 12 {
        0 => 12,
        other => other,
    }
}

fn offset(value: UtcOffset, separator: &str) -> String {
    let sign = if value.is_negative() { '-' } else { '+' };
    format!(
        "{sign}{:02}{separator}{:02}",
        value.whole_hours().unsigned_abs(),
        value.minutes_past_hour().unsigned_abs()
    )
}

#[cfg(test)]
mod tests {
    use time::macros::offset;

    use crate::Instant;

    use super::*;

    #[derive(Debug)]
    struct Upper;

    impl Translator for Upper {
        fn translate(&self, key: &str) -> Option<String> {
            match key {
                "friday" => Some("PETAK".to_owned()),
                "may" => Some("Maj".to_owned()),
                "march" => Some("March".to_owned()),
                _ => None,
            }
        }
    }

    fn sample() -> Instant {
        // Friday.
        Instant::create(2024, 3, 1, 14, 5, 9).expect("valid")
    }

    #[test]
    fn renders_numeric_tokens() {
        let instant = sample();

        assert_eq!(instant.format("Y-m-d H:i:s"), "2024-03-01 14:05:09");
        assert_eq!(instant.format("j n y G g h A a"), "1 3 24 14 2 02 PM pm");
        assert_eq!(instant.format("N w z t L W o"), "5 5 60 31 1 09 2024");
        assert_eq!(instant.format("U"), "1709301909");
    }

    #[test]
    fn renders_names_and_suffixes() {
        let instant = sample();

        assert_eq!(instant.format("l, F jS"), "Friday, March 1st");
        assert_eq!(instant.format("D M"), "Fri Mar");

        let eleventh = Instant::from_date(2024, 3, 11).expect("valid");
        let twenty_second = Instant::from_date(2024, 3, 22).expect("valid");
        assert_eq!(eleventh.format("jS"), "11th");
        assert_eq!(twenty_second.format("jS"), "22nd");
    }

    #[test]
    fn escapes_and_literals() {
        let instant = sample();
        assert_eq!(instant.format("\\Y\\e\\a\\r: Y!"), "Year: 2024!");
    }

    #[test]
    fn renders_offsets() {
        let instant = sample().with_offset(offset!(-5:30));

        assert_eq!(instant.format("O P Z"), "-0530 -05:30 -19800");
        assert_eq!(sample().format("p"), "Z");
        assert_eq!(instant.format("c"), "2024-03-01T08:35:09-05:30");
        assert_eq!(sample().format("r"), "Fri, 01 Mar 2024 14:05:09 +0000");
    }

    #[test]
    fn substitutes_translated_names() {
        let instant = sample();

        assert_eq!(instant.format_with("l D", &Upper), "PETAK PET");
        // A translation equal to the English name is left alone.
        assert_eq!(instant.format_with("F", &Upper), "March");

        let may = Instant::from_date(2024, 5, 1).expect("valid");
        assert_eq!(may.format_with("F M", &Upper), "Maj Maj");
    }

    #[test]
    fn composite_tokens_stay_english() {
        assert_eq!(
            sample().format_with("r", &Upper),
            "Fri, 01 Mar 2024 14:05:09 +0000"
        );
    }
}
