//! # Kalends Locale
//!
//! Bundled dictionaries (`en`, `sr`, `tr`), the [`DictionaryTranslator`]
//! that plugs them into formatting, and [`RelativeTimeFormatter`] for
//! phrases such as "2 days ago".
//!
//! ```rust
//! use kalends_core::{Calendar, FixedClock, Instant};
//! use kalends_locale::{DictionaryTranslator, Locale, RelativeTimeFormatter};
//!
//! let now = Instant::create(2024, 3, 10, 12, 0, 0)?;
//! let calendar = Calendar::new().with_clock(FixedClock::new(now));
//! let formatter = RelativeTimeFormatter::new(DictionaryTranslator::new(Locale::Sr))
//!     .with_calendar(calendar);
//!
//! assert_eq!(formatter.since(now.sub_days(2)?, None, 1), "Pre 2 dana");
//! # Ok::<(), kalends_core::CalendarError>(())
//! ```

use std::str::FromStr;

use kalends_core::{Calendar, CalendarConfig};

pub mod dictionary;
mod error;
mod lang;
pub mod since;
pub mod translator;

pub use dictionary::{Locale, LocaleDictionary, PluralRule};
pub use error::LocaleError;
pub use since::{PhraseKey, RelativeTimeFormatter};
pub use translator::DictionaryTranslator;

/// Builds a [`Calendar`] from `config`, translating names into its locale.
pub fn calendar_for(config: &CalendarConfig) -> Result<Calendar, LocaleError> {
    let locale = Locale::from_str(&config.locale)?;
    let calendar = Calendar::from_config(config)?;
    log::debug!("calendar for locale {locale} at offset {}", calendar.offset());
    Ok(calendar.with_translator(DictionaryTranslator::new(locale)))
}

/// A [`RelativeTimeFormatter`] in `config`'s locale, reading time from the
/// calendar [`calendar_for`] builds.
pub fn formatter_for(config: &CalendarConfig) -> Result<RelativeTimeFormatter, LocaleError> {
    let locale = Locale::from_str(&config.locale)?;
    Ok(RelativeTimeFormatter::new(DictionaryTranslator::new(locale)).with_calendar(calendar_for(config)?))
}
