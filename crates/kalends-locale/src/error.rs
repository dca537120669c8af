use kalends_core::CalendarError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("unknown locale '{value}'")]
    UnknownLocale { value: String },

    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
