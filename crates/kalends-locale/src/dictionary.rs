use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::lang;
use crate::LocaleError;

/// Locales with a bundled dictionary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Sr,
    Tr,
}

impl Locale {
    pub const ALL: [Self; 3] = [Self::En, Self::Sr, Self::Tr];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Sr => "sr",
            Self::Tr => "tr",
        }
    }

    pub const fn plural_rule(self) -> PluralRule {
        match self {
            Self::En | Self::Tr => PluralRule::OneOther,
            Self::Sr => PluralRule::Slavic,
        }
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    /// Accepts a bare language or a tag such as `sr-Latn-RS` or `en_US`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let language = value
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match language.as_str() {
            "en" => Ok(Self::En),
            "sr" => Ok(Self::Sr),
            "tr" => Ok(Self::Tr),
            _ => Err(LocaleError::UnknownLocale {
                value: value.to_owned(),
            }),
        }
    }
}

/// Selects which `|`-separated form of a phrase applies to a count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralRule {
    /// Singular for exactly one, plural otherwise.
    OneOther,
    /// One / few / many, as in Serbian.
    Slavic,
}

impl PluralRule {
    pub fn form_index(self, count: i64) -> usize {
        let n = count.unsigned_abs();
        match self {
            Self::OneOther => usize::from(n != 1),
            Self::Slavic if n % 10 == 1 && n % 100 != 11 => 0,
            Self::Slavic if (2..=4).contains(&(n % 10)) && !(12..=14).contains(&(n % 100)) => 1,
            Self::Slavic => 2,
        }
    }
}

/// Read-only phrase and name table of one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleDictionary {
    locale: Locale,
    entries: &'static [(&'static str, &'static str)],
}

impl LocaleDictionary {
    pub const fn for_locale(locale: Locale) -> Self {
        let entries = match locale {
            Locale::En => lang::en::ENTRIES,
            Locale::Sr => lang::sr::ENTRIES,
            Locale::Tr => lang::tr::ENTRIES,
        };
        Self { locale, entries }
    }

    pub const fn locale(&self) -> Locale {
        self.locale
    }

    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == key)
            .map(|(_, value)| *value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(key, _)| *key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_locale_tags() {
        assert_eq!(Locale::from_str("sr").expect("known"), Locale::Sr);
        assert_eq!(Locale::from_str("en_US").expect("known"), Locale::En);
        assert_eq!(Locale::from_str("TR-tr").expect("known"), Locale::Tr);

        let err = Locale::from_str("de").expect_err("must fail");
        assert!(matches!(err, LocaleError::UnknownLocale { .. }));
    }

    #[test]
    fn slavic_plural_forms() {
        let rule = PluralRule::Slavic;
        let forms: Vec<usize> = [1, 2, 4, 5, 11, 12, 14, 21, 22, 25, 101, 111]
            .into_iter()
            .map(|count| rule.form_index(count))
            .collect();

        assert_eq!(forms, vec![0, 1, 1, 2, 2, 2, 2, 0, 1, 2, 0, 2]);
    }

    #[test]
    fn one_other_plural_forms() {
        assert_eq!(PluralRule::OneOther.form_index(1), 0);
        assert_eq!(PluralRule::OneOther.form_index(-1), 0);
        assert_eq!(PluralRule::OneOther.form_index(0), 1);
        assert_eq!(PluralRule::OneOther.form_index(2), 1);
    }

    #[test]
    fn every_locale_has_the_same_keys() {
        let english: Vec<_> = LocaleDictionary::for_locale(Locale::En).keys().collect();
        assert_eq!(english.len(), 34);

        for locale in Locale::ALL {
            let keys: Vec<_> = LocaleDictionary::for_locale(locale).keys().collect();
            assert_eq!(keys, english, "{locale}");
        }
    }
}
