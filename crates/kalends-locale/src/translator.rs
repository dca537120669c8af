use kalends_core::Translator;

use crate::dictionary::{Locale, LocaleDictionary};

/// Translator backed by a bundled dictionary, falling back to English for
/// keys the locale lacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryTranslator {
    dictionary: LocaleDictionary,
    fallback: LocaleDictionary,
}

impl Default for DictionaryTranslator {
    fn default() -> Self {
        Self::new(Locale::En)
    }
}

impl DictionaryTranslator {
    pub const fn new(locale: Locale) -> Self {
        Self {
            dictionary: LocaleDictionary::for_locale(locale),
            fallback: LocaleDictionary::for_locale(Locale::En),
        }
    }

    pub const fn locale(&self) -> Locale {
        self.dictionary.locale()
    }

    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.lookup(key).map(|(_, value)| value)
    }

    /// Looks up `key` and replaces each `:name` placeholder.
    pub fn get_with(&self, key: &str, replacements: &[(&str, &str)]) -> Option<String> {
        self.get(key).map(|value| substitute(value, replacements))
    }

    /// Picks the plural form of `key` for `count` and fills in `:count`.
    ///
    /// Forms are `|`-separated; a count whose form is missing uses the last one.
    pub fn choice(&self, key: &str, count: i64) -> Option<String> {
        let (dictionary, value) = self.lookup(key)?;
        let forms: Vec<&str> = value.split('|').map(str::trim).collect();
        let index = dictionary
            .locale()
            .plural_rule()
            .form_index(count)
            .min(forms.len() - 1);

        Some(substitute(forms[index], &[("count", &count.to_string())]))
    }

    fn lookup(&self, key: &str) -> Option<(LocaleDictionary, &'static str)> {
        if let Some(value) = self.dictionary.get(key) {
            return Some((self.dictionary, value));
        }

        let value = self.fallback.get(key)?;
        log::debug!(
            "no '{key}' entry for locale {}, using {}",
            self.dictionary.locale(),
            self.fallback.locale()
        );
        Some((self.fallback, value))
    }
}

impl Translator for DictionaryTranslator {
    fn translate(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_owned)
    }
}

fn substitute(value: &str, replacements: &[(&str, &str)]) -> String {
    replacements
        .iter()
        .fold(value.to_owned(), |text, (name, replacement)| {
            text.replace(&format!(":{name}"), replacement)
        })
}

#[cfg(test)]
mod tests {
    use kalends_core::Instant;

    use super::*;

    #[test]
    fn replaces_placeholders() {
        let translator = DictionaryTranslator::new(Locale::Sr);

        assert_eq!(
            translator.get_with("ago", &[("time", "2 dana")]).as_deref(),
            Some("Pre 2 dana")
        );
        assert_eq!(translator.get("missing"), None);
    }

    #[test]
    fn chooses_plural_forms() {
        let serbian = DictionaryTranslator::new(Locale::Sr);
        assert_eq!(serbian.choice("day", 1).as_deref(), Some("1 dan"));
        assert_eq!(serbian.choice("day", 3).as_deref(), Some("3 dana"));
        assert_eq!(serbian.choice("minute", 2).as_deref(), Some("2 minuta"));
        assert_eq!(serbian.choice("hour", 11).as_deref(), Some("11 sati"));

        let turkish = DictionaryTranslator::new(Locale::Tr);
        assert_eq!(turkish.choice("week", 1).as_deref(), Some("1 hafta"));
        assert_eq!(turkish.choice("week", 5).as_deref(), Some("5 hafta"));

        let english = DictionaryTranslator::default();
        assert_eq!(english.choice("year", 1).as_deref(), Some("1 year"));
        assert_eq!(english.choice("year", 0).as_deref(), Some("0 years"));
    }

    #[test]
    fn localizes_formatted_names() {
        // Friday.
        let instant = Instant::create(2024, 8, 2, 12, 0, 0).expect("valid");

        let serbian = DictionaryTranslator::new(Locale::Sr);
        assert_eq!(instant.format_with("l, j. F Y", &serbian), "Petak, 2. Avgust 2024");

        let turkish = DictionaryTranslator::new(Locale::Tr);
        assert_eq!(instant.format_with("D M", &turkish), "Cum Ağu");

        let english = DictionaryTranslator::default();
        assert_eq!(instant.format_with("l F", &english), "Friday August");
    }
}
