//! Human phrasing of the distance between two instants.

use std::fmt::{Display, Formatter};

use kalends_core::{Calendar, DateDiff, Instant, Unit};

use crate::translator::DictionaryTranslator;

/// Dictionary keys of the relative-time phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhraseKey {
    In,
    Ago,
    FromNow,
    JustNow,
    And,
    Almost,
    After,
    Before,
}

impl PhraseKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Ago => "ago",
            Self::FromNow => "from_now",
            Self::JustNow => "just_now",
            Self::And => "and",
            Self::Almost => "almost",
            Self::After => "after",
            Self::Before => "before",
        }
    }
}

impl Display for PhraseKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders phrases such as "2 days ago" or "in 1 hour and 5 minutes".
///
/// The current time comes from the wrapped [`Calendar`]; swap in a
/// `FixedClock` for reproducible output.
#[derive(Debug, Clone)]
pub struct RelativeTimeFormatter {
    translator: DictionaryTranslator,
    calendar: Calendar,
    future: PhraseKey,
}

impl RelativeTimeFormatter {
    pub fn new(translator: DictionaryTranslator) -> Self {
        Self {
            translator,
            calendar: Calendar::default(),
            future: PhraseKey::In,
        }
    }

    pub fn with_calendar(mut self, calendar: Calendar) -> Self {
        self.calendar = calendar;
        self
    }

    /// Phrase wrapping future distances, [`PhraseKey::In`] by default.
    /// Pass [`PhraseKey::FromNow`] for "1 day from now".
    pub fn with_future_phrase(mut self, key: PhraseKey) -> Self {
        self.future = key;
        self
    }

    pub const fn translator(&self) -> &DictionaryTranslator {
        &self.translator
    }

    /// Distance from `reference` to `other` (now when `None`), naming up to
    /// `detail_level` non-zero units from the largest down.
    ///
    /// A `detail_level` of zero is treated as one.
    pub fn since(&self, reference: Instant, other: Option<Instant>, detail_level: usize) -> String {
        let diff = reference.diff(other.unwrap_or_else(|| self.calendar.now()), false);
        let units = leading_units(&diff, detail_level.max(1));
        if units.is_empty() {
            return self.phrase(PhraseKey::JustNow);
        }

        let text = self.join(&units);
        self.wrap(self.direction(&diff), &text)
    }

    /// Like [`since`](Self::since) with one unit, prefixed by "almost".
    pub fn almost(&self, reference: Instant, other: Option<Instant>) -> String {
        let diff = reference.diff(other.unwrap_or_else(|| self.calendar.now()), false);
        let units = leading_units(&diff, 1);
        if units.is_empty() {
            return self.phrase(PhraseKey::JustNow);
        }

        let text = self.wrap(PhraseKey::Almost, &self.join(&units));
        self.wrap(self.direction(&diff), &text)
    }

    /// Distance of `reference` relative to `other`: "3 days after" when
    /// `reference` is later, "3 days before" when it is earlier.
    pub fn relative(&self, reference: Instant, other: Instant, detail_level: usize) -> String {
        let diff = reference.diff(other, false);
        let units = leading_units(&diff, detail_level.max(1));
        if units.is_empty() {
            return self.phrase(PhraseKey::JustNow);
        }

        let key = if diff.invert { PhraseKey::After } else { PhraseKey::Before };
        self.wrap(key, &self.join(&units))
    }

    fn direction(&self, diff: &DateDiff) -> PhraseKey {
        if diff.invert {
            self.future
        } else {
            PhraseKey::Ago
        }
    }

    fn join(&self, units: &[(Unit, i64)]) -> String {
        let mut parts: Vec<String> = units
            .iter()
            .map(|(unit, amount)| {
                self.translator
                    .choice(unit.as_str(), *amount)
                    .unwrap_or_else(|| format!("{amount} {unit}"))
            })
            .collect();

        match parts.pop() {
            Some(last) if !parts.is_empty() => {
                format!("{} {} {last}", parts.join(", "), self.phrase(PhraseKey::And))
            }
            Some(last) => last,
            None => String::new(),
        }
    }

    fn wrap(&self, key: PhraseKey, time: &str) -> String {
        self.translator
            .get_with(key.as_str(), &[("time", time)])
            .unwrap_or_else(|| time.to_owned())
    }

    fn phrase(&self, key: PhraseKey) -> String {
        self.translator
            .get(key.as_str())
            .map_or_else(|| key.to_string(), str::to_owned)
    }
}

/// Non-zero units, largest first, with whole weeks split out of the days.
fn leading_units(diff: &DateDiff, limit: usize) -> Vec<(Unit, i64)> {
    let mut units = Vec::with_capacity(7);
    for (unit, amount) in diff.components() {
        if unit == Unit::Day && amount >= 7 {
            units.push((Unit::Week, amount / 7));
            units.push((Unit::Day, amount % 7));
        } else {
            units.push((unit, amount));
        }
    }

    units
        .into_iter()
        .filter(|(_, amount)| *amount != 0)
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use kalends_core::FixedClock;

    use super::*;
    use crate::Locale;

    fn at(year: i32, month: u8, day: u8, hour: u8, minute: u8) -> Instant {
        Instant::create(year, month, day, hour, minute, 0).expect("valid")
    }

    fn formatter(locale: Locale) -> RelativeTimeFormatter {
        let calendar = Calendar::new().with_clock(FixedClock::new(at(2024, 3, 10, 12, 0)));
        RelativeTimeFormatter::new(DictionaryTranslator::new(locale)).with_calendar(calendar)
    }

    #[test]
    fn past_distance_uses_ago() {
        let formatter = formatter(Locale::En);

        assert_eq!(formatter.since(at(2024, 3, 8, 12, 0), None, 1), "2 days ago");
        assert_eq!(formatter.since(at(2024, 3, 9, 12, 0), None, 1), "1 day ago");
        assert_eq!(formatter.since(at(2024, 3, 8, 9, 30), None, 3), "2 days, 2 hours and 30 minutes ago");
    }

    #[test]
    fn future_distance_uses_in() {
        let formatter = formatter(Locale::En);
        let reference = at(2024, 3, 10, 15, 5);

        assert_eq!(formatter.since(reference, None, 2), "in 3 hours and 5 minutes");
        assert_eq!(
            formatter.with_future_phrase(PhraseKey::FromNow).since(reference, None, 1),
            "3 hours from now"
        );
    }

    #[test]
    fn splits_weeks_out_of_days() {
        let formatter = formatter(Locale::En);

        assert_eq!(formatter.since(at(2024, 2, 22, 12, 0), None, 2), "2 weeks and 3 days ago");
        assert_eq!(formatter.since(at(2024, 2, 25, 12, 0), None, 2), "2 weeks ago");
    }

    #[test]
    fn same_instant_is_just_now() {
        let formatter = formatter(Locale::Tr);
        assert_eq!(formatter.since(at(2024, 3, 10, 12, 0), None, 1), "Şu anda");
    }

    #[test]
    fn detail_level_zero_names_one_unit() {
        let formatter = formatter(Locale::En);
        assert_eq!(formatter.since(at(2023, 1, 8, 12, 0), None, 0), "1 year ago");
    }

    #[test]
    fn localized_phrases() {
        assert_eq!(formatter(Locale::Sr).since(at(2024, 3, 8, 12, 0), None, 1), "Pre 2 dana");
        assert_eq!(formatter(Locale::Tr).since(at(2024, 3, 8, 12, 0), None, 1), "2 gün önce");
        assert_eq!(
            formatter(Locale::Sr).since(at(2024, 3, 8, 11, 0), None, 2),
            "Pre 2 dana i 1 sat"
        );
    }

    #[test]
    fn almost_wraps_largest_unit() {
        let formatter = formatter(Locale::En);

        assert_eq!(formatter.almost(at(2024, 3, 8, 9, 0), None), "almost 2 days ago");
        assert_eq!(formatter.almost(at(2024, 5, 10, 12, 0), None), "in almost 2 months");
        assert_eq!(
            formatter.almost(at(2024, 3, 8, 9, 0), Some(at(2024, 3, 8, 9, 0))),
            "just now"
        );
    }

    #[test]
    fn relative_between_instants() {
        let english = formatter(Locale::En);
        let serbian = formatter(Locale::Sr);
        let earlier = at(2024, 1, 1, 0, 0);
        let later = at(2024, 1, 4, 0, 0);

        assert_eq!(english.relative(later, earlier, 1), "3 days after");
        assert_eq!(english.relative(earlier, later, 1), "3 days before");
        assert_eq!(serbian.relative(later, earlier, 1), "Nakon 3 dana");
    }
}
