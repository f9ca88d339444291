//! Localized string values, one slot per supported language.

use crate::locale::LanguageCode;

/// An immutable bundle of translated strings, one per [`LanguageCode`].
///
/// Every slot is always present: a missing translation is the empty
/// string sentinel, never an absent field. Entries are values produced
/// by a single accessor call; they carry no identity or lifecycle of
/// their own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizedEntry {
    values: [String; LanguageCode::COUNT],
}

impl LocalizedEntry {
    /// Entry with every slot holding the missing-translation sentinel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value for one language, consuming and returning the entry.
    #[must_use]
    pub fn with(mut self, language: LanguageCode, value: impl Into<String>) -> Self {
        self.values[language.index()] = value.into();
        self
    }

    /// The stored string for `language`, verbatim.
    ///
    /// Total over [`LanguageCode`]: never fails and never falls back. A
    /// missing translation comes back as the empty sentinel; callers
    /// that want substitution go through
    /// [`Catalog::text`](crate::catalog::Catalog::text) or
    /// [`FallbackPolicy::apply`] explicitly.
    #[must_use]
    pub fn get(&self, language: LanguageCode) -> &str {
        &self.values[language.index()]
    }

    /// Whether the translation for `language` is absent.
    #[must_use]
    pub fn is_missing(&self, language: LanguageCode) -> bool {
        self.values[language.index()].is_empty()
    }

    /// Languages whose slot still holds the sentinel.
    #[must_use]
    pub fn missing_languages(&self) -> Vec<LanguageCode> {
        LanguageCode::ALL
            .into_iter()
            .filter(|&language| self.is_missing(language))
            .collect()
    }

    /// Whether every language has a non-empty translation.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        LanguageCode::ALL
            .into_iter()
            .all(|language| !self.is_missing(language))
    }
}

/// What a read does when the requested language's slot is empty.
///
/// The default is no fallback: translation gaps surface as the sentinel
/// and get caught by coverage tooling instead of being papered over at
/// read time. Fallback is an explicit, per-catalog opt-in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Return the stored value verbatim, sentinel included.
    #[default]
    NoFallback,
    /// Substitute the given language's value when the requested slot is
    /// empty.
    Language(LanguageCode),
}

impl FallbackPolicy {
    /// Read `entry` for `language` under this policy.
    #[must_use]
    pub fn apply<'a>(self, entry: &'a LocalizedEntry, language: LanguageCode) -> &'a str {
        match self {
            Self::NoFallback => entry.get(language),
            Self::Language(fallback) => {
                let value = entry.get(language);
                if value.is_empty() { entry.get(fallback) } else { value }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_entry_is_all_sentinel() {
        let entry = LocalizedEntry::new();
        for language in LanguageCode::ALL {
            assert_eq!(entry.get(language), "");
            assert!(entry.is_missing(language));
        }
        assert_eq!(entry.missing_languages(), LanguageCode::ALL.to_vec());
        assert!(!entry.is_complete());
    }

    #[test]
    fn with_sets_exactly_one_slot() {
        let entry = LocalizedEntry::new().with(LanguageCode::Japanese, "こんにちは！");
        assert_eq!(entry.get(LanguageCode::Japanese), "こんにちは！");
        assert_eq!(entry.get(LanguageCode::EnglishBritish), "");
        assert_eq!(entry.missing_languages(), vec![LanguageCode::EnglishBritish]);
    }

    #[test]
    fn complete_entry_has_no_missing_languages() {
        let entry = LocalizedEntry::new()
            .with(LanguageCode::EnglishBritish, "Hello!")
            .with(LanguageCode::Japanese, "こんにちは！");
        assert!(entry.is_complete());
        assert!(entry.missing_languages().is_empty());
    }

    #[test]
    fn no_fallback_returns_sentinel_verbatim() {
        let entry = LocalizedEntry::new().with(LanguageCode::EnglishBritish, "Hello!");
        assert_eq!(
            FallbackPolicy::NoFallback.apply(&entry, LanguageCode::Japanese),
            ""
        );
    }

    #[test]
    fn language_fallback_substitutes_only_when_missing() {
        let policy = FallbackPolicy::Language(LanguageCode::EnglishBritish);
        let partial = LocalizedEntry::new().with(LanguageCode::EnglishBritish, "Hello!");
        assert_eq!(policy.apply(&partial, LanguageCode::Japanese), "Hello!");

        let full = partial.with(LanguageCode::Japanese, "こんにちは！");
        assert_eq!(policy.apply(&full, LanguageCode::Japanese), "こんにちは！");
    }
}
