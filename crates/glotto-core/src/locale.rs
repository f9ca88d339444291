//! Closed registry of supported languages.
//!
//! The set is fixed at build time: adding or removing a language is a
//! source change that propagates, through [`LanguageCode::COUNT`], to
//! every [`LocalizedEntry`](crate::entry::LocalizedEntry) slot.

use std::fmt;

/// A supported language, identified by its canonical BCP 47 tag.
///
/// An unrecognized code cannot be constructed; every value maps to
/// exactly one slot in every localized entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LanguageCode {
    /// English as used in the United Kingdom (`en-GB`).
    EnglishBritish,
    /// Japanese as used in Japan (`ja-JP`).
    Japanese,
}

impl LanguageCode {
    /// Every supported language, in declaration order.
    pub const ALL: [Self; 2] = [Self::EnglishBritish, Self::Japanese];

    /// Number of supported languages.
    pub const COUNT: usize = Self::ALL.len();

    /// Canonical BCP 47 tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::EnglishBritish => "en-GB",
            Self::Japanese => "ja-JP",
        }
    }

    /// Name of the language, written in that language.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::EnglishBritish => "English (British)",
            Self::Japanese => "日本語",
        }
    }

    /// One-line description of the locale, written in that locale.
    ///
    /// Carried for translator-facing tooling.
    #[must_use]
    pub const fn native_description(self) -> &'static str {
        match self {
            Self::EnglishBritish => "English language as used in the United Kingdom.",
            Self::Japanese => "日本で使用される日本語。",
        }
    }

    /// Inverse of [`tag`](Self::tag).
    ///
    /// Returns `None` for any tag outside the closed set; callers decide
    /// whether that is an error (the table loader treats it as one).
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|code| code.tag() == tag)
    }

    /// Slot of this language in every localized entry.
    ///
    /// Bijective with [`ALL`](Self::ALL) order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
