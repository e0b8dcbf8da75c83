// Copyright 2026 the Fresco Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Localized text: a `{fr, en}` pair resolved against the current locale.

/// The two locales the content store delivers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    /// French, the canonical authoring locale.
    #[default]
    Fr,
    /// English.
    En,
}

/// A `{fr, en}` text pair.
///
/// Resolution falls back to `fr` when the English variant is empty, matching
/// the content store's contract that French is always authored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocalizedString {
    /// French text (always present).
    pub fr: String,
    /// English text (may be empty).
    pub en: String,
}

impl LocalizedString {
    /// Creates a localized pair from both variants.
    #[must_use]
    pub fn new(fr: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            fr: fr.into(),
            en: en.into(),
        }
    }

    /// Creates a pair with only the French variant.
    #[must_use]
    pub fn fr_only(fr: impl Into<String>) -> Self {
        Self {
            fr: fr.into(),
            en: String::new(),
        }
    }

    /// Returns the text for `locale`, falling back to `fr`.
    #[must_use]
    pub fn resolve(&self, locale: Locale) -> &str {
        match locale {
            Locale::Fr => &self.fr,
            Locale::En => {
                if self.en.is_empty() {
                    &self.fr
                } else {
                    &self.en
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_requested_locale() {
        let s = LocalizedString::new("mer", "sea");
        assert_eq!(s.resolve(Locale::Fr), "mer");
        assert_eq!(s.resolve(Locale::En), "sea");
    }

    #[test]
    fn falls_back_to_fr() {
        let s = LocalizedString::fr_only("mer");
        assert_eq!(s.resolve(Locale::En), "mer");
    }
}
