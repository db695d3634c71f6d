// SPDX-License-Identifier: MPL-2.0
//! Supported locales and locale validation.
//!
//! The set of locales is closed. A candidate string either names one of the
//! supported codes exactly or is rejected; rejection is what the routing layer
//! turns into a not-found page.

use std::fmt;
use std::str::FromStr;

/// One of the locales the landing page is translated into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Locale {
    En,
    Hy,
    Ru,
}

/// Rejection produced when a candidate is not a supported locale code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedLocale(pub String);

impl fmt::Display for UnsupportedLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported locale: {:?}", self.0)
    }
}

impl std::error::Error for UnsupportedLocale {}

impl Locale {
    /// Every supported locale, in switcher order.
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Hy, Locale::Ru];

    /// Locale used when nothing else selects one.
    pub const DEFAULT: Locale = Locale::En;

    /// Validates a candidate locale code.
    ///
    /// Matching is exact and case-sensitive: `"EN"`, `"en-US"` and `" en"` are
    /// all rejected.
    pub fn resolve(candidate: &str) -> Result<Self, UnsupportedLocale> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.code() == candidate)
            .ok_or_else(|| UnsupportedLocale(candidate.to_string()))
    }

    /// Maps a system or BCP-47 language tag (`ru-RU`, `hy_AM.UTF-8`) to a
    /// supported locale by its primary language subtag.
    ///
    /// Only used to pick a redirect target for the bare root path; route
    /// segments always go through [`Locale::resolve`].
    #[must_use]
    pub fn negotiate(tag: &str) -> Option<Self> {
        let primary = tag
            .split(['-', '_', '.'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        Self::resolve(&primary).ok()
    }

    /// The locale code used in URLs, `lang` attributes and catalog names.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Hy => "hy",
            Locale::Ru => "ru",
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}
