// SPDX-License-Identifier: MPL-2.0
//! Message keys referenced by the UI.

use crate::domain::Locale;

/// Every message the landing page renders. The set is closed so catalogs can
/// be checked for completeness when they are loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    AppTitle,
    ToggleTheme,
    English,
    Armenian,
    Russian,
    HeroTitle,
    HeroSubtitle,
    GetStarted,
    ViewOnGithub,
    DemoTitle,
    SeoTitle,
    SeoDescription,
    SeoKeywords,
    CounterIncrement,
    CounterDecrement,
    NotFoundTitle,
    NotFoundBody,
    BackHome,
}

impl MessageKey {
    /// All keys, in declaration order. A catalog stores its strings in this
    /// order, so `ALL[key as usize] == key` must hold.
    pub const ALL: [MessageKey; 18] = [
        MessageKey::AppTitle,
        MessageKey::ToggleTheme,
        MessageKey::English,
        MessageKey::Armenian,
        MessageKey::Russian,
        MessageKey::HeroTitle,
        MessageKey::HeroSubtitle,
        MessageKey::GetStarted,
        MessageKey::ViewOnGithub,
        MessageKey::DemoTitle,
        MessageKey::SeoTitle,
        MessageKey::SeoDescription,
        MessageKey::SeoKeywords,
        MessageKey::CounterIncrement,
        MessageKey::CounterDecrement,
        MessageKey::NotFoundTitle,
        MessageKey::NotFoundBody,
        MessageKey::BackHome,
    ];

    /// Fluent message identifier.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            MessageKey::AppTitle => "app-title",
            MessageKey::ToggleTheme => "toggle-theme",
            MessageKey::English => "english",
            MessageKey::Armenian => "armenian",
            MessageKey::Russian => "russian",
            MessageKey::HeroTitle => "hero-title",
            MessageKey::HeroSubtitle => "hero-subtitle",
            MessageKey::GetStarted => "get-started",
            MessageKey::ViewOnGithub => "view-on-github",
            MessageKey::DemoTitle => "demo-title",
            MessageKey::SeoTitle => "seo-title",
            MessageKey::SeoDescription => "seo-description",
            MessageKey::SeoKeywords => "seo-keywords",
            MessageKey::CounterIncrement => "counter-increment",
            MessageKey::CounterDecrement => "counter-decrement",
            MessageKey::NotFoundTitle => "not-found-title",
            MessageKey::NotFoundBody => "not-found-body",
            MessageKey::BackHome => "back-home",
        }
    }

    /// Key holding the display name of `locale` in the language switcher.
    #[must_use]
    pub fn language_name(locale: Locale) -> Self {
        match locale {
            Locale::En => MessageKey::English,
            Locale::Hy => MessageKey::Armenian,
            Locale::Ru => MessageKey::Russian,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_is_in_declaration_order() {
        for (index, key) in MessageKey::ALL.iter().enumerate() {
            assert_eq!(*key as usize, index, "{key:?} is out of order");
        }
    }

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = MessageKey::ALL.iter().map(|k| k.id()).collect();
        assert_eq!(ids.len(), MessageKey::ALL.len());
    }

    #[test]
    fn language_names_cover_all_locales() {
        assert_eq!(MessageKey::language_name(Locale::En).id(), "english");
        assert_eq!(MessageKey::language_name(Locale::Hy).id(), "armenian");
        assert_eq!(MessageKey::language_name(Locale::Ru).id(), "russian");
    }
}
