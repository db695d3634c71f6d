// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use crate::domain::Locale;

/// What the current route renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The landing page in a validated locale.
    Page(Locale),
    NotFound,
}

impl Screen {
    /// Locale of the page, if the route resolved to one.
    #[must_use]
    pub fn locale(self) -> Option<Locale> {
        match self {
            Screen::Page(locale) => Some(locale),
            Screen::NotFound => None,
        }
    }
}
