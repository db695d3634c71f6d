// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    pub surface_primary: Color,
    pub surface_secondary: Color,

    pub text_primary: Color,
    pub text_secondary: Color,

    pub divider: Color,

    // Brand gradient stops
    pub brand_start: Color,
    pub brand_end: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,
            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            divider: palette::GRAY_200,
            brand_start: palette::BRAND_BLUE,
            brand_end: palette::BRAND_PURPLE,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_950,
            surface_secondary: palette::GRAY_900,
            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_400,
            divider: palette::GRAY_700,
            brand_start: palette::BRAND_BLUE,
            brand_end: palette::BRAND_PURPLE,
        }
    }
}

/// The two color modes. There is deliberately no "system" value: the
/// system preference only picks the initial mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// The other mode.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// Detects the system theme; dark unless the system reports light.
    #[must_use]
    pub fn from_system() -> Self {
        if let Ok(dark_light::Mode::Light) = dark_light::detect() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }

    /// Configured mode, or the system one when nothing is configured.
    #[must_use]
    pub fn resolve(configured: Option<ThemeMode>) -> Self {
        configured.unwrap_or_else(Self::from_system)
    }

    /// Value of the `data-color-scheme` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    #[must_use]
    pub fn colors(self) -> ColorScheme {
        match self {
            ThemeMode::Light => ColorScheme::light(),
            ThemeMode::Dark => ColorScheme::dark(),
        }
    }

    #[must_use]
    pub fn iced_theme(self) -> Theme {
        match self {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
        }
    }
}

/// CSS hex notation (`#rrggbb`) of a color.
#[must_use]
pub fn to_css_hex(color: Color) -> String {
    let channel = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "#{:02x}{:02x}{:02x}",
        channel(color.r),
        channel(color.g),
        channel(color.b)
    )
}
