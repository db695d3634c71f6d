// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{palette, radius};
use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Border, Color, Degrees, Gradient, Theme};

/// Sticky header bar: translucent background with a bottom divider.
pub fn header_bar(theme: &Theme) -> container::Style {
    let ext = theme.extended_palette();
    let base = ext.background.base.color;
    container::Style {
        background: Some(Background::Color(Color { a: 0.7, ..base })),
        text_color: Some(ext.background.base.text),
        border: Border {
            color: ext.background.strong.color,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Rounded square carrying the brand gradient.
pub fn brand_mark(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Gradient(Gradient::Linear(
            Linear::new(Degrees(135.0))
                .add_stop(0.0, palette::BRAND_BLUE)
                .add_stop(1.0, palette::BRAND_PURPLE),
        ))),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Pill-shaped badge above the hero title.
pub fn badge(theme: &Theme) -> container::Style {
    let ext = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(ext.background.weak.color)),
        text_color: Some(ext.background.weak.text),
        border: Border {
            color: ext.background.strong.color,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Card framing the counter demo.
pub fn card(theme: &Theme) -> container::Style {
    let ext = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(ext.background.weak.color)),
        border: Border {
            color: ext.background.strong.color,
            width: 1.0,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Colored circle used for the window dots on the demo card.
pub fn dot(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Monospace strip showing the store update call.
pub fn code_hint(theme: &Theme) -> container::Style {
    let ext = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(ext.background.base.color)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
