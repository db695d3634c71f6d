// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette, radius};
use iced::gradient::Linear;
use iced::widget::button;
use iced::{Background, Border, Color, Degrees, Gradient, Theme};

fn brand_gradient(alpha: f32) -> Background {
    Background::Gradient(Gradient::Linear(
        Linear::new(Degrees(135.0))
            .add_stop(0.0, Color { a: alpha, ..palette::BRAND_BLUE })
            .add_stop(1.0, Color { a: alpha, ..palette::BRAND_PURPLE }),
    ))
}

/// Filled call-to-action button with the brand gradient.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => 0.9,
        button::Status::Disabled => 0.5,
        _ => 1.0,
    };
    button::Style {
        background: Some(brand_gradient(alpha)),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

/// Secondary call-to-action: transparent with a divider-colored outline.
pub fn outlined(theme: &Theme, status: button::Status) -> button::Style {
    let ext = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(Background::Color(ext.background.weak.color))
        }
        _ => None,
    };
    button::Style {
        background,
        text_color: ext.background.base.text,
        border: Border {
            color: ext.background.strong.color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..button::Style::default()
    }
}

/// Borderless icon button (theme toggle, counter controls).
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let ext = theme.extended_palette();
    let (background, text_color) = match status {
        button::Status::Hovered | button::Status::Pressed => (
            Some(Background::Color(ext.background.weak.color)),
            ext.background.base.text,
        ),
        _ => (None, ext.secondary.base.text),
    };
    button::Style {
        background,
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

/// Inline link-like button.
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let ext = theme.extended_palette();
    let text_color = match status {
        button::Status::Hovered => ext.primary.strong.color,
        _ => ext.primary.base.color,
    };
    button::Style {
        background: None,
        text_color,
        ..button::Style::default()
    }
}
