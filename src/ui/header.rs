// SPDX-License-Identifier: MPL-2.0
//! Sticky header: brand mark, app title, language switcher and theme toggle.

use crate::domain::Locale;
use crate::i18n::{MessageKey, Translator};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::language_switcher;
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, tooltip, Container, Row, Space, Text};
use iced::{font, Element, Font, Length};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub translator: Translator<'a>,
    pub theme_mode: ThemeMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    LanguageSelected(Locale),
    ToggleTheme,
}

impl From<language_switcher::Message> for Message {
    fn from(message: language_switcher::Message) -> Self {
        match message {
            language_switcher::Message::Selected(locale) => Message::LanguageSelected(locale),
        }
    }
}

const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

/// Glyph of the mode the toggle switches to.
fn toggle_glyph(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "☾",
        ThemeMode::Dark => "☀",
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand_mark = Container::new(Text::new("N").size(typography::BODY).font(BOLD))
        .width(Length::Fixed(sizing::BRAND_MARK))
        .height(Length::Fixed(sizing::BRAND_MARK))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::brand_mark);

    let title = Text::new(ctx.translator.translate(MessageKey::AppTitle))
        .size(typography::BODY + 2.0)
        .font(BOLD);

    let toggle = tooltip(
        button(Text::new(toggle_glyph(ctx.theme_mode)).size(typography::TITLE_MD))
            .on_press(Message::ToggleTheme)
            .padding(spacing::XXS)
            .style(styles::button::ghost),
        Text::new(ctx.translator.translate(MessageKey::ToggleTheme)).size(typography::CAPTION),
        tooltip::Position::Bottom,
    )
    .gap(spacing::XXS);

    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(brand_mark)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(language_switcher::view(ctx.translator).map(Message::from))
        .push(toggle);

    let toolbar = Container::new(row)
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH);

    Container::new(toolbar)
        .width(Length::Fill)
        .padding([spacing::SM, spacing::LG])
        .align_x(Horizontal::Center)
        .style(styles::container::header_bar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_glyph_points_at_the_other_mode() {
        assert_ne!(toggle_glyph(ThemeMode::Light), toggle_glyph(ThemeMode::Dark));
    }

    #[test]
    fn switcher_selection_maps_to_header_message() {
        let message: Message = language_switcher::Message::Selected(Locale::Ru).into();
        assert_eq!(message, Message::LanguageSelected(Locale::Ru));
    }
}
