// SPDX-License-Identifier: MPL-2.0
//! Generic not-found screen for unsupported routes.

use crate::i18n::{MessageKey, Translator};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, text, Column, Container, Text};
use iced::{Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    GoHome,
}

/// `translator` is the default locale's: a rejected route carries no usable
/// locale.
pub fn view<'a>(translator: Translator<'a>, path: &'a str) -> Element<'a, Message> {
    let column = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new("404").size(typography::DISPLAY))
        .push(Text::new(translator.translate(MessageKey::NotFoundTitle)).size(typography::TITLE_MD))
        .push(
            Text::new(translator.translate(MessageKey::NotFoundBody))
                .size(typography::BODY)
                .style(text::secondary),
        )
        .push(
            Text::new(path)
                .size(typography::CAPTION)
                .font(iced::Font::MONOSPACE)
                .style(text::secondary),
        )
        .push(
            button(Text::new(translator.translate(MessageKey::BackHome)))
                .on_press(Message::GoHome)
                .style(styles::button::link),
        );

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(spacing::XXL)
        .into()
}
