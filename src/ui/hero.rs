// SPDX-License-Identifier: MPL-2.0
//! Hero section: badge, headline, calls to action and the store demo.

use crate::i18n::{MessageKey, Translator};
use crate::ui::counter_demo::{self, CounterDemo};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{font, Element, Font, Length};

/// Technology badge above the headline. Not translated.
pub const BADGE_LABEL: &str = "Rust + Iced + Fluent + Store";

/// Outbound link targets of the hero buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    Docs,
    Repository,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    OpenLink(Link),
    Counter(counter_demo::Message),
}

/// Contextual data needed to render the hero.
pub struct ViewContext<'a, 'b> {
    pub translator: Translator<'a>,
    pub counter: &'b CounterDemo,
}

const HEADLINE: Font = Font {
    weight: font::Weight::ExtraBold,
    ..Font::DEFAULT
};

pub fn view<'a>(ctx: ViewContext<'a, '_>) -> Element<'a, Message> {
    let t = ctx.translator;

    let badge = Container::new(Text::new(BADGE_LABEL).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::badge);

    let title = Text::new(t.translate(MessageKey::HeroTitle))
        .size(typography::DISPLAY)
        .font(HEADLINE)
        .align_x(Horizontal::Center)
        .width(Length::Fill);

    let subtitle = Text::new(t.translate(MessageKey::HeroSubtitle))
        .size(typography::TITLE_MD)
        .style(text::secondary)
        .align_x(Horizontal::Center)
        .width(Length::Fill);

    let actions = Row::new()
        .spacing(spacing::MD)
        .push(
            button(Text::new(format!("{}  →", t.translate(MessageKey::GetStarted))))
                .padding([spacing::SM, spacing::LG])
                .on_press(Message::OpenLink(Link::Docs))
                .style(styles::button::primary),
        )
        .push(
            button(Text::new(t.translate(MessageKey::ViewOnGithub)))
                .padding([spacing::SM, spacing::LG])
                .on_press(Message::OpenLink(Link::Repository))
                .style(styles::button::outlined),
        );

    let demo = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(
            Text::new(t.translate(MessageKey::DemoTitle))
                .size(typography::BODY)
                .style(text::secondary),
        )
        .push(ctx.counter.view(t).map(Message::Counter));

    let column = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(badge)
        .push(title)
        .push(subtitle)
        .push(actions)
        .push(demo);

    Container::new(Container::new(column).max_width(sizing::HERO_MAX_WIDTH))
        .width(Length::Fill)
        .padding([spacing::XXL, spacing::LG])
        .align_x(Horizontal::Center)
        .into()
}
