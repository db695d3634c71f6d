// SPDX-License-Identifier: MPL-2.0
//! Counter demo card backed by the shared store.
//!
//! The component is a store subscriber: it keeps its own copy of the counter,
//! refreshed by the store on every change, and writes through the store.

use crate::i18n::{MessageKey, Translator};
use crate::store::{app_state, AppStore, SubscriptionId};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, tooltip, Column, Container, Row, Space, Text};
use iced::{Color, Element, Font, Length};
use std::cell::Cell;
use std::rc::Rc;

/// Label shown in the card's title bar.
pub const TITLE_BAR_LABEL: &str = "app store";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Increment,
    Decrement,
}

pub struct CounterDemo {
    store: AppStore,
    value: Rc<Cell<i64>>,
    subscription: SubscriptionId,
}

impl std::fmt::Debug for CounterDemo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CounterDemo")
            .field("value", &self.value.get())
            .finish()
    }
}

impl CounterDemo {
    /// Subscribes a new counter view to `store`.
    pub fn new(store: AppStore) -> Self {
        let value = Rc::new(Cell::new(store.select(|s| s.counter)));
        let sink = Rc::clone(&value);
        let subscription = store.subscribe_selected(|s| s.counter, move |counter| sink.set(*counter));
        Self {
            store,
            value,
            subscription,
        }
    }

    /// Counter value as last delivered by the store.
    #[must_use]
    pub fn value(&self) -> i64 {
        self.value.get()
    }

    pub fn update(&self, message: Message) {
        match message {
            Message::Increment => self.store.set(app_state::increment),
            Message::Decrement => self.store.set(app_state::decrement),
        }
        tracing::debug!(counter = self.value(), ?message, "counter updated");
    }

    pub fn view<'a>(&self, translator: Translator<'a>) -> Element<'a, Message> {
        let dot = |color: Color| {
            Container::new(Space::new())
                .width(Length::Fixed(sizing::DOT))
                .height(Length::Fixed(sizing::DOT))
                .style(styles::container::dot(color))
        };
        let title_bar = Row::new()
            .spacing(spacing::XXS + 2.0)
            .align_y(Vertical::Center)
            .push(dot(palette::DOT_RED))
            .push(dot(palette::DOT_YELLOW))
            .push(dot(palette::DOT_GREEN))
            .push(Space::new().width(Length::Fixed(spacing::XS)))
            .push(Text::new(TITLE_BAR_LABEL).size(typography::CAPTION).font(Font::MONOSPACE));

        let control = |glyph: &'static str, key: MessageKey, message: Message| {
            tooltip(
                button(
                    Container::new(Text::new(glyph).size(typography::TITLE_MD))
                        .width(Length::Fill)
                        .align_x(Horizontal::Center),
                )
                .width(Length::Fixed(sizing::COUNTER_BUTTON))
                .on_press(message)
                .style(styles::button::outlined),
                Text::new(translator.translate(key)).size(typography::CAPTION),
                tooltip::Position::Bottom,
            )
        };

        let counter_row = Row::new()
            .spacing(spacing::LG)
            .align_y(Vertical::Center)
            .push(control("−", MessageKey::CounterDecrement, Message::Decrement))
            .push(
                Text::new(self.value().to_string())
                    .size(typography::TITLE_MD * 1.6)
                    .font(Font::MONOSPACE),
            )
            .push(control("+", MessageKey::CounterIncrement, Message::Increment));

        let code_hint = Container::new(
            Row::new()
                .push(Text::new("store.set").color(palette::CODE_FUNCTION))
                .push(Text::new("(|s| AppStatePatch { "))
                .push(Text::new("counter").color(palette::CODE_FIELD))
                .push(Text::new(": Some(s.counter + 1) })")),
        )
        .padding(spacing::XS)
        .style(styles::container::code_hint);

        let content = Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(title_bar)
            .push(counter_row)
            .push(code_hint.width(Length::Shrink))
            .width(Length::Fill);

        Container::new(content)
            .width(Length::Fixed(sizing::DEMO_CARD_WIDTH))
            .padding(spacing::MD)
            .style(styles::container::card)
            .into()
    }
}

impl Drop for CounterDemo {
    fn drop(&mut self) {
        self.store.unsubscribe(self.subscription);
    }
}
