// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state.

use super::{Message, Screen};
use crate::domain::Locale;
use crate::i18n::I18n;
use crate::ui::counter_demo::CounterDemo;
use crate::ui::header::{self, ViewContext as HeaderViewContext};
use crate::ui::hero::{self, ViewContext as HeroViewContext};
use crate::ui::not_found;
use crate::ui::theming::ThemeMode;
use iced::widget::{scrollable, Column, Container};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub path: &'a str,
    pub theme_mode: ThemeMode,
    pub counter: &'a CounterDemo,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Page(locale) => view_page(&ctx, locale),
        Screen::NotFound => not_found::view(ctx.i18n.translator(Locale::DEFAULT), ctx.path)
            .map(Message::NotFound),
    };

    Container::new(current_view)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_page<'a>(ctx: &ViewContext<'a>, locale: Locale) -> Element<'a, Message> {
    let translator = ctx.i18n.translator(locale);

    let header_view = header::view(HeaderViewContext {
        translator,
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Header);

    let hero_view = hero::view(HeroViewContext {
        translator,
        counter: ctx.counter,
    })
    .map(Message::Hero);

    Column::new()
        .push(header_view)
        .push(scrollable(hero_view).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
