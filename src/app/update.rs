// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! The main `update` function dispatches each top-level message to a handler
//! working on an [`UpdateContext`] of borrowed application state.

use super::config::Config;
use super::{persistence, Message, Screen};
use crate::domain::Locale;
use crate::routing::{self, RouteOutcome};
use crate::ui::counter_demo::CounterDemo;
use crate::ui::header;
use crate::ui::hero::{self, Link};
use crate::ui::not_found;
use crate::ui::theming::ThemeMode;
use iced::Task;
use std::path::PathBuf;

/// A redirect target always names a page; anything longer is a routing bug.
const MAX_REDIRECTS: usize = 4;

/// Mutable view over the state touched by message handlers.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub path: &'a mut String,
    pub theme_mode: &'a mut ThemeMode,
    pub config: &'a mut Config,
    pub config_dir: Option<PathBuf>,
    pub preferred_locale: Option<Locale>,
    pub counter: &'a CounterDemo,
}

/// Dispatches a top-level message.
pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Header(message) => handle_header_message(ctx, message),
        Message::Hero(message) => handle_hero_message(ctx, message),
        Message::NotFound(not_found::Message::GoHome) => {
            navigate(ctx, "/");
            Task::none()
        }
        Message::Navigate(path) => {
            navigate(ctx, &path);
            Task::none()
        }
    }
}

fn handle_header_message(ctx: &mut UpdateContext<'_>, message: header::Message) -> Task<Message> {
    match message {
        header::Message::LanguageSelected(locale) => {
            let target = routing::switch_locale(ctx.path, locale);
            tracing::info!(from = %ctx.path, to = %target, "switching language");
            navigate(ctx, &target);
        }
        header::Message::ToggleTheme => {
            let mode = ctx.theme_mode.toggle();
            *ctx.theme_mode = mode;
            tracing::debug!(mode = mode.as_str(), "theme toggled");
            persistence::persist_theme_mode(ctx.config, ctx.config_dir.clone(), mode);
        }
    }
    Task::none()
}

fn handle_hero_message(ctx: &mut UpdateContext<'_>, message: hero::Message) -> Task<Message> {
    match message {
        hero::Message::Counter(message) => {
            ctx.counter.update(message);
            Task::none()
        }
        hero::Message::OpenLink(link) => {
            let url = link_url(ctx.config, link).to_string();
            tracing::info!(%url, "link copied to clipboard");
            iced::clipboard::write(url)
        }
    }
}

fn link_url(config: &Config, link: Link) -> &str {
    match link {
        Link::Docs => &config.site.docs_url,
        Link::Repository => &config.site.repository_url,
    }
}

/// Resolves `path` and moves the application to the resulting screen,
/// following redirects.
pub fn navigate(ctx: &mut UpdateContext<'_>, path: &str) {
    let mut current = path.to_string();
    for _ in 0..MAX_REDIRECTS {
        match routing::resolve(&current, ctx.preferred_locale) {
            RouteOutcome::Redirect(target) => {
                tracing::debug!(from = %current, to = %target, "redirect");
                current = target;
            }
            RouteOutcome::Page { locale, .. } => {
                *ctx.screen = Screen::Page(locale);
                *ctx.path = current;
                return;
            }
            RouteOutcome::NotFound => {
                tracing::info!(path = %current, "no such route");
                *ctx.screen = Screen::NotFound;
                *ctx.path = current;
                return;
            }
        }
    }
    tracing::warn!(path, "too many redirects");
    *ctx.screen = Screen::NotFound;
    *ctx.path = current;
}
