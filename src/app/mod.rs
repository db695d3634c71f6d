// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between routing, localization
//! and the page components.
//!
//! The `App` struct owns the loaded catalogs, the persisted configuration and
//! the shared store, and translates messages into navigation, store writes or
//! config persistence.

pub mod config;
mod message;
pub mod paths;
mod persistence;
mod screen;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::domain::Locale;
use crate::i18n::{I18n, MessageKey};
use crate::store::{AppState, AppStore};
use crate::ui::counter_demo::CounterDemo;
use crate::ui::theming::ThemeMode;
use config::Config;
use iced::{window, Element, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    config: Config,
    config_dir: Option<PathBuf>,
    preferred_locale: Option<Locale>,
    screen: Screen,
    path: String,
    theme_mode: ThemeMode,
    store: AppStore,
    counter: CounterDemo,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("path", &self.path)
            .field("theme_mode", &self.theme_mode)
            .field("counter", &self.counter.value())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
///
/// Catalogs are loaded by the caller so a broken catalog fails before any
/// window opens.
pub fn run(flags: Flags, i18n: I18n) -> iced::Result {
    // iced 0.14 requires a `Fn` boot function.
    let boot = move || App::new(flags.clone(), i18n.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

/// Preferred locale for the root redirect: `lang` (the `--lang` flag), then
/// config, then the OS.
pub fn preferred_locale(lang: Option<&str>, config: &Config) -> Option<Locale> {
    if let Some(lang) = lang {
        match Locale::negotiate(lang) {
            Some(locale) => return Some(locale),
            None => tracing::warn!(lang, "unsupported --lang, ignoring"),
        }
    }
    config
        .preferred_locale()
        .or_else(|| sys_locale::get_locale().and_then(|tag| Locale::negotiate(&tag)))
}

impl App {
    /// Initializes application state and navigates to the startup route.
    pub fn new(flags: Flags, i18n: I18n) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.as_ref().map(PathBuf::from);
        let (config, config_warning) = config::load_with_override(config_dir.clone());
        if let Some(warning) = config_warning {
            tracing::warn!(%warning, "config could not be loaded");
        }

        let store = AppStore::new(AppState::default());
        store.subscribe(|state| tracing::trace!(counter = state.counter, "store notified"));
        let counter = CounterDemo::new(store.clone());

        let mut app = App {
            preferred_locale: preferred_locale(flags.lang.as_deref(), &config),
            theme_mode: ThemeMode::resolve(config.general.theme_mode),
            i18n,
            config,
            config_dir,
            screen: Screen::NotFound,
            path: String::new(),
            store,
            counter,
        };

        let start = flags.path.unwrap_or_else(|| "/".to_string());
        app.navigate(&start);
        tracing::info!(path = %app.path, screen = ?app.screen, "application started");

        (app, Task::none())
    }

    fn title(&self) -> String {
        match self.screen {
            Screen::Page(locale) => self
                .i18n
                .translator(locale)
                .translate(MessageKey::SeoTitle)
                .to_string(),
            Screen::NotFound => {
                let translator = self.i18n.translator(Locale::DEFAULT);
                format!(
                    "{} | {}",
                    translator.translate(MessageKey::NotFoundTitle),
                    translator.translate(MessageKey::AppTitle)
                )
            }
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();
        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            path: &self.path,
            theme_mode: self.theme_mode,
            counter: &self.counter,
        })
    }

    fn navigate(&mut self, path: &str) {
        let mut ctx = self.update_context();
        update::navigate(&mut ctx, path);
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            screen: &mut self.screen,
            path: &mut self.path,
            theme_mode: &mut self.theme_mode,
            config: &mut self.config,
            config_dir: self.config_dir.clone(),
            preferred_locale: self.preferred_locale,
            counter: &self.counter,
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Current route path, after redirects.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    #[must_use]
    pub fn counter_value(&self) -> i64 {
        self.counter.value()
    }

    /// Shared store backing the counter demo.
    #[must_use]
    pub fn store(&self) -> &AppStore {
        &self.store
    }

    /// Processes a message, discarding the returned task.
    pub fn dispatch(&mut self, message: Message) {
        let _ = self.update(message);
    }
}
