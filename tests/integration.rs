// SPDX-License-Identifier: MPL-2.0
use iced_landing::app::config::Config;
use iced_landing::app::{self, App, Flags, Message, Screen};
use iced_landing::domain::Locale;
use iced_landing::export;
use iced_landing::i18n::{I18n, MessageKey};
use iced_landing::render::{self, PageContext};
use iced_landing::routing::{self, RouteOutcome};
use iced_landing::store::{app_state, AppState, AppStore};
use iced_landing::ui::counter_demo::{self, CounterDemo};
use iced_landing::ui::header;
use iced_landing::ui::hero;
use iced_landing::ui::theming::ThemeMode;
use std::fs;
use tempfile::{tempdir, TempDir};

fn boot(path: &str) -> (App, TempDir) {
    let dir = tempdir().expect("failed to create temp dir");
    let flags = Flags {
        lang: Some("en".to_string()),
        path: Some(path.to_string()),
        i18n_dir: None,
        config_dir: Some(dir.path().to_string_lossy().into_owned()),
    };
    let i18n = I18n::load().expect("embedded catalogs must load");
    let (app, _task) = App::new(flags, i18n);
    (app, dir)
}

#[test]
fn unsupported_locales_resolve_to_not_found() {
    for candidate in ["/fr", "/EN", "/en-US", "/hye", "/ru_RU", "/xx/", "/%20"] {
        assert_eq!(
            routing::resolve(candidate, None),
            RouteOutcome::NotFound,
            "{candidate} should be rejected"
        );
    }

    let (app, _dir) = boot("/de");
    assert_eq!(app.screen(), Screen::NotFound);
}

#[test]
fn rendered_document_language_matches_locale() {
    let i18n = I18n::load().expect("embedded catalogs must load");
    for locale in Locale::ALL {
        let html = render::render_page(&PageContext {
            translator: i18n.translator(locale),
            pathname: "/",
            theme_mode: ThemeMode::Light,
            counter: 0,
            base_url: "https://example.com",
            docs_url: "https://example.com/docs",
            repository_url: "https://example.com/repo",
        })
        .expect("page must render");
        assert!(
            html.contains(&format!("<html lang=\"{}\"", locale.code())),
            "missing lang attribute for {locale}"
        );
    }
}

#[test]
fn every_key_translates_in_every_locale() {
    let i18n = I18n::load().expect("embedded catalogs must load");
    for locale in Locale::ALL {
        let translator = i18n.translator(locale);
        for key in MessageKey::ALL {
            assert!(
                !translator.translate(key).trim().is_empty(),
                "{} has no value in {locale}",
                key.id()
            );
        }
    }
}

#[test]
fn counter_subscribers_see_every_write() {
    let store = AppStore::new(AppState::default());
    let header_view = CounterDemo::new(store.clone());
    let card_view = CounterDemo::new(store.clone());

    header_view.update(counter_demo::Message::Increment);
    assert_eq!((header_view.value(), card_view.value()), (1, 1));

    card_view.update(counter_demo::Message::Decrement);
    assert_eq!((header_view.value(), card_view.value()), (0, 0));

    store.set(app_state::decrement);
    assert_eq!((header_view.value(), card_view.value()), (-1, -1));
    assert_eq!(store.get().counter, -1);
}

#[test]
fn language_switch_only_changes_locale_segment() {
    assert_eq!(routing::switch_locale("/en", Locale::Ru), "/ru");
    assert_eq!(
        routing::switch_locale("/hy?tab=demo#counter", Locale::En),
        "/en?tab=demo#counter"
    );

    let (mut app, _dir) = boot("/en?tab=demo");
    app.dispatch(Message::Header(header::Message::LanguageSelected(
        Locale::Hy,
    )));
    assert_eq!(app.screen(), Screen::Page(Locale::Hy));
    assert_eq!(app.path(), "/hy?tab=demo");
}

#[test]
fn theme_toggle_alternates_between_two_modes() {
    let (mut app, _dir) = boot("/en");
    let first = app.theme_mode();
    let mut seen = vec![first];
    for _ in 0..4 {
        app.dispatch(Message::Header(header::Message::ToggleTheme));
        seen.push(app.theme_mode());
    }
    for pair in seen.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }
    assert_eq!(seen[0], seen[2]);
    assert_eq!(seen[2], seen[4]);
}

#[test]
fn counter_survives_navigation_within_session() {
    let (mut app, _dir) = boot("/");
    assert_eq!(app.path(), "/en");
    app.dispatch(Message::Hero(hero::Message::Counter(
        counter_demo::Message::Increment,
    )));
    app.dispatch(Message::Navigate("/ru".to_string()));
    assert_eq!(app.screen(), Screen::Page(Locale::Ru));
    assert_eq!(app.counter_value(), 1);
}

#[test]
fn export_writes_every_locale_and_fallbacks() {
    let out = tempdir().expect("failed to create temp dir");
    let i18n = I18n::load().expect("embedded catalogs must load");
    let mut config = Config::default();
    config.site.base_url = "https://landing.example".to_string();

    let summary = export::export_site(out.path(), &i18n, &config, None).expect("export must succeed");
    assert_eq!(summary.file_count(), Locale::ALL.len() + 2);

    for locale in Locale::ALL {
        let page = fs::read_to_string(out.path().join(locale.code()).join("index.html"))
            .expect("page must exist");
        assert!(page.contains(&format!("https://landing.example/{}", locale.code())));
    }
    assert!(out.path().join("404.html").is_file());
    assert!(out.path().join("index.html").is_file());
}

#[test]
fn export_redirect_honors_lang_flag() {
    let out = tempdir().expect("failed to create temp dir");
    let i18n = I18n::load().expect("embedded catalogs must load");
    let config = Config::default();

    let preferred = app::preferred_locale(Some("ru"), &config);
    let summary =
        export::export_site(out.path(), &i18n, &config, preferred).expect("export must succeed");
    let html = fs::read_to_string(summary.redirect).expect("redirect must exist");
    assert!(html.contains("url=/ru"));
}
