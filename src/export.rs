// SPDX-License-Identifier: MPL-2.0
//! Static export of the rendered site.
//!
//! Writes one document per locale plus the not-found page and a root
//! redirect, laid out so any static file server reproduces the routing:
//!
//! ```text
//! <dir>/index.html        -> redirect to /<default locale>
//! <dir>/<locale>/index.html
//! <dir>/404.html
//! ```

use crate::app::config::Config;
use crate::domain::Locale;
use crate::error::Result;
use crate::i18n::I18n;
use crate::render::{self, PageContext};
use crate::routing;
use crate::store::AppState;
use crate::ui::theming::ThemeMode;
use std::fs;
use std::path::{Path, PathBuf};

/// Files written by [`export_site`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub pages: Vec<PathBuf>,
    pub not_found: PathBuf,
    pub redirect: PathBuf,
}

impl ExportSummary {
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.pages.len() + 2
    }
}

/// Renders every locale and writes the site below `dir`.
///
/// `preferred` picks the target of the root redirect, as the application
/// does for the bare root route.
pub fn export_site(
    dir: &Path,
    i18n: &I18n,
    config: &Config,
    preferred: Option<Locale>,
) -> Result<ExportSummary> {
    let base_url = config.base_url();
    let theme_mode = config.general.theme_mode.unwrap_or(ThemeMode::Light);
    let initial = AppState::default();

    fs::create_dir_all(dir)?;

    let mut pages = Vec::with_capacity(Locale::ALL.len());
    for locale in Locale::ALL {
        let html = render::render_page(&PageContext {
            translator: i18n.translator(locale),
            pathname: "/",
            theme_mode,
            counter: initial.counter,
            base_url: &base_url,
            docs_url: &config.site.docs_url,
            repository_url: &config.site.repository_url,
        })?;
        let locale_dir = dir.join(locale.code());
        fs::create_dir_all(&locale_dir)?;
        let path = locale_dir.join("index.html");
        fs::write(&path, html)?;
        tracing::info!(path = %path.display(), %locale, "page exported");
        pages.push(path);
    }

    let not_found = dir.join("404.html");
    fs::write(
        &not_found,
        render::render_not_found(i18n.translator(Locale::DEFAULT), theme_mode)?,
    )?;

    let target = match routing::resolve("/", preferred) {
        routing::RouteOutcome::Redirect(target) => target,
        _ => routing::localized_path(Locale::DEFAULT, "/"),
    };
    let redirect = dir.join("index.html");
    fs::write(&redirect, render::render_redirect(&target)?)?;

    let summary = ExportSummary {
        pages,
        not_found,
        redirect,
    };
    tracing::info!(files = summary.file_count(), dir = %dir.display(), "site exported");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn writes_one_page_per_locale() {
        let dir = tempdir().expect("failed to create temp dir");
        let i18n = I18n::load().expect("catalogs must load");
        let summary = export_site(dir.path(), &i18n, &Config::default(), None).expect("export failed");

        assert_eq!(summary.file_count(), 5);
        for locale in Locale::ALL {
            let page = dir.path().join(locale.code()).join("index.html");
            let html = fs::read_to_string(&page).expect("page must exist");
            assert!(html.contains(&format!("<html lang=\"{}\"", locale.code())));
        }
        assert!(summary.not_found.exists());
    }

    #[test]
    fn root_redirect_follows_configured_language() {
        let dir = tempdir().expect("failed to create temp dir");
        let i18n = I18n::load().expect("catalogs must load");
        let mut config = Config::default();
        config.general.language = Some("ru".into());

        let summary =
            export_site(dir.path(), &i18n, &config, config.preferred_locale()).expect("export failed");
        let html = fs::read_to_string(summary.redirect).expect("redirect must exist");
        assert!(html.contains("url=/ru"));
    }

    #[test]
    fn root_redirect_follows_preferred_locale_without_config() {
        let dir = tempdir().expect("failed to create temp dir");
        let i18n = I18n::load().expect("catalogs must load");

        let summary = export_site(dir.path(), &i18n, &Config::default(), Some(Locale::Hy))
            .expect("export failed");
        let html = fs::read_to_string(summary.redirect).expect("redirect must exist");
        assert!(html.contains("url=/hy"));
        assert!(!html.contains("url=/en"));
    }
}
