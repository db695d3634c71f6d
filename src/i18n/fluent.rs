// SPDX-License-Identifier: MPL-2.0
//! Fluent catalogs and the translator handed to views.

use super::keys::MessageKey;
use crate::domain::Locale;
use crate::error::{Error, Result};
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::fs;
use std::path::Path;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Every localized string of one locale, formatted once at load time.
#[derive(Debug, Clone)]
pub struct Catalog {
    locale: Locale,
    messages: Vec<String>,
}

impl Catalog {
    /// Parses a Fluent source and formats every [`MessageKey`].
    ///
    /// Fails if the source has syntax errors, if a key is absent, has no value,
    /// formats with errors or formats to an empty string.
    pub fn from_source(locale: Locale, source: &str) -> Result<Self> {
        let resource = FluentResource::try_new(source.to_string()).map_err(|(_, errors)| {
            Error::Catalog(format!(
                "{}.ftl: {} parse error(s), first: {:?}",
                locale.code(),
                errors.len(),
                errors.first()
            ))
        })?;

        let langid: LanguageIdentifier = locale
            .code()
            .parse()
            .map_err(|_| Error::Catalog(format!("invalid language id: {}", locale.code())))?;
        let mut bundle = FluentBundle::new(vec![langid]);
        bundle.set_use_isolating(false);
        bundle.add_resource(resource).map_err(|errors| {
            Error::Catalog(format!(
                "{}.ftl: {} duplicate message(s)",
                locale.code(),
                errors.len()
            ))
        })?;

        let mut messages = Vec::with_capacity(MessageKey::ALL.len());
        for key in MessageKey::ALL {
            let missing = || Error::MissingTranslation {
                locale: locale.code().to_string(),
                key: key.id().to_string(),
            };
            let pattern = bundle
                .get_message(key.id())
                .and_then(|msg| msg.value())
                .ok_or_else(missing)?;
            let mut errors = vec![];
            let value = bundle.format_pattern(pattern, None, &mut errors);
            if !errors.is_empty() || value.trim().is_empty() {
                return Err(missing());
            }
            messages.push(value.into_owned());
        }

        Ok(Self { locale, messages })
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }
}

/// All catalogs of the application.
#[derive(Debug, Clone)]
pub struct I18n {
    en: Catalog,
    hy: Catalog,
    ru: Catalog,
}

impl I18n {
    /// Loads the catalogs embedded in the binary.
    pub fn load() -> Result<Self> {
        Self::load_with_dir(None)
    }

    /// Loads catalogs, preferring `<dir>/<locale>.ftl` over the embedded file
    /// when a directory is given and the file exists there.
    pub fn load_with_dir(dir: Option<&Path>) -> Result<Self> {
        Self::from_sources(|locale| {
            let filename = format!("{}.ftl", locale.code());
            if let Some(dir) = dir {
                let path = dir.join(&filename);
                if path.is_file() {
                    tracing::debug!(path = %path.display(), "loading catalog override");
                    return fs::read_to_string(&path)
                        .map(Some)
                        .map_err(|err| Error::Io(format!("{}: {}", path.display(), err)));
                }
            }
            Ok(Asset::get(&filename)
                .map(|content| String::from_utf8_lossy(content.data.as_ref()).into_owned()))
        })
    }

    /// Builds every catalog from the sources returned by `source`.
    ///
    /// `Ok(None)` means the locale has no catalog; errors are passed through.
    pub fn from_sources<F>(mut source: F) -> Result<Self>
    where
        F: FnMut(Locale) -> Result<Option<String>>,
    {
        let mut build = |locale: Locale| {
            let text = source(locale)?
                .ok_or_else(|| Error::Catalog(format!("no catalog for locale {}", locale)))?;
            Catalog::from_source(locale, &text)
        };

        let i18n = Self {
            en: build(Locale::En)?,
            hy: build(Locale::Hy)?,
            ru: build(Locale::Ru)?,
        };
        tracing::info!(
            locales = Locale::ALL.len(),
            keys = MessageKey::ALL.len(),
            "translation catalogs loaded"
        );
        Ok(i18n)
    }

    #[must_use]
    pub fn catalog(&self, locale: Locale) -> &Catalog {
        match locale {
            Locale::En => &self.en,
            Locale::Hy => &self.hy,
            Locale::Ru => &self.ru,
        }
    }

    /// Returns the translator for a validated locale.
    #[must_use]
    pub fn translator(&self, locale: Locale) -> Translator<'_> {
        Translator {
            catalog: self.catalog(locale),
        }
    }
}

/// Key lookup bound to one locale.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    catalog: &'a Catalog,
}

impl<'a> Translator<'a> {
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.catalog.locale
    }

    /// Looks up a message. Catalogs are complete by construction.
    #[must_use]
    pub fn translate(&self, key: MessageKey) -> &'a str {
        &self.catalog.messages[key as usize]
    }

    /// Display name of `locale`, in this translator's language.
    #[must_use]
    pub fn language_name(&self, locale: Locale) -> &'a str {
        self.translate(MessageKey::language_name(locale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_source() -> String {
        MessageKey::ALL
            .iter()
            .map(|key| format!("{} = value of {}\n", key.id(), key.id()))
            .collect()
    }

    #[test]
    fn embedded_catalogs_are_complete() {
        let i18n = I18n::load().expect("embedded catalogs must load");
        for locale in Locale::ALL {
            let translator = i18n.translator(locale);
            assert_eq!(translator.locale(), locale);
            for key in MessageKey::ALL {
                assert!(
                    !translator.translate(key).trim().is_empty(),
                    "{:?} is empty in {}",
                    key,
                    locale
                );
            }
        }
    }

    #[test]
    fn catalogs_differ_between_locales() {
        let i18n = I18n::load().expect("embedded catalogs must load");
        let en = i18n.translator(Locale::En).translate(MessageKey::HeroTitle);
        let hy = i18n.translator(Locale::Hy).translate(MessageKey::HeroTitle);
        let ru = i18n.translator(Locale::Ru).translate(MessageKey::HeroTitle);
        assert_ne!(en, hy);
        assert_ne!(en, ru);
        assert_ne!(hy, ru);
    }

    #[test]
    fn missing_key_fails_loading() {
        let source: String = complete_source()
            .lines()
            .filter(|line| !line.starts_with("demo-title"))
            .map(|line| format!("{line}\n"))
            .collect();
        let err = Catalog::from_source(Locale::Hy, &source).unwrap_err();
        assert_eq!(
            err,
            Error::MissingTranslation {
                locale: "hy".into(),
                key: "demo-title".into()
            }
        );
    }

    #[test]
    fn message_without_value_counts_as_missing() {
        let source = complete_source().replace(
            "app-title = value of app-title\n",
            "app-title =\n    .aria = attribute only\n",
        );
        let err = Catalog::from_source(Locale::En, &source).unwrap_err();
        assert!(matches!(err, Error::MissingTranslation { key, .. } if key == "app-title"));
    }

    #[test]
    fn syntax_error_is_a_catalog_error() {
        let source = format!("{}this is not fluent {{\n", complete_source());
        let err = Catalog::from_source(Locale::Ru, &source).unwrap_err();
        assert!(matches!(err, Error::Catalog(_)));
    }

    #[test]
    fn absent_locale_source_fails_loading() {
        let source = complete_source();
        let err = I18n::from_sources(|locale| Ok((locale != Locale::Ru).then(|| source.clone())))
            .unwrap_err();
        assert!(matches!(err, Error::Catalog(message) if message.contains("ru")));
    }

    #[test]
    fn directory_override_replaces_embedded_catalog() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let source = complete_source().replace("value of hero-title", "Overridden");
        fs::write(dir.path().join("ru.ftl"), source).expect("failed to write catalog");

        let i18n = I18n::load_with_dir(Some(dir.path())).expect("catalogs must load");
        assert_eq!(
            i18n.translator(Locale::Ru).translate(MessageKey::HeroTitle),
            "Overridden"
        );
        assert_ne!(
            i18n.translator(Locale::En).translate(MessageKey::HeroTitle),
            "Overridden"
        );
    }

    #[test]
    fn language_names_are_localized() {
        let i18n = I18n::load().expect("embedded catalogs must load");
        let ru = i18n.translator(Locale::Ru);
        assert_eq!(ru.language_name(Locale::Ru), "Русский");
        assert_eq!(i18n.translator(Locale::En).language_name(Locale::Hy), "Armenian");
    }

    #[test]
    fn unreadable_override_reports_io_error() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join("ru.ftl"), [0xff, 0xfe, 0x00, 0x80]).expect("failed to write catalog");

        let err = I18n::load_with_dir(Some(dir.path())).unwrap_err();
        match err {
            Error::Io(message) => assert!(message.contains("ru.ftl"), "{message}"),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
