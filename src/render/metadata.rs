// SPDX-License-Identifier: MPL-2.0
//! Document metadata derived from the catalog and the site base URL.

use crate::domain::Locale;
use crate::i18n::{MessageKey, Translator};
use crate::routing;

/// Everything that goes into the document `<head>` besides styles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: String,
    /// `{base_url}/{locale}{pathname}`.
    pub canonical: String,
    /// `(hreflang, url)` for every locale, then `x-default`.
    pub alternates: Vec<(String, String)>,
    pub og_locale: String,
    pub og_type: &'static str,
}

impl PageMetadata {
    /// Metadata of `pathname` rendered in the translator's locale. The title
    /// is the catalog's SEO title.
    #[must_use]
    pub fn new(translator: Translator<'_>, base_url: &str, pathname: &str) -> Self {
        let locale = translator.locale();
        let url_for = |locale: Locale| format!("{}{}", base_url, routing::localized_path(locale, pathname));

        let mut alternates: Vec<(String, String)> = Locale::ALL
            .into_iter()
            .map(|alt| (alt.code().to_string(), url_for(alt)))
            .collect();
        alternates.push(("x-default".to_string(), url_for(Locale::DEFAULT)));

        Self {
            title: translator.translate(MessageKey::SeoTitle).to_string(),
            description: translator.translate(MessageKey::SeoDescription).to_string(),
            keywords: translator.translate(MessageKey::SeoKeywords).to_string(),
            canonical: url_for(locale),
            alternates,
            og_locale: locale.code().to_string(),
            og_type: "website",
        }
    }
}
