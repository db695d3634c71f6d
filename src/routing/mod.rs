// SPDX-License-Identifier: MPL-2.0
//! Locale-prefixed routing.
//!
//! Every page lives under a locale segment (`/en`, `/hy/...`). The bare root
//! redirects to the preferred locale; any other path whose first segment is
//! not a supported locale, or whose remainder is not a known page, is not
//! found.

use crate::domain::Locale;

/// Pathnames (without locale prefix) that have a page.
pub const PAGES: &[&str] = &["/"];

/// Result of resolving a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    /// Render `pathname` in `locale`.
    Page { locale: Locale, pathname: String },
    /// Send the client to another path.
    Redirect(String),
    NotFound,
}

/// A path split into its locale segment, the remaining pathname and the
/// query/fragment suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SplitPath<'a> {
    first: Option<&'a str>,
    rest: &'a str,
    suffix: &'a str,
}

fn split_path(path: &str) -> SplitPath<'_> {
    let cut = path.find(['?', '#']).unwrap_or(path.len());
    let (path, suffix) = path.split_at(cut);
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() {
        return SplitPath {
            first: None,
            rest: "",
            suffix,
        };
    }
    match trimmed.find('/') {
        Some(slash) => SplitPath {
            first: Some(&trimmed[..slash]),
            rest: &trimmed[slash..],
            suffix,
        },
        None => SplitPath {
            first: Some(trimmed),
            rest: "",
            suffix,
        },
    }
}

/// Normalizes a pathname: leading slash, no trailing slash except for root.
fn normalize_pathname(rest: &str) -> String {
    let trimmed = rest.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Resolves a request path.
///
/// `preferred` picks the redirect target for the bare root; it falls back to
/// [`Locale::DEFAULT`].
#[must_use]
pub fn resolve(path: &str, preferred: Option<Locale>) -> RouteOutcome {
    let split = split_path(path);
    let Some(first) = split.first else {
        let locale = preferred.unwrap_or_default();
        return RouteOutcome::Redirect(format!(
            "{}{}",
            localized_path(locale, "/"),
            split.suffix
        ));
    };

    match Locale::resolve(first) {
        Ok(locale) => {
            let pathname = normalize_pathname(split.rest);
            if PAGES.contains(&pathname.as_str()) {
                RouteOutcome::Page { locale, pathname }
            } else {
                tracing::debug!(path, "no page for path");
                RouteOutcome::NotFound
            }
        }
        Err(rejected) => {
            tracing::debug!(path, %rejected, "route rejected");
            RouteOutcome::NotFound
        }
    }
}

/// Builds the path of `pathname` in `locale`.
#[must_use]
pub fn localized_path(locale: Locale, pathname: &str) -> String {
    let pathname = normalize_pathname(pathname);
    if pathname == "/" {
        format!("/{}", locale.code())
    } else {
        format!("/{}{}", locale.code(), pathname)
    }
}

/// Returns `path` with only its locale segment replaced by `locale`.
///
/// The remaining pathname, query and fragment are preserved. A path without
/// a supported locale segment is prefixed with `locale`.
#[must_use]
pub fn switch_locale(path: &str, locale: Locale) -> String {
    let split = split_path(path);
    let pathname = match split.first {
        Some(first) if Locale::resolve(first).is_ok() => split.rest.to_string(),
        Some(first) => format!("/{}{}", first, split.rest),
        None => String::new(),
    };
    format!("{}{}", localized_path(locale, &pathname), split.suffix)
}

/// Locale carried by `path`, if its first segment is a supported locale.
#[must_use]
pub fn locale_of(path: &str) -> Option<Locale> {
    split_path(path)
        .first
        .and_then(|first| Locale::resolve(first).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_prefix_renders_home() {
        for locale in Locale::ALL {
            for path in [format!("/{locale}"), format!("/{locale}/"), format!("{locale}")] {
                assert_eq!(
                    resolve(&path, None),
                    RouteOutcome::Page {
                        locale,
                        pathname: "/".into()
                    },
                    "{path}"
                );
            }
        }
    }

    #[test]
    fn unsupported_prefix_is_not_found() {
        for path in ["/fr", "/EN", "/en-US", "/de/about", "/english", "/%20en"] {
            assert_eq!(resolve(path, None), RouteOutcome::NotFound, "{path}");
        }
    }

    #[test]
    fn unknown_page_under_supported_locale_is_not_found() {
        assert_eq!(resolve("/en/pricing", None), RouteOutcome::NotFound);
    }

    #[test]
    fn root_redirects_to_preferred_or_default() {
        assert_eq!(resolve("/", None), RouteOutcome::Redirect("/en".into()));
        assert_eq!(resolve("", Some(Locale::Hy)), RouteOutcome::Redirect("/hy".into()));
        assert_eq!(
            resolve("/?ref=ad", Some(Locale::Ru)),
            RouteOutcome::Redirect("/ru?ref=ad".into())
        );
    }

    #[test]
    fn query_does_not_affect_page_resolution() {
        assert_eq!(
            resolve("/ru?utm=1#demo", None),
            RouteOutcome::Page {
                locale: Locale::Ru,
                pathname: "/".into()
            }
        );
    }

    #[test]
    fn switch_locale_changes_only_the_locale_segment() {
        assert_eq!(switch_locale("/en", Locale::Hy), "/hy");
        assert_eq!(switch_locale("/en/", Locale::Ru), "/ru");
        assert_eq!(switch_locale("/hy/docs/intro", Locale::En), "/en/docs/intro");
        assert_eq!(switch_locale("/ru/docs?tab=2#top", Locale::Hy), "/hy/docs?tab=2#top");
        assert_eq!(switch_locale("/ru", Locale::Ru), "/ru");
    }

    #[test]
    fn switch_locale_prefixes_paths_without_locale() {
        assert_eq!(switch_locale("/", Locale::Hy), "/hy");
        assert_eq!(switch_locale("/docs", Locale::Ru), "/ru/docs");
    }

    #[test]
    fn localized_path_builds_prefixed_paths() {
        assert_eq!(localized_path(Locale::En, "/"), "/en");
        assert_eq!(localized_path(Locale::Hy, "docs/"), "/hy/docs");
    }

    #[test]
    fn locale_of_reads_first_segment() {
        assert_eq!(locale_of("/hy/docs"), Some(Locale::Hy));
        assert_eq!(locale_of("/fr"), None);
        assert_eq!(locale_of("/"), None);
    }
}
